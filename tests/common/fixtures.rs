//! Test fixture creation for datasets
//!
//! The standard dataset holds 6 tracks by 3 artists across 3 albums,
//! shaped so that every analysis has a non-trivial answer: one clear
//! ranking order, one albumless single, one record with missing
//! counters, and one track hitting each audio-feature filter.

use super::constants::*;
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use track_insights::dataset::{AlbumType, Platform, TrackRecord};
use track_insights::{load_dataset, RecordStore};

/// Returns a valid record with neutral audio features. Tests override
/// the fields they care about.
pub fn record(artist: &str, track: &str, album: Option<&str>) -> TrackRecord {
    TrackRecord {
        artist: artist.to_string(),
        track: track.to_string(),
        album: album.map(str::to_string),
        album_type: AlbumType::Album,
        danceability: 0.5,
        energy: 0.5,
        loudness: -8.0,
        speechiness: 0.05,
        acousticness: 0.2,
        instrumentalness: 0.0,
        liveness: 0.15,
        valence: 0.5,
        tempo: 110.0,
        duration_min: 3.0,
        views: Some(1_000),
        likes: Some(100),
        comments: Some(10),
        stream: Some(500),
        licensed: true,
        official_video: false,
        most_played_on: Platform::Spotify,
    }
}

/// Creates the standard 6-track dataset.
pub fn create_test_dataset() -> Vec<TrackRecord> {
    // Neon Harbor: three tracks on one album, dominating views and likes.
    let mut track_1 = record(ARTIST_1_NAME, TRACK_1_TITLE, Some(ALBUM_1_TITLE));
    track_1.danceability = 0.85;
    track_1.energy = 0.75;
    track_1.loudness = -5.2;
    track_1.acousticness = 0.12;
    track_1.liveness = 0.3;
    track_1.valence = 0.8;
    track_1.tempo = 122.0;
    track_1.duration_min = 3.5;
    track_1.views = Some(TRACK_1_VIEWS);
    track_1.likes = Some(60_000_000);
    track_1.comments = Some(3_000_000);
    track_1.stream = Some(900_000);
    track_1.official_video = true;
    track_1.most_played_on = Platform::Youtube;

    let mut track_2 = record(ARTIST_1_NAME, TRACK_2_TITLE, Some(ALBUM_1_TITLE));
    track_2.danceability = 0.6;
    track_2.energy = 0.9;
    track_2.loudness = -4.8;
    track_2.liveness = 0.25;
    track_2.valence = 0.4;
    track_2.tempo = 140.0;
    track_2.duration_min = 4.0;
    track_2.views = Some(800_000_000);
    track_2.likes = Some(10_000_000);
    track_2.comments = Some(500_000);
    track_2.stream = Some(500_000);
    track_2.official_video = true;
    track_2.most_played_on = Platform::Youtube;

    let mut track_3 = record(ARTIST_1_NAME, TRACK_3_TITLE, Some(ALBUM_1_TITLE));
    track_3.danceability = 0.45;
    track_3.energy = 0.55;
    track_3.loudness = -7.5;
    track_3.acousticness = 0.1;
    track_3.liveness = 0.9;
    track_3.valence = 0.6;
    track_3.tempo = 95.0;
    track_3.duration_min = 4.5;
    track_3.views = Some(400_000_000);
    track_3.likes = Some(5_000_000);
    track_3.comments = Some(200_000);
    track_3.stream = Some(300_000);

    // Velvet Static: one instrumental album track, one albumless single
    // with no platform counters at all.
    let mut track_4 = record(ARTIST_2_NAME, TRACK_4_TITLE, Some(ALBUM_2_TITLE));
    track_4.danceability = 0.3;
    track_4.energy = 0.4;
    track_4.loudness = -12.0;
    track_4.speechiness = 0.03;
    track_4.acousticness = 0.7;
    track_4.instrumentalness = 1.0;
    track_4.liveness = 0.1;
    track_4.valence = 0.3;
    track_4.tempo = 80.0;
    track_4.views = Some(200_000_000);
    track_4.likes = Some(2_000_000);
    track_4.comments = Some(100_000);
    track_4.stream = Some(700_000);

    let mut track_5 = record(ARTIST_2_NAME, TRACK_5_TITLE, None);
    track_5.album_type = AlbumType::Single;
    track_5.valence = 0.55;
    track_5.instrumentalness = 0.2;
    track_5.duration_min = 2.0;
    track_5.views = None;
    track_5.likes = None;
    track_5.comments = None;
    track_5.stream = Some(100_000);
    track_5.licensed = false;

    // Moss Cathedral: one long compilation track.
    let mut track_6 = record(ARTIST_3_NAME, TRACK_6_TITLE, Some(ALBUM_3_TITLE));
    track_6.album_type = AlbumType::Compilation;
    track_6.danceability = 0.2;
    track_6.energy = 0.3;
    track_6.loudness = -14.0;
    track_6.acousticness = 0.8;
    track_6.instrumentalness = 0.6;
    track_6.tempo = 70.0;
    track_6.duration_min = 6.0;
    track_6.views = Some(50_000_000);
    track_6.likes = Some(1_000_000);
    track_6.comments = Some(50_000);
    track_6.stream = Some(250_000);
    track_6.most_played_on = Platform::Youtube;

    vec![track_1, track_2, track_3, track_4, track_5, track_6]
}

/// Writes records to a temporary JSON file shaped like a real dataset.
/// The file is deleted when the returned handle is dropped.
pub fn write_dataset(records: &[TrackRecord]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    let json = serde_json::to_string_pretty(records)?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Writes the standard dataset to disk and loads it back through the
/// full validation pipeline.
pub fn create_test_store() -> Result<RecordStore> {
    let file = write_dataset(&create_test_dataset())?;
    load_dataset(file.path(), true)
}
