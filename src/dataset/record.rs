//! Row type for the in-memory track table.
//!
//! One record per (artist, track, album) combination, carrying the audio
//! features, engagement counters, and streaming info the analyses read.

use serde::{Deserialize, Serialize};

// =============================================================================
// Enumerations
// =============================================================================

/// Release kind of the album a track belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumType {
    Album,
    Single,
    Compilation,
}

impl AlbumType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumType::Album => "album",
            AlbumType::Single => "single",
            AlbumType::Compilation => "compilation",
        }
    }
}

impl std::fmt::Display for AlbumType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service where a track has accumulated the most plays.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Platform {
    Spotify,
    Youtube,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Spotify => "Spotify",
            Platform::Youtube => "Youtube",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Track record
// =============================================================================

/// A single row of the dataset.
///
/// The engagement counters (`views`, `likes`, `comments`, `stream`) are
/// optional: a track missing from one service has no counts for it.
/// Aggregations skip missing values, rankings order them as zero.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub artist: String,
    pub track: String,
    pub album: Option<String>,
    pub album_type: AlbumType,

    // Audio features; all but loudness and tempo are bounded to [0, 1].
    pub danceability: f64,
    pub energy: f64,
    pub loudness: f64,
    pub speechiness: f64,
    pub acousticness: f64,
    pub instrumentalness: f64,
    pub liveness: f64,
    pub valence: f64,
    pub tempo: f64,
    pub duration_min: f64,

    // Engagement and streaming counters.
    pub views: Option<u64>,
    pub likes: Option<u64>,
    pub comments: Option<u64>,
    pub stream: Option<u64>,

    pub licensed: bool,
    pub official_video: bool,
    pub most_played_on: Platform,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_type_serde_roundtrip() {
        let types = vec![AlbumType::Album, AlbumType::Single, AlbumType::Compilation];
        for album_type in types {
            let json = serde_json::to_string(&album_type).unwrap();
            let parsed: AlbumType = serde_json::from_str(&json).unwrap();
            assert_eq!(album_type, parsed);
        }
    }

    #[test]
    fn test_album_type_serializes_lowercase() {
        let json = serde_json::to_string(&AlbumType::Compilation).unwrap();
        assert_eq!(json, "\"compilation\"");
    }

    #[test]
    fn test_platform_serde_roundtrip() {
        let platforms = vec![Platform::Spotify, Platform::Youtube];
        for platform in platforms {
            let json = serde_json::to_string(&platform).unwrap();
            let parsed: Platform = serde_json::from_str(&json).unwrap();
            assert_eq!(platform, parsed);
        }
    }

    #[test]
    fn test_track_record_deserializes_null_counters() {
        let json = r#"{
            "artist": "Test Artist",
            "track": "Test Track",
            "album": null,
            "album_type": "single",
            "danceability": 0.5,
            "energy": 0.5,
            "loudness": -7.2,
            "speechiness": 0.05,
            "acousticness": 0.1,
            "instrumentalness": 0.0,
            "liveness": 0.2,
            "valence": 0.6,
            "tempo": 120.0,
            "duration_min": 3.5,
            "views": 1000,
            "likes": null,
            "comments": null,
            "stream": 500,
            "licensed": true,
            "official_video": false,
            "most_played_on": "Spotify"
        }"#;
        let record: TrackRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.artist, "Test Artist");
        assert_eq!(record.album, None);
        assert_eq!(record.views, Some(1000));
        assert_eq!(record.likes, None);
        assert_eq!(record.most_played_on, Platform::Spotify);
    }
}
