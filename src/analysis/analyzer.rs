//! The named analyses.
//!
//! `Analyzer` borrows a loaded record store and exposes each analysis as a
//! pure method composing the aggregation, ranking, and statistics engines.
//! Results are deterministic: mapping-shaped outputs come back sorted by
//! key, top lists sorted by rank, and ties between equal aggregates break
//! toward the lexicographically smaller name.

use crate::dataset::{AlbumType, Platform, RecordStore, TrackRecord};
use crate::engine::{
    group_by, pearson_correlation, rank_all, rank_within, safe_divide, top_n, NumericField,
    RankMethod, StatsError,
};
use serde::Serialize;
use std::collections::BTreeSet;

/// Album aggregate row: how many tracks it has and their views total.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AlbumViewTotals {
    pub album: String,
    pub track_count: u64,
    pub total_views: u64,
}

/// Read-only view over a loaded store, one method per analysis.
pub struct Analyzer<'a> {
    records: &'a [TrackRecord],
}

impl<'a> Analyzer<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Analyzer {
            records: store.all(),
        }
    }

    /// Every (track, artist) pair, in load order.
    pub fn tracks_with_artists(&self) -> Vec<(String, String)> {
        self.records
            .iter()
            .map(|r| (r.track.clone(), r.artist.clone()))
            .collect()
    }

    /// Names of the tracks on the given album, in load order.
    pub fn tracks_in_album(&self, album: &str) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.album.as_deref() == Some(album))
            .map(|r| r.track.clone())
            .collect()
    }

    /// The distinct album types present, sorted.
    pub fn distinct_album_types(&self) -> Vec<AlbumType> {
        self.records
            .iter()
            .map(|r| r.album_type)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The ten most viewed tracks, descending; missing views order as zero.
    pub fn top10_most_viewed(&self) -> Vec<(String, u64)> {
        let ranked = rank_all(
            self.records.iter(),
            |r| r.views.unwrap_or(0),
            RankMethod::RowNumber,
        );
        ranked
            .into_iter()
            .take(10)
            .map(|r| (r.row.track.clone(), r.row.views.unwrap_or(0)))
            .collect()
    }

    pub fn total_track_count(&self) -> usize {
        self.records.len()
    }

    /// Mean track duration per artist, sorted by artist name.
    pub fn avg_duration_per_artist(&self) -> Vec<(String, f64)> {
        let groups = group_by(
            self.records,
            |r| Some(r.artist.clone()),
            &[NumericField::DurationMin],
        );
        let mut rows: Vec<(String, f64)> = groups
            .into_iter()
            .filter_map(|(artist, summary)| {
                summary
                    .avg(NumericField::DurationMin)
                    .map(|avg| (artist, avg))
            })
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }

    /// The five artists with the highest total stream count.
    pub fn top5_artists_by_stream(&self) -> Vec<(String, u64)> {
        let groups = group_by(
            self.records,
            |r| Some(r.artist.clone()),
            &[NumericField::Stream],
        );
        let mut totals: Vec<(String, u64)> = groups
            .into_iter()
            .map(|(artist, summary)| (artist, summary.sum(NumericField::Stream) as u64))
            .collect();
        totals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        totals.truncate(5);
        totals
    }

    /// Tracks with danceability above 0.8 and energy above 0.7.
    pub fn high_dance_energy(&self) -> Vec<&'a TrackRecord> {
        self.records
            .iter()
            .filter(|r| r.danceability > 0.8 && r.energy > 0.7)
            .collect()
    }

    /// Mean valence per album, sorted by album name. Records without an
    /// album are excluded.
    pub fn avg_valence_per_album(&self) -> Vec<(String, f64)> {
        let groups = group_by(self.records, |r| r.album.clone(), &[NumericField::Valence]);
        let mut rows: Vec<(String, f64)> = groups
            .into_iter()
            .filter_map(|(album, summary)| {
                summary.avg(NumericField::Valence).map(|avg| (album, avg))
            })
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows
    }

    /// Albums whose total stream count exceeds one million, biggest first.
    pub fn albums_over_1m_streams(&self) -> Vec<(String, u64)> {
        let groups = group_by(self.records, |r| r.album.clone(), &[NumericField::Stream]);
        let mut rows: Vec<(String, u64)> = groups
            .into_iter()
            .map(|(album, summary)| (album, summary.sum(NumericField::Stream) as u64))
            .filter(|(_, total)| *total > 1_000_000)
            .collect();
        rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        rows
    }

    /// The artist with the highest total likes, if any records exist.
    pub fn artist_with_most_likes(&self) -> Option<(String, u64)> {
        let groups = group_by(
            self.records,
            |r| Some(r.artist.clone()),
            &[NumericField::Likes],
        );
        groups
            .into_iter()
            .map(|(artist, summary)| (artist, summary.sum(NumericField::Likes) as u64))
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
    }

    /// Per platform, the three most streamed tracks by row-number rank.
    pub fn top3_per_platform(&self) -> Vec<(Platform, Vec<(String, u64)>)> {
        let ranked = rank_within(
            self.records.iter(),
            |r| Some(r.most_played_on),
            |r| r.stream.unwrap_or(0),
            RankMethod::RowNumber,
        );
        let mut result: Vec<(Platform, Vec<(String, u64)>)> = top_n(ranked, 3)
            .into_iter()
            .map(|(platform, rows)| {
                let tracks = rows
                    .into_iter()
                    .map(|r| (r.row.track.clone(), r.row.stream.unwrap_or(0)))
                    .collect();
                (platform, tracks)
            })
            .collect();
        result.sort_by_key(|(platform, _)| *platform);
        result
    }

    /// How many tracks have an official video.
    pub fn count_official_video(&self) -> usize {
        self.records.iter().filter(|r| r.official_video).count()
    }

    /// Tracks with liveness above 0.8 and acousticness below 0.2.
    pub fn high_liveness_low_acoustic(&self) -> Vec<&'a TrackRecord> {
        self.records
            .iter()
            .filter(|r| r.liveness > 0.8 && r.acousticness < 0.2)
            .collect()
    }

    /// Tracks that are purely instrumental.
    pub fn fully_instrumental(&self) -> Vec<&'a TrackRecord> {
        self.records
            .iter()
            .filter(|r| r.instrumentalness == 1.0)
            .collect()
    }

    /// The artist with the highest engagement rate, (likes + comments) /
    /// views over the artist's songs. Artists whose views sum to zero
    /// have an undefined rate and are never returned.
    pub fn top_engagement_artist(&self) -> Option<(String, f64)> {
        let groups = group_by(
            self.records,
            |r| Some(r.artist.clone()),
            &[
                NumericField::Likes,
                NumericField::Comments,
                NumericField::Views,
            ],
        );
        groups
            .into_iter()
            .filter_map(|(artist, summary)| {
                let interactions =
                    summary.sum(NumericField::Likes) + summary.sum(NumericField::Comments);
                safe_divide(interactions, summary.sum(NumericField::Views))
                    .map(|rate| (artist, rate))
            })
            .max_by(|a, b| a.1.total_cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
    }

    /// The given album's most streamed tracks, competition-ranked with a
    /// cutoff at rank 3; a tied boundary keeps every track at that rank.
    pub fn top3_streamed_in_album(&self, album: &str) -> Vec<(String, u64)> {
        let in_album = self
            .records
            .iter()
            .filter(|r| r.album.as_deref() == Some(album));
        let ranked = rank_all(in_album, |r| r.stream.unwrap_or(0), RankMethod::Competition);
        ranked
            .into_iter()
            .take_while(|r| r.rank <= 3)
            .map(|r| (r.row.track.clone(), r.row.stream.unwrap_or(0)))
            .collect()
    }

    /// Albums with more than five tracks and over two billion total views,
    /// biggest first.
    pub fn albums_over_5_tracks_2b_views(&self) -> Vec<AlbumViewTotals> {
        let groups = group_by(self.records, |r| r.album.clone(), &[NumericField::Views]);
        let mut rows: Vec<AlbumViewTotals> = groups
            .into_iter()
            .filter_map(|(album, summary)| {
                let track_count = summary.count();
                let total_views = summary.sum(NumericField::Views) as u64;
                if track_count > 5 && total_views > 2_000_000_000 {
                    Some(AlbumViewTotals {
                        album,
                        track_count,
                        total_views,
                    })
                } else {
                    None
                }
            })
            .collect();
        rows.sort_by(|a, b| {
            b.total_views
                .cmp(&a.total_views)
                .then_with(|| a.album.cmp(&b.album))
        });
        rows
    }

    /// Pearson correlation between danceability and energy.
    pub fn dance_energy_correlation(&self) -> Result<f64, StatsError> {
        self.correlation(NumericField::Danceability, NumericField::Energy)
    }

    /// Pearson correlation between any two numeric columns.
    pub fn correlation(&self, x: NumericField, y: NumericField) -> Result<f64, StatsError> {
        pearson_correlation(self.records, x, y)
    }

    /// Artists with more songs than the average artist, ascending by
    /// song count.
    pub fn artists_above_avg_song_count(&self) -> Vec<(String, u64)> {
        let groups = group_by(self.records, |r| Some(r.artist.clone()), &[]);
        let counts: Vec<(String, u64)> = groups
            .into_iter()
            .map(|(artist, summary)| (artist, summary.count()))
            .collect();
        if counts.is_empty() {
            return Vec::new();
        }
        let avg = counts.iter().map(|(_, c)| *c as f64).sum::<f64>() / counts.len() as f64;
        let mut above: Vec<(String, u64)> = counts
            .into_iter()
            .filter(|(_, count)| (*count as f64) > avg)
            .collect();
        above.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        above
    }
}
