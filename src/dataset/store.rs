//! The in-memory record store.
//!
//! A loaded store is immutable: records keep their load order and no
//! mutation API exists, which is what makes every analysis a pure read.

use super::record::TrackRecord;
use super::validation::{validate_record, SchemaResult};
use std::collections::HashSet;

/// Immutable table of track records, in load order.
#[derive(Debug)]
pub struct RecordStore {
    records: Vec<TrackRecord>,
}

impl RecordStore {
    /// Ingest an ordered sequence of records, validating each one.
    ///
    /// Fails with the first schema violation found. With the `no_checks`
    /// feature the validation pass is skipped and rows are stored as-is.
    pub fn load(records: Vec<TrackRecord>) -> SchemaResult<Self> {
        if cfg!(not(feature = "no_checks")) {
            for record in &records {
                validate_record(record)?;
            }
        }
        Ok(RecordStore { records })
    }

    /// All records, in the order they were loaded.
    pub fn all(&self) -> &[TrackRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn distinct_artist_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.artist.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn distinct_album_count(&self) -> usize {
        self.records
            .iter()
            .filter_map(|r| r.album.as_deref())
            .collect::<HashSet<_>>()
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::{AlbumType, Platform};

    fn record(artist: &str, track: &str, album: Option<&str>) -> TrackRecord {
        TrackRecord {
            artist: artist.to_string(),
            track: track.to_string(),
            album: album.map(String::from),
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
            views: Some(100),
            likes: Some(10),
            comments: Some(1),
            stream: Some(200),
            licensed: true,
            official_video: false,
            most_played_on: Platform::Youtube,
        }
    }

    #[test]
    fn test_load_preserves_order() {
        let records = vec![
            record("B", "T2", Some("Y")),
            record("A", "T1", Some("X")),
            record("A", "T3", None),
        ];
        let store = RecordStore::load(records).unwrap();
        let tracks: Vec<&str> = store.all().iter().map(|r| r.track.as_str()).collect();
        assert_eq!(tracks, vec!["T2", "T1", "T3"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_load_empty_dataset() {
        let store = RecordStore::load(Vec::new()).unwrap();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[cfg(not(feature = "no_checks"))]
    #[test]
    fn test_load_rejects_invalid_record() {
        let mut bad = record("A", "T1", Some("X"));
        bad.energy = 2.0;
        let err = RecordStore::load(vec![record("B", "T2", None), bad]).unwrap_err();
        assert!(matches!(
            err,
            crate::dataset::validation::SchemaError::OutOfBounds { field: "energy", .. }
        ));
    }

    #[test]
    fn test_distinct_counts() {
        let records = vec![
            record("A", "T1", Some("X")),
            record("A", "T2", Some("X")),
            record("B", "T3", Some("Y")),
            record("C", "T4", None),
        ];
        let store = RecordStore::load(records).unwrap();
        assert_eq!(store.distinct_artist_count(), 3);
        // The null album does not count as an album.
        assert_eq!(store.distinct_album_count(), 2);
    }
}
