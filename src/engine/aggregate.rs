//! Group-by aggregation over track records.
//!
//! One pass over the records builds a summary per group key: row count
//! plus sum and average for the requested numeric columns. Missing values
//! of nullable columns are skipped, the way SQL aggregates skip NULL.

use crate::dataset::TrackRecord;
use std::collections::HashMap;
use std::hash::Hash;

// =============================================================================
// Numeric columns
// =============================================================================

/// A numeric column of the track table that aggregations can read.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NumericField {
    Danceability,
    Energy,
    Loudness,
    Speechiness,
    Acousticness,
    Instrumentalness,
    Liveness,
    Valence,
    Tempo,
    DurationMin,
    Views,
    Likes,
    Comments,
    Stream,
}

impl NumericField {
    pub const ALL: [NumericField; 14] = [
        NumericField::Danceability,
        NumericField::Energy,
        NumericField::Loudness,
        NumericField::Speechiness,
        NumericField::Acousticness,
        NumericField::Instrumentalness,
        NumericField::Liveness,
        NumericField::Valence,
        NumericField::Tempo,
        NumericField::DurationMin,
        NumericField::Views,
        NumericField::Likes,
        NumericField::Comments,
        NumericField::Stream,
    ];

    /// Value of this column for a record, `None` when the record has no
    /// value for it.
    pub fn extract(self, record: &TrackRecord) -> Option<f64> {
        match self {
            NumericField::Danceability => Some(record.danceability),
            NumericField::Energy => Some(record.energy),
            NumericField::Loudness => Some(record.loudness),
            NumericField::Speechiness => Some(record.speechiness),
            NumericField::Acousticness => Some(record.acousticness),
            NumericField::Instrumentalness => Some(record.instrumentalness),
            NumericField::Liveness => Some(record.liveness),
            NumericField::Valence => Some(record.valence),
            NumericField::Tempo => Some(record.tempo),
            NumericField::DurationMin => Some(record.duration_min),
            NumericField::Views => record.views.map(|v| v as f64),
            NumericField::Likes => record.likes.map(|v| v as f64),
            NumericField::Comments => record.comments.map(|v| v as f64),
            NumericField::Stream => record.stream.map(|v| v as f64),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NumericField::Danceability => "danceability",
            NumericField::Energy => "energy",
            NumericField::Loudness => "loudness",
            NumericField::Speechiness => "speechiness",
            NumericField::Acousticness => "acousticness",
            NumericField::Instrumentalness => "instrumentalness",
            NumericField::Liveness => "liveness",
            NumericField::Valence => "valence",
            NumericField::Tempo => "tempo",
            NumericField::DurationMin => "duration_min",
            NumericField::Views => "views",
            NumericField::Likes => "likes",
            NumericField::Comments => "comments",
            NumericField::Stream => "stream",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl std::fmt::Display for NumericField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Group summaries
// =============================================================================

/// Running sum for a single column within one group.
#[derive(Clone, Copy, Debug, Default)]
struct FieldAggregate {
    present: u64,
    sum: f64,
}

/// Aggregates for one group: row count plus per-column sums.
#[derive(Clone, Debug)]
pub struct GroupSummary {
    rows: u64,
    fields: Vec<(NumericField, FieldAggregate)>,
}

impl GroupSummary {
    fn new(fields: &[NumericField]) -> Self {
        GroupSummary {
            rows: 0,
            fields: fields
                .iter()
                .map(|f| (*f, FieldAggregate::default()))
                .collect(),
        }
    }

    fn add(&mut self, record: &TrackRecord) {
        self.rows += 1;
        for (field, aggregate) in self.fields.iter_mut() {
            if let Some(value) = field.extract(record) {
                aggregate.present += 1;
                aggregate.sum += value;
            }
        }
    }

    fn get(&self, field: NumericField) -> Option<&FieldAggregate> {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, a)| a)
    }

    /// Number of rows in the group.
    pub fn count(&self) -> u64 {
        self.rows
    }

    /// Sum of the column's present values; 0 when the column was not
    /// requested or every value was missing.
    pub fn sum(&self, field: NumericField) -> f64 {
        self.get(field).map(|a| a.sum).unwrap_or(0.0)
    }

    /// Mean over the column's present values; `None` when the column was
    /// not requested or every value was missing.
    pub fn avg(&self, field: NumericField) -> Option<f64> {
        match self.get(field) {
            Some(aggregate) if aggregate.present > 0 => {
                Some(aggregate.sum / aggregate.present as f64)
            }
            _ => None,
        }
    }
}

/// Group records by a key, accumulating the requested columns.
///
/// `key_fn` returning `None` drops the row from the result, which is how
/// album-level queries exclude records without an album.
pub fn group_by<K, F>(
    records: &[TrackRecord],
    key_fn: F,
    fields: &[NumericField],
) -> HashMap<K, GroupSummary>
where
    K: Eq + Hash,
    F: Fn(&TrackRecord) -> Option<K>,
{
    let mut groups: HashMap<K, GroupSummary> = HashMap::new();
    for record in records {
        let key = match key_fn(record) {
            Some(key) => key,
            None => continue,
        };
        groups
            .entry(key)
            .or_insert_with(|| GroupSummary::new(fields))
            .add(record);
    }
    groups
}

/// Division with a tagged undefined result instead of a zero-division
/// fault: `None` when the denominator is zero.
pub fn safe_divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{AlbumType, Platform};

    fn record(artist: &str, album: Option<&str>, views: Option<u64>, duration: f64) -> TrackRecord {
        TrackRecord {
            artist: artist.to_string(),
            track: format!("{} track", artist),
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
            duration_min: duration,
            views,
            likes: Some(10),
            comments: Some(1),
            stream: Some(200),
            licensed: true,
            official_video: false,
            most_played_on: Platform::Youtube,
        }
    }

    #[test]
    fn test_group_by_counts_rows() {
        let records = vec![
            record("A", Some("X"), Some(10), 3.0),
            record("A", Some("X"), Some(20), 4.0),
            record("B", Some("Y"), Some(5), 2.0),
        ];
        let groups = group_by(&records, |r| Some(r.artist.clone()), &[]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["A"].count(), 2);
        assert_eq!(groups["B"].count(), 1);
    }

    #[test]
    fn test_group_by_sums_and_averages() {
        let records = vec![
            record("A", Some("X"), Some(10), 3.0),
            record("A", Some("X"), Some(20), 5.0),
        ];
        let groups = group_by(
            &records,
            |r| Some(r.artist.clone()),
            &[NumericField::Views, NumericField::DurationMin],
        );
        let summary = &groups["A"];
        assert_eq!(summary.sum(NumericField::Views), 30.0);
        assert_eq!(summary.avg(NumericField::DurationMin), Some(4.0));
    }

    #[test]
    fn test_group_by_skips_missing_values() {
        let records = vec![
            record("A", Some("X"), Some(10), 3.0),
            record("A", Some("X"), None, 5.0),
            record("A", Some("X"), Some(20), 4.0),
        ];
        let groups = group_by(&records, |r| Some(r.artist.clone()), &[NumericField::Views]);
        let summary = &groups["A"];
        // Count covers all rows, the sum and average only present values.
        assert_eq!(summary.count(), 3);
        assert_eq!(summary.sum(NumericField::Views), 30.0);
        assert_eq!(summary.avg(NumericField::Views), Some(15.0));
    }

    #[test]
    fn test_group_by_avg_none_when_all_missing() {
        let records = vec![
            record("A", Some("X"), None, 3.0),
            record("A", Some("X"), None, 5.0),
        ];
        let groups = group_by(&records, |r| Some(r.artist.clone()), &[NumericField::Views]);
        let summary = &groups["A"];
        assert_eq!(summary.sum(NumericField::Views), 0.0);
        assert_eq!(summary.avg(NumericField::Views), None);
    }

    #[test]
    fn test_group_by_excludes_null_keys() {
        let records = vec![
            record("A", Some("X"), Some(10), 3.0),
            record("B", None, Some(20), 4.0),
        ];
        let groups = group_by(&records, |r| r.album.clone(), &[NumericField::Views]);
        assert_eq!(groups.len(), 1);
        assert!(groups.contains_key("X"));
    }

    #[test]
    fn test_unrequested_field_reads_as_empty() {
        let records = vec![record("A", Some("X"), Some(10), 3.0)];
        let groups = group_by(&records, |r| Some(r.artist.clone()), &[NumericField::Views]);
        let summary = &groups["A"];
        assert_eq!(summary.sum(NumericField::Stream), 0.0);
        assert_eq!(summary.avg(NumericField::Stream), None);
    }

    #[test]
    fn test_numeric_field_name_roundtrip() {
        for field in NumericField::ALL {
            assert_eq!(NumericField::from_name(field.name()), Some(field));
        }
        assert_eq!(NumericField::from_name("nope"), None);
    }

    #[test]
    fn test_safe_divide() {
        assert_eq!(safe_divide(10.0, 4.0), Some(2.5));
        assert_eq!(safe_divide(10.0, 0.0), None);
        assert_eq!(safe_divide(0.0, 5.0), Some(0.0));
    }
}
