//! Validation for incoming track records.
//!
//! Checks every record against the schema invariants before it enters the
//! store: required text fields present, bounded audio features inside
//! [0, 1], duration non-negative. Counter fields are unsigned by type and
//! need no range check.

use super::record::TrackRecord;
use std::fmt;

/// Schema violation found in a single record
#[derive(Debug)]
pub enum SchemaError {
    EmptyField {
        field: &'static str,
    },
    OutOfBounds {
        field: &'static str,
        value: f64,
    },
    NegativeValue {
        field: &'static str,
        value: f64,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptyField { field } => {
                write!(f, "Field '{}' is required but was empty", field)
            }
            SchemaError::OutOfBounds { field, value } => {
                write!(f, "Field '{}' must be within [0, 1], got {}", field, value)
            }
            SchemaError::NegativeValue { field, value } => {
                write!(f, "Field '{}' must be non-negative, got {}", field, value)
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Validate a single track record against the schema invariants.
pub fn validate_record(record: &TrackRecord) -> SchemaResult<()> {
    if record.artist.trim().is_empty() {
        return Err(SchemaError::EmptyField { field: "artist" });
    }
    if record.track.trim().is_empty() {
        return Err(SchemaError::EmptyField { field: "track" });
    }
    if let Some(album) = &record.album {
        if album.trim().is_empty() {
            return Err(SchemaError::EmptyField { field: "album" });
        }
    }

    let bounded = [
        ("danceability", record.danceability),
        ("energy", record.energy),
        ("speechiness", record.speechiness),
        ("acousticness", record.acousticness),
        ("instrumentalness", record.instrumentalness),
        ("liveness", record.liveness),
        ("valence", record.valence),
    ];
    for (field, value) in bounded {
        if !(0.0..=1.0).contains(&value) {
            return Err(SchemaError::OutOfBounds { field, value });
        }
    }

    if record.duration_min < 0.0 {
        return Err(SchemaError::NegativeValue {
            field: "duration_min",
            value: record.duration_min,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::record::{AlbumType, Platform};

    fn make_valid_record() -> TrackRecord {
        TrackRecord {
            artist: "Test Artist".to_string(),
            track: "Test Track".to_string(),
            album: Some("Test Album".to_string()),
            album_type: AlbumType::Album,
            danceability: 0.7,
            energy: 0.6,
            loudness: -6.5,
            speechiness: 0.04,
            acousticness: 0.15,
            instrumentalness: 0.0,
            liveness: 0.12,
            valence: 0.55,
            tempo: 118.0,
            duration_min: 3.8,
            views: Some(1_000_000),
            likes: Some(25_000),
            comments: Some(1_200),
            stream: Some(4_000_000),
            licensed: true,
            official_video: true,
            most_played_on: Platform::Spotify,
        }
    }

    #[test]
    fn test_validate_valid_record() {
        let record = make_valid_record();
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_validate_empty_artist() {
        let mut record = make_valid_record();
        record.artist = "".to_string();
        let err = validate_record(&record).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyField { field: "artist" }));
    }

    #[test]
    fn test_validate_whitespace_track() {
        let mut record = make_valid_record();
        record.track = "   ".to_string();
        let err = validate_record(&record).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyField { field: "track" }));
    }

    #[test]
    fn test_validate_empty_album_string() {
        // A record with no album is fine, an empty album name is not.
        let mut record = make_valid_record();
        record.album = None;
        assert!(validate_record(&record).is_ok());

        record.album = Some("".to_string());
        let err = validate_record(&record).unwrap_err();
        assert!(matches!(err, SchemaError::EmptyField { field: "album" }));
    }

    #[test]
    fn test_validate_danceability_above_one() {
        let mut record = make_valid_record();
        record.danceability = 1.5;
        let err = validate_record(&record).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::OutOfBounds {
                field: "danceability",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_negative_liveness() {
        let mut record = make_valid_record();
        record.liveness = -0.1;
        let err = validate_record(&record).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::OutOfBounds {
                field: "liveness",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_nan_feature_rejected() {
        let mut record = make_valid_record();
        record.valence = f64::NAN;
        let err = validate_record(&record).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::OutOfBounds { field: "valence", .. }
        ));
    }

    #[test]
    fn test_validate_negative_duration() {
        let mut record = make_valid_record();
        record.duration_min = -0.5;
        let err = validate_record(&record).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::NegativeValue {
                field: "duration_min",
                ..
            }
        ));
    }
}
