//! Track Insights Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod analysis;
pub mod cli_style;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod report;

// Re-export commonly used types for convenience
pub use analysis::{AnalysisKind, Analyzer};
pub use dataset::{load_dataset, RecordStore, TrackRecord};
pub use engine::{NumericField, StatsError};
