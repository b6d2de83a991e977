mod analyzer;
mod kind;

pub use analyzer::{AlbumViewTotals, Analyzer};
pub use kind::AnalysisKind;
