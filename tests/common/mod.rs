//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{create_test_store, TRACK_1_TITLE};
//! use track_insights::Analyzer;
//!
//! #[test]
//! fn test_most_viewed() {
//!     let store = create_test_store().unwrap();
//!     let analyzer = Analyzer::new(&store);
//!
//!     let ranking = analyzer.top10_most_viewed();
//!     assert_eq!(ranking[0].0, TRACK_1_TITLE);
//! }
//! ```

mod constants;
mod fixtures;

// Public API - this is what tests import
pub use constants::*;
pub use fixtures::{create_test_dataset, create_test_store, record, write_dataset};
