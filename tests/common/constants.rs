//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When the standard dataset changes (names, counters, totals),
//! update only this file.

// ============================================================================
// Standard Dataset Artists
// ============================================================================

/// Artist with three album tracks, the most likes and the best engagement
pub const ARTIST_1_NAME: &str = "Neon Harbor";

/// Artist with two tracks, one of them without an album
pub const ARTIST_2_NAME: &str = "Velvet Static";

/// Artist with a single compilation track
pub const ARTIST_3_NAME: &str = "Moss Cathedral";

// ============================================================================
// Standard Dataset Albums
// ============================================================================

/// Album holding the three Neon Harbor tracks
pub const ALBUM_1_TITLE: &str = "Midnight Transit";

/// Album holding the instrumental Velvet Static track
pub const ALBUM_2_TITLE: &str = "Analog Dreams";

/// Compilation holding the Moss Cathedral track
pub const ALBUM_3_TITLE: &str = "Quiet Rooms";

// ============================================================================
// Standard Dataset Tracks
// ============================================================================

/// Most viewed track, danceable and energetic, official video
pub const TRACK_1_TITLE: &str = "Glass City";

/// Second most viewed track, official video
pub const TRACK_2_TITLE: &str = "Underpass";

/// Live-sounding track with low acousticness
pub const TRACK_3_TITLE: &str = "Last Stop";

/// Fully instrumental track
pub const TRACK_4_TITLE: &str = "Tape Hiss";

/// Single without an album, platform counters missing
pub const TRACK_5_TITLE: &str = "Dial Tone";

/// Compilation track, least viewed
pub const TRACK_6_TITLE: &str = "Stone Garden";

// ============================================================================
// Standard Dataset Totals
// ============================================================================

/// View count of the most viewed track
pub const TRACK_1_VIEWS: u64 = 1_500_000_000;

/// Stream total across the three Neon Harbor tracks
pub const ARTIST_1_TOTAL_STREAMS: u64 = 1_700_000;

/// Stream total across the two Velvet Static tracks
pub const ARTIST_2_TOTAL_STREAMS: u64 = 800_000;

/// Stream total of the single Moss Cathedral track
pub const ARTIST_3_TOTAL_STREAMS: u64 = 250_000;

/// Like total across the three Neon Harbor tracks
pub const ARTIST_1_TOTAL_LIKES: u64 = 75_000_000;
