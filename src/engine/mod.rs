mod aggregate;
mod rank;
mod stats;

pub use aggregate::{group_by, safe_divide, GroupSummary, NumericField};
pub use rank::{rank_all, rank_within, top_n, RankMethod, Ranked};
pub use stats::{pearson_correlation, StatsError};
