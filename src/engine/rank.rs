//! Partitioned ranking over arbitrary rows.
//!
//! The SQL window-function pattern made explicit: split rows into
//! partitions, stable-sort each partition descending by an ordering key,
//! then assign ranks according to the chosen tie policy.

use std::collections::HashMap;
use std::hash::Hash;

/// Tie policy for rank assignment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RankMethod {
    /// Ties share a rank and the next distinct value skips past the tied
    /// block, like SQL `RANK()`: 1, 1, 3.
    Competition,
    /// Every row gets a distinct consecutive rank; ties keep their input
    /// order, like SQL `ROW_NUMBER()` over a stable sort.
    RowNumber,
}

/// A row with its assigned rank (1-based).
#[derive(Clone, Debug, PartialEq)]
pub struct Ranked<R> {
    pub row: R,
    pub rank: u32,
}

/// Rank rows within partitions, descending by the ordering key.
///
/// Rows whose `partition_fn` returns `None` are excluded entirely. Each
/// partition's result is sorted by rank; input order is preserved within
/// ties, which is what makes `RowNumber` stable.
pub fn rank_within<R, P, O, PF, OF>(
    rows: impl IntoIterator<Item = R>,
    partition_fn: PF,
    order_fn: OF,
    method: RankMethod,
) -> HashMap<P, Vec<Ranked<R>>>
where
    P: Eq + Hash,
    O: Ord,
    PF: Fn(&R) -> Option<P>,
    OF: Fn(&R) -> O,
{
    let mut partitions: HashMap<P, Vec<(O, R)>> = HashMap::new();
    for row in rows {
        let partition = match partition_fn(&row) {
            Some(partition) => partition,
            None => continue,
        };
        let order = order_fn(&row);
        partitions.entry(partition).or_default().push((order, row));
    }

    partitions
        .into_iter()
        .map(|(partition, mut rows)| {
            rows.sort_by(|a, b| b.0.cmp(&a.0));

            let mut ranked = Vec::with_capacity(rows.len());
            let mut prev_order: Option<O> = None;
            let mut prev_rank = 0u32;
            for (position, (order, row)) in rows.into_iter().enumerate() {
                let rank = match method {
                    RankMethod::RowNumber => position as u32 + 1,
                    RankMethod::Competition => {
                        if prev_order.as_ref() == Some(&order) {
                            prev_rank
                        } else {
                            position as u32 + 1
                        }
                    }
                };
                prev_order = Some(order);
                prev_rank = rank;
                ranked.push(Ranked { row, rank });
            }
            (partition, ranked)
        })
        .collect()
}

/// Rank every row as one partition.
pub fn rank_all<R, O, OF>(
    rows: impl IntoIterator<Item = R>,
    order_fn: OF,
    method: RankMethod,
) -> Vec<Ranked<R>>
where
    O: Ord,
    OF: Fn(&R) -> O,
{
    rank_within(rows, |_| Some(()), order_fn, method)
        .remove(&())
        .unwrap_or_default()
}

/// Keep only rows with rank ≤ n.
///
/// With competition ranking a partition can keep more than n rows when
/// the boundary rank is tied; the contract is the rank cutoff, not the
/// row count.
pub fn top_n<P, R>(ranked: HashMap<P, Vec<Ranked<R>>>, n: u32) -> HashMap<P, Vec<Ranked<R>>>
where
    P: Eq + Hash,
{
    ranked
        .into_iter()
        .map(|(partition, rows)| {
            let kept: Vec<Ranked<R>> = rows.into_iter().take_while(|r| r.rank <= n).collect();
            (partition, kept)
        })
        .collect()
}
