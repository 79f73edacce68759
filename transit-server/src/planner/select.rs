//! Candidate selection.

use crate::domain::Route;

/// Pick the best candidate: lexicographically smallest
/// `(transfer_count, station_count)` pair.
///
/// Fewer transfers always wins regardless of station count; ties on
/// transfers are broken by fewer stations. Exact ties on both keys
/// resolve to the first such candidate in the given order, so the
/// selection is deterministic for a fixed candidate ordering.
///
/// Returns `None` for an empty candidate set.
pub fn select_best(candidates: Vec<Route>) -> Option<Route> {
    candidates
        .into_iter()
        .min_by_key(|route| (route.transfer_count(), route.station_count()))
}
