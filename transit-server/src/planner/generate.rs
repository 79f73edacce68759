//! Candidate route generation.
//!
//! Two independent matching rules, both evaluated for every query:
//!
//! - **Direct**: a single line serves origin and destination, in that
//!   stored order.
//! - **Transfer**: an ordered pair of distinct lines joined by a transfer
//!   point, with origin before the transfer station on the first line and
//!   the transfer station before the destination on the second.
//!
//! A query may produce zero, one, or many candidates from each rule.
//! Line order is directional: only ascending-index traversal matches.

use tracing::trace;

use crate::domain::{Route, StationName};
use crate::network::Network;

/// Generate every candidate route between two stations.
///
/// Unknown station names simply yield no candidates; the caller is
/// expected to have validated the query. All state is local to the call
/// and the network is never mutated.
pub fn generate(origin: &StationName, destination: &StationName, network: &Network) -> Vec<Route> {
    let mut candidates = Vec::new();

    direct_candidates(origin, destination, network, &mut candidates);
    transfer_candidates(origin, destination, network, &mut candidates);

    trace!(
        origin = %origin,
        destination = %destination,
        candidates = candidates.len(),
        "candidate generation complete"
    );

    candidates
}

/// Emit one Direct candidate per line serving both stations in order.
fn direct_candidates(
    origin: &StationName,
    destination: &StationName,
    network: &Network,
    out: &mut Vec<Route>,
) {
    for line in network.lines() {
        let (Some(from), Some(to)) = (line.position(origin), line.position(destination)) else {
            continue;
        };

        if from >= to {
            continue;
        }

        let stations = line.segment(from, to).to_vec();
        if let Ok(route) = Route::direct(line.id().clone(), stations) {
            out.push(route);
        }
    }
}

/// Emit one Transfer candidate per (first line, second line, transfer
/// point) triple that satisfies the ordering constraints.
fn transfer_candidates(
    origin: &StationName,
    destination: &StationName,
    network: &Network,
    out: &mut Vec<Route>,
) {
    for first in network.lines() {
        let Some(from) = first.position(origin) else {
            continue;
        };

        for second in network.lines() {
            if first.id() == second.id() {
                continue;
            }

            let Some(to) = second.position(destination) else {
                continue;
            };

            for point in network.transfers() {
                if !point.connects(first.id(), second.id()) {
                    continue;
                }

                let (Some(change_out), Some(change_in)) = (
                    first.position(point.station()),
                    second.position(point.station()),
                ) else {
                    continue;
                };

                if from >= change_out || change_in >= to {
                    continue;
                }

                // Concatenate the two legs, including the transfer station
                // exactly once.
                let mut stations = first.segment(from, change_out).to_vec();
                stations.extend_from_slice(&second.segment(change_in, to)[1..]);

                if let Ok(route) =
                    Route::transfer(first.id().clone(), second.id().clone(), stations)
                {
                    out.push(route);
                }
            }
        }
    }
}
