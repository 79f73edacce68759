//! The planner facade.
//!
//! Orchestrates a single origin/destination query: validate the query,
//! generate candidates, select the winner. Every call is a fresh
//! evaluation against the immutable network; nothing is cached or carried
//! between calls.

use tracing::debug;

use crate::domain::{InvalidStationName, Route, StationName};
use crate::network::Network;

use super::generate::generate;
use super::select::select_best;

/// Error from an invalid query.
///
/// A query that is well-formed but has no route is *not* an error; see
/// [`PlanResult`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// Origin or destination is not a usable station name
    #[error("invalid station name: {0}")]
    InvalidStation(#[from] InvalidStationName),

    /// Origin and destination are the same station
    #[error("origin and destination are both {0}")]
    SameStation(StationName),

    /// The station appears on no line of the network
    #[error("unknown station: {0}")]
    UnknownStation(StationName),
}

/// Result of a plan query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanResult {
    /// The best route, or `None` when no candidate matched.
    pub route: Option<Route>,

    /// Number of candidates enumerated before selection.
    pub candidates_considered: usize,
}

/// Route planner over an immutable network.
pub struct Planner<'a> {
    network: &'a Network,
}

impl<'a> Planner<'a> {
    /// Create a planner for the given network.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Plan a route between two stations.
    ///
    /// Validates the query, then runs candidate generation and selection
    /// exactly once. `Ok` with `route: None` is the explicit no-route
    /// signal.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] when origin or destination is empty, unknown
    /// to the network, or when the two are the same station.
    pub fn plan(&self, origin: &str, destination: &str) -> Result<PlanResult, PlanError> {
        let origin = StationName::parse(origin)?;
        let destination = StationName::parse(destination)?;

        if origin == destination {
            return Err(PlanError::SameStation(origin));
        }

        for name in [&origin, &destination] {
            if !self.network.knows_station(name) {
                return Err(PlanError::UnknownStation(name.clone()));
            }
        }

        let candidates = generate(&origin, &destination, self.network);
        let candidates_considered = candidates.len();
        let route = select_best(candidates);

        debug!(
            origin = %origin,
            destination = %destination,
            candidates = candidates_considered,
            found = route.is_some(),
            "plan query evaluated"
        );

        Ok(PlanResult {
            route,
            candidates_considered,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteKind;
    use crate::network::sample_network;

    fn names(stations: &[StationName]) -> Vec<&str> {
        stations.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn direct_route_on_sample_network() {
        let network = sample_network();
        let planner = Planner::new(&network);

        let result = planner.plan("Portal 80", "Calle 72").unwrap();
        let route = result.route.unwrap();

        assert!(matches!(route.kind(), RouteKind::Direct { .. }));
        assert_eq!(route.transfer_count(), 0);
        assert_eq!(route.station_count(), 3);
        assert_eq!(
            names(route.stations()),
            vec!["Portal 80", "Calle 76", "Calle 72"]
        );
    }

    #[test]
    fn transfer_route_on_sample_network() {
        let network = sample_network();
        let planner = Planner::new(&network);

        let result = planner.plan("Portal 80", "Portal Sur").unwrap();
        let route = result.route.unwrap();

        assert_eq!(route.transfer_count(), 1);
        assert_eq!(route.station_count(), 7);
        assert_eq!(route.line_label(), "H72 -> G12");
        assert_eq!(
            names(route.stations()),
            vec![
                "Portal 80",
                "Calle 76",
                "Calle 72",
                "Marly",
                "Calle 45",
                "Calle 57",
                "Portal Sur"
            ]
        );
    }

    #[test]
    fn reverse_direction_is_no_route() {
        // Stored line order is the only traversable direction, so the
        // reverse of a plannable trip finds nothing.
        let network = sample_network();
        let planner = Planner::new(&network);

        let result = planner.plan("Portal Sur", "Portal 80").unwrap();

        assert!(result.route.is_none());
        assert_eq!(result.candidates_considered, 0);
    }

    #[test]
    fn same_station_is_rejected() {
        let network = sample_network();
        let planner = Planner::new(&network);

        let result = planner.plan("Marly", "Marly");
        assert!(matches!(result, Err(PlanError::SameStation(_))));
    }

    #[test]
    fn same_station_after_trimming_is_rejected() {
        let network = sample_network();
        let planner = Planner::new(&network);

        let result = planner.plan("Marly", "  Marly ");
        assert!(matches!(result, Err(PlanError::SameStation(_))));
    }

    #[test]
    fn unknown_origin_is_rejected() {
        let network = sample_network();
        let planner = Planner::new(&network);

        let result = planner.plan("Atlantis", "Marly");
        assert!(matches!(result, Err(PlanError::UnknownStation(_))));
    }

    #[test]
    fn unknown_destination_is_rejected() {
        let network = sample_network();
        let planner = Planner::new(&network);

        let result = planner.plan("Marly", "Atlantis");
        assert!(matches!(result, Err(PlanError::UnknownStation(_))));
    }

    #[test]
    fn empty_station_is_rejected() {
        let network = sample_network();
        let planner = Planner::new(&network);

        assert!(matches!(
            planner.plan("", "Marly"),
            Err(PlanError::InvalidStation(_))
        ));
        assert!(matches!(
            planner.plan("Marly", "   "),
            Err(PlanError::InvalidStation(_))
        ));
    }

    #[test]
    fn direct_wins_when_both_kinds_exist() {
        use crate::domain::{Line, LineId, TransferPoint};
        use crate::network::Network;

        fn line(id: &str, stations: &[&str]) -> Line {
            Line::new(
                LineId::parse(id).unwrap(),
                stations
                    .iter()
                    .map(|s| StationName::parse(s).unwrap())
                    .collect(),
            )
            .unwrap()
        }

        let network = Network::new(
            vec![
                line("A", &["X", "T", "M", "Y"]),
                line("B", &["T", "Y", "Z"]),
            ],
            vec![TransferPoint::new(
                StationName::parse("T").unwrap(),
                vec![LineId::parse("A").unwrap(), LineId::parse("B").unwrap()],
            )
            .unwrap()],
        )
        .unwrap();

        let planner = Planner::new(&network);
        let result = planner.plan("X", "Y").unwrap();

        assert_eq!(result.candidates_considered, 2);
        assert_eq!(result.route.unwrap().transfer_count(), 0);
    }

    #[test]
    fn plan_is_idempotent() {
        let network = sample_network();
        let planner = Planner::new(&network);

        let first = planner.plan("Portal 80", "Portal Sur").unwrap();
        let second = planner.plan("Portal 80", "Portal Sur").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn calls_are_independent() {
        // A failed query must not leak into the next one.
        let network = sample_network();
        let planner = Planner::new(&network);

        assert!(planner.plan("Atlantis", "Marly").is_err());

        let result = planner.plan("Portal 80", "Calle 72").unwrap();
        assert!(result.route.is_some());
    }
}
