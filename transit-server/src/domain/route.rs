//! Candidate route types.
//!
//! A `Route` is one possible path between two stations, produced by the
//! candidate generator and held only for the duration of a query. It owns
//! its traversed station sequence and carries no reference back to the
//! network it was derived from.

use super::{DomainError, LineId, StationName};

/// How a route uses the network's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// A single line covers the whole traversed sequence.
    Direct {
        /// The line ridden end to end.
        line: LineId,
    },

    /// Two lines joined by one change at a transfer station.
    Transfer {
        /// The line boarded at the origin.
        first: LineId,
        /// The line ridden after the change.
        second: LineId,
    },
}

/// A candidate route: a kind plus the ordered sequence of stations
/// actually traversed.
///
/// # Invariants
///
/// - A direct route traverses at least two stations
/// - A transfer route traverses at least three stations (origin, transfer
///   station, destination) on two distinct lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    kind: RouteKind,
    stations: Vec<StationName>,
}

impl Route {
    /// Constructs a direct route along a single line.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two stations are traversed.
    pub fn direct(line: LineId, stations: Vec<StationName>) -> Result<Self, DomainError> {
        if stations.len() < 2 {
            return Err(DomainError::InvalidRoute(
                "direct route must traverse at least two stations",
            ));
        }

        Ok(Self {
            kind: RouteKind::Direct { line },
            stations,
        })
    }

    /// Constructs a transfer route across two lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the two lines are the same or fewer than three
    /// stations are traversed.
    pub fn transfer(
        first: LineId,
        second: LineId,
        stations: Vec<StationName>,
    ) -> Result<Self, DomainError> {
        if first == second {
            return Err(DomainError::InvalidRoute(
                "transfer route must use two distinct lines",
            ));
        }

        if stations.len() < 3 {
            return Err(DomainError::InvalidRoute(
                "transfer route must traverse at least three stations",
            ));
        }

        Ok(Self {
            kind: RouteKind::Transfer { first, second },
            stations,
        })
    }

    /// Returns how this route uses the network's lines.
    pub fn kind(&self) -> &RouteKind {
        &self.kind
    }

    /// Returns the ordered sequence of stations traversed.
    pub fn stations(&self) -> &[StationName] {
        &self.stations
    }

    /// Returns the first station of the route.
    pub fn origin(&self) -> &StationName {
        // Invariant: at least two stations
        &self.stations[0]
    }

    /// Returns the last station of the route.
    pub fn destination(&self) -> &StationName {
        &self.stations[self.stations.len() - 1]
    }

    /// Returns the number of line changes: 0 for direct, 1 for transfer.
    pub fn transfer_count(&self) -> usize {
        match &self.kind {
            RouteKind::Direct { .. } => 0,
            RouteKind::Transfer { .. } => 1,
        }
    }

    /// Returns the number of stations traversed, endpoints included.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Returns a display label for the lines used, e.g. "H72" or
    /// "H72 -> G12".
    pub fn line_label(&self) -> String {
        match &self.kind {
            RouteKind::Direct { line } => line.to_string(),
            RouteKind::Transfer { first, second } => format!("{first} -> {second}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    fn line_id(s: &str) -> LineId {
        LineId::parse(s).unwrap()
    }

    fn stations(names: &[&str]) -> Vec<StationName> {
        names.iter().map(|s| station(s)).collect()
    }

    #[test]
    fn direct_route() {
        let route = Route::direct(
            line_id("H72"),
            stations(&["Portal 80", "Calle 76", "Calle 72"]),
        )
        .unwrap();

        assert_eq!(route.transfer_count(), 0);
        assert_eq!(route.station_count(), 3);
        assert_eq!(route.origin().as_str(), "Portal 80");
        assert_eq!(route.destination().as_str(), "Calle 72");
        assert_eq!(route.line_label(), "H72");
    }

    #[test]
    fn direct_route_rejects_single_station() {
        let result = Route::direct(line_id("H72"), stations(&["Marly"]));
        assert!(matches!(result, Err(DomainError::InvalidRoute(_))));
    }

    #[test]
    fn transfer_route() {
        let route = Route::transfer(
            line_id("H72"),
            line_id("G12"),
            stations(&["Portal 80", "Marly", "Portal Sur"]),
        )
        .unwrap();

        assert_eq!(route.transfer_count(), 1);
        assert_eq!(route.station_count(), 3);
        assert_eq!(route.origin().as_str(), "Portal 80");
        assert_eq!(route.destination().as_str(), "Portal Sur");
        assert_eq!(route.line_label(), "H72 -> G12");
    }

    #[test]
    fn transfer_route_records_lines_in_order() {
        let route = Route::transfer(
            line_id("G12"),
            line_id("H72"),
            stations(&["Portal Sur", "Marly", "Portal 80"]),
        )
        .unwrap();

        assert_eq!(
            route.kind(),
            &RouteKind::Transfer {
                first: line_id("G12"),
                second: line_id("H72"),
            }
        );
        assert_eq!(route.line_label(), "G12 -> H72");
    }

    #[test]
    fn transfer_route_rejects_same_line() {
        let result = Route::transfer(
            line_id("H72"),
            line_id("H72"),
            stations(&["Portal 80", "Marly", "Portal Sur"]),
        );
        assert!(matches!(result, Err(DomainError::InvalidRoute(_))));
    }

    #[test]
    fn transfer_route_rejects_too_few_stations() {
        let result = Route::transfer(
            line_id("H72"),
            line_id("G12"),
            stations(&["Portal 80", "Portal Sur"]),
        );
        assert!(matches!(result, Err(DomainError::InvalidRoute(_))));
    }
}
