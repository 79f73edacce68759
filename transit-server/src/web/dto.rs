//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Route, RouteKind};
use crate::network::Network;
use crate::planner::PlanResult;

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Origin station name
    pub origin: String,

    /// Destination station name
    pub destination: String,
}

/// A planned route in a response.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Route kind: "direct" or "transfer"
    pub kind: String,

    /// Line identifiers in riding order
    pub lines: Vec<String>,

    /// Display label for the lines, e.g. "H72 -> G12"
    pub line_label: String,

    /// Ordered stations traversed, endpoints included
    pub stations: Vec<String>,

    /// Number of line changes (0 or 1)
    pub transfer_count: usize,

    /// Number of stations traversed
    pub station_count: usize,
}

impl RouteResult {
    /// Build a response DTO from a domain route.
    pub fn from_route(route: &Route) -> Self {
        let (kind, lines) = match route.kind() {
            RouteKind::Direct { line } => ("direct".to_string(), vec![line.to_string()]),
            RouteKind::Transfer { first, second } => (
                "transfer".to_string(),
                vec![first.to_string(), second.to_string()],
            ),
        };

        Self {
            kind,
            lines,
            line_label: route.line_label(),
            stations: route.stations().iter().map(|s| s.to_string()).collect(),
            transfer_count: route.transfer_count(),
            station_count: route.station_count(),
        }
    }
}

/// Response for a plan request.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// The best route, absent when no route exists
    pub route: Option<RouteResult>,

    /// Number of candidates enumerated before selection
    pub candidates_considered: usize,
}

impl PlanResponse {
    /// Build a response DTO from a plan result.
    pub fn from_result(result: &PlanResult) -> Self {
        Self {
            route: result.route.as_ref().map(RouteResult::from_route),
            candidates_considered: result.candidates_considered,
        }
    }
}

/// A line in the network summary.
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// Line identifier
    pub id: String,

    /// Ordered stations served
    pub stations: Vec<String>,
}

/// A transfer point in the network summary.
#[derive(Debug, Serialize)]
pub struct TransferResult {
    /// Transfer station name
    pub station: String,

    /// Lines joined at this station
    pub lines: Vec<String>,
}

/// Response for the network summary endpoint.
#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    /// All lines
    pub lines: Vec<LineResult>,

    /// All transfer points
    pub transfers: Vec<TransferResult>,
}

impl NetworkResponse {
    /// Build a summary DTO from the network.
    pub fn from_network(network: &Network) -> Self {
        Self {
            lines: network
                .lines()
                .iter()
                .map(|line| LineResult {
                    id: line.id().to_string(),
                    stations: line.stations().iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
            transfers: network
                .transfers()
                .iter()
                .map(|point| TransferResult {
                    station: point.station().to_string(),
                    lines: point.lines().iter().map(|l| l.to_string()).collect(),
                })
                .collect(),
        }
    }
}

/// Error body returned for invalid queries.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of the problem
    pub error: String,
}
