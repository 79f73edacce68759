//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They
//! are distinct from network assembly and query errors.

use super::{LineId, StationName};

/// Domain-level errors for construction invariants.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Line declared with fewer than two stations
    #[error("line {0} must have at least two stations")]
    TooFewStations(LineId),

    /// Station listed more than once on one line
    #[error("line {line} lists station {station} more than once")]
    DuplicateStation { line: LineId, station: StationName },

    /// Transfer point declared with fewer than two lines
    #[error("transfer point {0} must connect at least two lines")]
    TooFewTransferLines(StationName),

    /// Line listed more than once on one transfer point
    #[error("transfer point {station} lists line {line} more than once")]
    DuplicateTransferLine { station: StationName, line: LineId },

    /// Invalid route construction (e.g., too few stations)
    #[error("invalid route: {0}")]
    InvalidRoute(&'static str),
}
