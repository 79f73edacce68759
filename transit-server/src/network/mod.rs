//! The static network model.
//!
//! A `Network` is the read-only set of lines and transfer points that
//! queries are answered against. It is assembled once, before any query,
//! and validated at that point: a malformed network is a configuration
//! error reported at load time, never at query time.

mod loader;
mod sample;

use std::collections::HashSet;

use crate::domain::{Line, LineId, StationName, TransferPoint};

pub use loader::{LoadError, load_path, parse_json};
pub use sample::sample_network;

/// Errors detected while assembling a network.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NetworkError {
    /// Two lines share an identifier
    #[error("duplicate line id: {0}")]
    DuplicateLine(LineId),

    /// A transfer point names a line that does not exist
    #[error("transfer point {station} references unknown line {line}")]
    UnknownTransferLine { station: StationName, line: LineId },

    /// A transfer point's station is missing from one of its lines
    #[error("transfer station {station} is not on line {line}")]
    TransferStationNotOnLine { station: StationName, line: LineId },
}

/// A validated, immutable transit network.
///
/// Read-only after construction: queries may share a `Network` freely
/// (e.g. behind an `Arc`) because nothing mutates it.
#[derive(Debug, Clone)]
pub struct Network {
    lines: Vec<Line>,
    transfers: Vec<TransferPoint>,
}

impl Network {
    /// Assembles a network from lines and transfer points, validating the
    /// cross-references between them.
    ///
    /// # Errors
    ///
    /// Returns an error if two lines share an identifier, a transfer point
    /// names an unknown line, or a transfer point's station does not appear
    /// on one of its listed lines.
    pub fn new(lines: Vec<Line>, transfers: Vec<TransferPoint>) -> Result<Self, NetworkError> {
        let mut ids = HashSet::new();
        for line in &lines {
            if !ids.insert(line.id()) {
                return Err(NetworkError::DuplicateLine(line.id().clone()));
            }
        }

        for point in &transfers {
            for id in point.lines() {
                let Some(line) = lines.iter().find(|l| l.id() == id) else {
                    return Err(NetworkError::UnknownTransferLine {
                        station: point.station().clone(),
                        line: id.clone(),
                    });
                };

                if !line.contains(point.station()) {
                    return Err(NetworkError::TransferStationNotOnLine {
                        station: point.station().clone(),
                        line: id.clone(),
                    });
                }
            }
        }

        Ok(Self { lines, transfers })
    }

    /// Returns all lines in declaration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Returns all transfer points in declaration order.
    pub fn transfers(&self) -> &[TransferPoint] {
        &self.transfers
    }

    /// Returns the line with the given identifier, if any.
    pub fn line(&self, id: &LineId) -> Option<&Line> {
        self.lines.iter().find(|l| l.id() == id)
    }

    /// Returns true if any line serves the given station.
    pub fn knows_station(&self, station: &StationName) -> bool {
        self.lines.iter().any(|l| l.contains(station))
    }
}
