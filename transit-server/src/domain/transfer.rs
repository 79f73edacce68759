//! Transfer points between lines.
//!
//! A transfer point is a station where two or more lines intersect,
//! allowing a rider to switch lines. Transfer points only name the lines
//! they join; the cross-check that the station actually appears on each
//! of those lines belongs to network assembly.

use std::collections::HashSet;

use super::{DomainError, LineId, StationName};

/// A station at which two or more lines intersect.
///
/// # Invariants
///
/// - At least two lines, all distinct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPoint {
    station: StationName,
    lines: Vec<LineId>,
}

impl TransferPoint {
    /// Constructs a transfer point, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two lines are given or a line is
    /// listed more than once.
    pub fn new(station: StationName, lines: Vec<LineId>) -> Result<Self, DomainError> {
        if lines.len() < 2 {
            return Err(DomainError::TooFewTransferLines(station));
        }

        let mut seen = HashSet::new();
        for line in &lines {
            if !seen.insert(line) {
                return Err(DomainError::DuplicateTransferLine {
                    station,
                    line: line.clone(),
                });
            }
        }

        Ok(Self { station, lines })
    }

    /// Returns the station at which the transfer happens.
    pub fn station(&self) -> &StationName {
        &self.station
    }

    /// Returns the lines joined by this transfer point.
    pub fn lines(&self) -> &[LineId] {
        &self.lines
    }

    /// Returns true if this transfer point is served by the given line.
    pub fn serves(&self, line: &LineId) -> bool {
        self.lines.iter().any(|l| l == line)
    }

    /// Returns true if this point allows a change between the two given
    /// (distinct) lines.
    pub fn connects(&self, from: &LineId, to: &LineId) -> bool {
        from != to && self.serves(from) && self.serves(to)
    }
}
