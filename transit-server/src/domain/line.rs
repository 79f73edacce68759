//! Line types: identifiers and ordered station sequences.

use std::collections::HashSet;
use std::fmt;

use super::{DomainError, StationName};

/// Error returned when parsing an invalid line identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line id: {reason}")]
pub struct InvalidLineId {
    reason: &'static str,
}

/// A validated line identifier (e.g. "H72", "G12").
///
/// Line identifiers are non-empty and contain no whitespace. This type
/// guarantees that any `LineId` value is valid by construction.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(String);

impl LineId {
    /// Parse a line identifier from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineId> {
        if s.is_empty() {
            return Err(InvalidLineId {
                reason: "must not be empty",
            });
        }

        if s.chars().any(char::is_whitespace) {
            return Err(InvalidLineId {
                reason: "must not contain whitespace",
            });
        }

        Ok(LineId(s.to_string()))
    }

    /// Returns the line identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A transit line: an identifier plus an ordered sequence of stations.
///
/// The stored order is directionally significant: a line may only be
/// traversed from a lower index to a higher index. The reverse direction
/// is not part of the model.
///
/// # Invariants
///
/// - At least two stations
/// - Station names unique within the line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    stations: Vec<StationName>,
}

impl Line {
    /// Constructs a line, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns an error if the line has fewer than two stations or lists
    /// the same station more than once.
    pub fn new(id: LineId, stations: Vec<StationName>) -> Result<Self, DomainError> {
        if stations.len() < 2 {
            return Err(DomainError::TooFewStations(id));
        }

        let mut seen = HashSet::new();
        for station in &stations {
            if !seen.insert(station) {
                return Err(DomainError::DuplicateStation {
                    line: id,
                    station: station.clone(),
                });
            }
        }

        Ok(Self { id, stations })
    }

    /// Returns the line identifier.
    pub fn id(&self) -> &LineId {
        &self.id
    }

    /// Returns the ordered station sequence.
    pub fn stations(&self) -> &[StationName] {
        &self.stations
    }

    /// Returns the index of a station on this line, if it is served.
    pub fn position(&self, station: &StationName) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }

    /// Returns true if this line serves the given station.
    pub fn contains(&self, station: &StationName) -> bool {
        self.position(station).is_some()
    }

    /// Returns the inclusive slice of stations from index `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if `from > to` or `to` is out of bounds.
    pub fn segment(&self, from: usize, to: usize) -> &[StationName] {
        &self.stations[from..=to]
    }
}
