//! Station name types.

use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A validated station name.
///
/// Station names are free-form text (e.g. "Portal 80", "Calle 72") but are
/// never empty and never carry leading or trailing whitespace. This type
/// guarantees that any `StationName` value is valid by construction.
///
/// # Examples
///
/// ```
/// use transit_server::domain::StationName;
///
/// let marly = StationName::parse("Marly").unwrap();
/// assert_eq!(marly.as_str(), "Marly");
///
/// // Surrounding whitespace is trimmed
/// assert_eq!(StationName::parse("  Marly ").unwrap().as_str(), "Marly");
///
/// // Empty and whitespace-only names are rejected
/// assert!(StationName::parse("").is_err());
/// assert!(StationName::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string.
    ///
    /// Surrounding whitespace is trimmed; the trimmed name must be non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be empty",
            });
        }

        Ok(StationName(trimmed.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
