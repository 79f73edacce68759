//! Loading a network from a JSON document.
//!
//! The wire format is a plain description of lines and transfer points:
//!
//! ```json
//! {
//!   "lines": [
//!     { "id": "H72", "stations": ["Portal 80", "Calle 76", "Calle 72", "Marly"] }
//!   ],
//!   "transfers": [
//!     { "station": "Marly", "lines": ["H72", "G12"] }
//!   ]
//! }
//! ```
//!
//! The raw document is deserialized into untyped strings and then
//! converted into validated domain types, so every network invariant is
//! checked before the loader returns.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{
    DomainError, InvalidLineId, InvalidStationName, Line, LineId, StationName, TransferPoint,
};

use super::{Network, NetworkError};

/// Errors from loading a network document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Failed to read the file
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON in the expected shape
    #[error("failed to parse network file: {0}")]
    Json(#[from] serde_json::Error),

    /// A station name in the document is invalid
    #[error("network file: {0}")]
    Station(#[from] InvalidStationName),

    /// A line identifier in the document is invalid
    #[error("network file: {0}")]
    Line(#[from] InvalidLineId),

    /// A line or transfer point violates a domain invariant
    #[error("network file: {0}")]
    Domain(#[from] DomainError),

    /// The document's cross-references are inconsistent
    #[error("network file: {0}")]
    Network(#[from] NetworkError),
}

/// Raw network document as it appears on disk.
#[derive(Debug, Deserialize)]
struct NetworkDoc {
    lines: Vec<LineDoc>,

    #[serde(default)]
    transfers: Vec<TransferDoc>,
}

#[derive(Debug, Deserialize)]
struct LineDoc {
    id: String,
    stations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TransferDoc {
    station: String,
    lines: Vec<String>,
}

/// Load and validate a network from a JSON file.
pub fn load_path(path: impl AsRef<Path>) -> Result<Network, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    parse_json(&contents)
}

/// Parse and validate a network from a JSON string.
pub fn parse_json(contents: &str) -> Result<Network, LoadError> {
    let doc: NetworkDoc = serde_json::from_str(contents)?;
    build(doc)
}

fn build(doc: NetworkDoc) -> Result<Network, LoadError> {
    let mut lines = Vec::with_capacity(doc.lines.len());
    for line in doc.lines {
        let id = LineId::parse(&line.id)?;
        let stations = line
            .stations
            .iter()
            .map(|s| StationName::parse(s))
            .collect::<Result<Vec<_>, _>>()?;
        lines.push(Line::new(id, stations)?);
    }

    let mut transfers = Vec::with_capacity(doc.transfers.len());
    for point in doc.transfers {
        let station = StationName::parse(&point.station)?;
        let ids = point
            .lines
            .iter()
            .map(|s| LineId::parse(s))
            .collect::<Result<Vec<_>, _>>()?;
        transfers.push(TransferPoint::new(station, ids)?);
    }

    Ok(Network::new(lines, transfers)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GOOD: &str = r#"{
        "lines": [
            { "id": "H72", "stations": ["Portal 80", "Calle 76", "Calle 72", "Marly"] },
            { "id": "G12", "stations": ["Marly", "Calle 45", "Calle 57", "Portal Sur"] }
        ],
        "transfers": [
            { "station": "Marly", "lines": ["H72", "G12"] }
        ]
    }"#;

    #[test]
    fn parse_valid_document() {
        let network = parse_json(GOOD).unwrap();
        assert_eq!(network.lines().len(), 2);
        assert_eq!(network.transfers().len(), 1);
        assert_eq!(network.transfers()[0].station().as_str(), "Marly");
    }

    #[test]
    fn transfers_field_is_optional() {
        let network = parse_json(r#"{ "lines": [{ "id": "A", "stations": ["X", "Y"] }] }"#)
            .unwrap();
        assert_eq!(network.lines().len(), 1);
        assert!(network.transfers().is_empty());
    }

    #[test]
    fn reject_malformed_json() {
        let result = parse_json("{ not json");
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn reject_missing_lines_field() {
        let result = parse_json(r#"{ "transfers": [] }"#);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }

    #[test]
    fn reject_empty_station_name() {
        let result = parse_json(r#"{ "lines": [{ "id": "A", "stations": ["X", ""] }] }"#);
        assert!(matches!(result, Err(LoadError::Station(_))));
    }

    #[test]
    fn reject_invalid_line_id() {
        let result = parse_json(r#"{ "lines": [{ "id": "A 1", "stations": ["X", "Y"] }] }"#);
        assert!(matches!(result, Err(LoadError::Line(_))));
    }

    #[test]
    fn reject_duplicate_station_on_line() {
        let result = parse_json(r#"{ "lines": [{ "id": "A", "stations": ["X", "Y", "X"] }] }"#);
        assert!(matches!(result, Err(LoadError::Domain(_))));
    }

    #[test]
    fn reject_transfer_referencing_unknown_line() {
        let result = parse_json(
            r#"{
                "lines": [
                    { "id": "A", "stations": ["X", "T"] },
                    { "id": "B", "stations": ["T", "Y"] }
                ],
                "transfers": [{ "station": "T", "lines": ["A", "C"] }]
            }"#,
        );
        assert!(matches!(result, Err(LoadError::Network(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GOOD.as_bytes()).unwrap();

        let network = load_path(file.path()).unwrap();
        assert_eq!(network.lines().len(), 2);
    }

    #[test]
    fn load_missing_file() {
        let result = load_path("/nonexistent/network.json");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
