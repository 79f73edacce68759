//! Built-in sample network.
//!
//! Two lines of the Bogotá-style reference network, meeting at Marly.
//! Used when no network file is configured, and by tests.

use crate::domain::{Line, LineId, StationName, TransferPoint};

use super::Network;

fn station(s: &str) -> StationName {
    StationName::parse(s).expect("sample station name is valid")
}

fn line_id(s: &str) -> LineId {
    LineId::parse(s).expect("sample line id is valid")
}

/// Build the sample network: H72 and G12, with a transfer at Marly.
pub fn sample_network() -> Network {
    let h72 = Line::new(
        line_id("H72"),
        vec![
            station("Portal 80"),
            station("Calle 76"),
            station("Calle 72"),
            station("Marly"),
        ],
    )
    .expect("sample line H72 is valid");

    let g12 = Line::new(
        line_id("G12"),
        vec![
            station("Marly"),
            station("Calle 45"),
            station("Calle 57"),
            station("Portal Sur"),
        ],
    )
    .expect("sample line G12 is valid");

    let marly = TransferPoint::new(station("Marly"), vec![line_id("H72"), line_id("G12")])
        .expect("sample transfer point is valid");

    Network::new(vec![h72, g12], vec![marly]).expect("sample network is consistent")
}
