//! Domain types for the transit route planner.
//!
//! This module contains the core domain model types that represent
//! validated network data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod error;
mod line;
mod route;
mod station;
mod transfer;

pub use error::DomainError;
pub use line::{InvalidLineId, Line, LineId};
pub use route::{Route, RouteKind};
pub use station::{InvalidStationName, StationName};
pub use transfer::TransferPoint;
