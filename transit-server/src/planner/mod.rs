//! The route-inference engine.
//!
//! This module implements the core planning algorithm that answers:
//! "how do I get from this station to that one?" Candidates are
//! enumerated by two matching rules (direct and one-transfer), then the
//! selector picks the single best one by fewest transfers, fewest
//! stations.

mod generate;
mod plan;
mod select;

pub use generate::generate;
pub use plan::{PlanError, PlanResult, Planner};
pub use select::select_best;
