//! Web layer: HTTP presentation surface over the planner.

mod dto;
mod routes;
mod state;

pub use dto::{
    ErrorResponse, LineResult, NetworkResponse, PlanRequest, PlanResponse, RouteResult,
    TransferResult,
};
pub use routes::create_router;
pub use state::AppState;
