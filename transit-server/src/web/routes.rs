//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::info;

use crate::planner::Planner;

use super::dto::{ErrorResponse, NetworkResponse, PlanRequest, PlanResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/network", get(network_summary))
        .route("/plan", post(plan_route))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Summary of the loaded network.
async fn network_summary(State(state): State<AppState>) -> Json<NetworkResponse> {
    Json(NetworkResponse::from_network(&state.network))
}

/// Plan a route between two stations.
///
/// Returns `200` with the best route (or an explicit null route when none
/// exists) and `422` with an error body for invalid queries.
async fn plan_route(State(state): State<AppState>, Json(request): Json<PlanRequest>) -> Response {
    let planner = Planner::new(&state.network);

    match planner.plan(&request.origin, &request.destination) {
        Ok(result) => {
            info!(
                origin = %request.origin,
                destination = %request.destination,
                found = result.route.is_some(),
                "plan request served"
            );
            (StatusCode::OK, Json(PlanResponse::from_result(&result))).into_response()
        }
        Err(err) => {
            info!(
                origin = %request.origin,
                destination = %request.destination,
                error = %err,
                "plan request rejected"
            );
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
                .into_response()
        }
    }
}
