use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Clone, Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    refresh_in_flight: bool,
}

/// Liveness for load balancer probes. Does not touch the upstream API.
pub(super) async fn get(State(state): SharedState) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        refresh_in_flight: state.refresh_in_flight(),
    })
}
