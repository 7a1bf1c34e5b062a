//! Health check handler

use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    ok: bool,
    backend: String,
}

/// Reports which store backend was selected at startup, so a deployment can
/// confirm its environment wiring without poking the data endpoints.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        backend: state.store.backend().to_string(),
    })
}
