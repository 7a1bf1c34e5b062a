//! Like counter handlers

use crate::error::ApiError;
use crate::extractors::VisitorId;
use crate::storage::StoreError;
use crate::AppState;
use axum::{extract::State, Json};
use folio_types::LikeState;
use tracing::{debug, error, warn};

/// GET /like never fails: when the store cannot answer, the response
/// degrades to the zero state rather than an error.
pub async fn get(State(state): State<AppState>, VisitorId(visitor_id): VisitorId) -> Json<LikeState> {
    match state.store.like_state(&visitor_id).await {
        Ok(like_state) => Json(like_state),
        Err(e) => {
            warn!("Falling back to default like state: {}", e);
            Json(LikeState::unavailable())
        }
    }
}

pub async fn toggle(
    State(state): State<AppState>,
    VisitorId(visitor_id): VisitorId,
) -> Result<Json<LikeState>, ApiError> {
    let like_state = state.store.toggle_like(&visitor_id).await.map_err(|e| {
        if !matches!(e, StoreError::Validation(_)) {
            error!("Failed to toggle like: {}", e);
        }
        e
    })?;

    debug!(
        "Like toggled: visitor={}, liked={}, count={}",
        visitor_id, like_state.liked, like_state.count
    );

    Ok(Json(like_state))
}
