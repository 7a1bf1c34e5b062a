//! Guestbook handlers

use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::storage::StoreError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use folio_types::GuestbookEntry;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, info};

#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    // Missing and non-string fields both read as empty strings and fail
    // validation
    #[serde(default, deserialize_with = "string_or_empty")]
    name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    message: String,
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().unwrap_or_default().to_string())
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    entries: Vec<GuestbookEntry>,
}

#[derive(Debug, Serialize)]
pub struct PostMessageResponse {
    entry: GuestbookEntry,
    entries: Vec<GuestbookEntry>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<EntriesResponse>, ApiError> {
    let entries = state.store.list_entries().await.map_err(|e| {
        error!("Failed to list guestbook entries: {}", e);
        e
    })?;

    Ok(Json(EntriesResponse { entries }))
}

pub async fn create(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<PostMessageRequest>,
) -> Result<Json<PostMessageResponse>, ApiError> {
    let entry = state
        .store
        .append_entry(&req.name, &req.message)
        .await
        .map_err(|e| {
            if !matches!(e, StoreError::Validation(_)) {
                error!("Failed to append guestbook entry: {}", e);
            }
            e
        })?;

    info!("Guestbook entry {} added by {}", entry.id, entry.name);

    let entries = state.store.list_entries().await.map_err(|e| {
        error!("Failed to list guestbook entries: {}", e);
        e
    })?;

    Ok(Json(PostMessageResponse { entry, entries }))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EntriesResponse>, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::Validation("an entry id is required".to_string()));
    }

    let removed = state.store.remove_entry(&id).await.map_err(|e| {
        error!("Failed to delete guestbook entry {}: {}", id, e);
        e
    })?;

    if !removed {
        return Err(ApiError::NotFound(format!(
            "no guestbook entry with id {}",
            id
        )));
    }

    info!("Guestbook entry {} removed", id);

    let entries = state.store.list_entries().await.map_err(|e| {
        error!("Failed to list guestbook entries: {}", e);
        e
    })?;

    Ok(Json(EntriesResponse { entries }))
}
