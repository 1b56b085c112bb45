//! Item Handlers
//!
//! Thin pass-through from HTTP to [`ListRepository`].

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::{ApiError, ApiJson, AppState};
use crate::domain::{Item, ItemPatch, ListKind, NewItem};

/// Confirmation body for deletes
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Message {
    pub message: String,
}

fn parse_kind(kind: &str) -> Result<ListKind, ApiError> {
    ListKind::from_path(kind).ok_or_else(|| ApiError::UnknownList(kind.to_string()))
}

/// List all items of a kind
pub async fn list_items(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let kind = parse_kind(&kind)?;
    Ok(Json(state.repo.list(kind).await?))
}

/// Create a new item
pub async fn create_item(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    ApiJson(body): ApiJson<NewItem>,
) -> Result<Json<Item>, ApiError> {
    let kind = parse_kind(&kind)?;
    let item = state.repo.create(kind, &body).await?;
    tracing::debug!("created {} {}", kind.as_str(), item.id);
    Ok(Json(item))
}

/// Apply a partial update
pub async fn update_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
    ApiJson(patch): ApiJson<ItemPatch>,
) -> Result<Json<Item>, ApiError> {
    let kind = parse_kind(&kind)?;
    state
        .repo
        .patch(kind, &id, &patch)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(kind))
}

/// Delete an item
pub async fn delete_item(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Json<Message>, ApiError> {
    let kind = parse_kind(&kind)?;
    if !state.repo.delete(kind, &id).await? {
        return Err(ApiError::NotFound(kind));
    }
    tracing::debug!("deleted {} {}", kind.as_str(), id);
    Ok(Json(Message {
        message: format!("{} deleted", kind.display_name()),
    }))
}
