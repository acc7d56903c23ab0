//! Route handlers for the checkpoint API
//!
//! Wire shapes are a compatibility contract: timestamps travel as integer
//! epoch milliseconds under the field name `ts`, create echoes only the new
//! id, and failures are `{"message": ...}` payloads.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use store::{Checkpoint, CheckpointMeta};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateCheckpointBody {
    message: Option<String>,
    data: Option<Value>,
}

#[derive(Deserialize)]
pub struct PublishBody {
    data: Option<Value>,
}

/// GET /checkpoints — history metadata, newest first
pub async fn list_checkpoints(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CheckpointMeta>>, ApiError> {
    Ok(Json(state.store.list()?))
}

/// GET /checkpoints/:id — one checkpoint with its stored document
pub async fn get_checkpoint(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Checkpoint>, ApiError> {
    Ok(Json(state.store.get(&id)?))
}

/// POST /checkpoints — snapshot the supplied document, 201 with `{id}`
pub async fn create_checkpoint(
    State(state): State<Arc<AppState>>,
    body: Option<Json<CreateCheckpointBody>>,
) -> Result<impl IntoResponse, ApiError> {
    // A missing or non-JSON body is the same failure as a missing payload
    let Json(body) = body.ok_or(ApiError::MissingData)?;
    let data = body.data.ok_or(ApiError::MissingData)?;

    let id = state.store.create(body.message, data)?;
    Ok((StatusCode::CREATED, Json(json!({ "id": id.to_string() }))))
}

/// DELETE /checkpoints — purge the whole history, 204
pub async fn clear_checkpoints(
    State(state): State<Arc<AppState>>,
) -> Result<StatusCode, ApiError> {
    state.store.clear()?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /restore/:id — overwrite the live document from a checkpoint
pub async fn restore_checkpoint(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let path = state.store.restore(&id)?;
    Ok(Json(json!({ "ok": true, "path": path.display().to_string() })))
}

/// PUT /publish — overwrite the live document with the supplied content
pub async fn publish_live(
    State(state): State<Arc<AppState>>,
    body: Option<Json<PublishBody>>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body.ok_or(ApiError::MissingData)?;
    let data = body.data.ok_or(ApiError::MissingData)?;

    let path = state.store.publish(data)?;
    Ok(Json(json!({ "ok": true, "path": path.display().to_string() })))
}

/// GET /live — current live document, `{}` when unreadable
pub async fn get_live(State(state): State<Arc<AppState>>) -> Json<Value> {
    let (_path, data) = state.store.live();
    Json(json!({ "data": data }))
}
