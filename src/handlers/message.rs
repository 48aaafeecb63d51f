//! Message CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::MessageInput;
use crate::response::{deleted, success_ok};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

fn invalid_id() -> AppError {
    AppError::BadRequest("invalid id".into())
}

/// The whole path segment must be an integer; `12abc` is rejected.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| invalid_id())
}

/// `/messages/` with nothing after the slash: an empty id never parses.
pub async fn missing_id() -> AppError {
    invalid_id()
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list().await?;
    Ok(success_ok(rows))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<MessageInput>,
) -> Result<impl IntoResponse, AppError> {
    let msg = state.store.create(&body.text).await?;
    tracing::info!(id = msg.id, "message created");
    Ok(success_ok(msg))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let msg = state.store.get(id).await?;
    Ok(success_ok(msg))
}

/// PUT replaces the text of an existing message; an unknown id is a 404.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<MessageInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let msg = state.store.update(id, &body.text).await?;
    tracing::info!(id, "message updated");
    Ok(success_ok(msg))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.store.delete(id).await?;
    tracing::info!(id, "message deleted");
    Ok(deleted(id))
}
