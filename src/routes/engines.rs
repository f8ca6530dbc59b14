//! Engine routes. Each verb reaches its matching service operation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use tracing::info;
use uuid::Uuid;

use super::ApiError;
use crate::models::{Engine, EngineRequest};
use crate::state::AppState;

/// `GET /engine/:id` — fetch one engine.
pub async fn get_engine(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Engine>, ApiError> {
    let engine = state.engines.get_by_id(id).await?;
    Ok(Json(engine))
}

/// `POST /engine` — create an engine.
pub async fn create_engine(
    State(state): State<AppState>,
    Json(req): Json<EngineRequest>,
) -> Result<(StatusCode, Json<Engine>), ApiError> {
    let engine = state.engines.create(&req).await?;
    info!(engine_id = %engine.engine_id, "engine created");
    Ok((StatusCode::CREATED, Json(engine)))
}

/// `PUT /engine/:id` — replace an engine in full.
pub async fn update_engine(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<EngineRequest>,
) -> Result<Json<Engine>, ApiError> {
    let engine = state.engines.update(id, &req).await?;
    info!(engine_id = %engine.engine_id, "engine updated");
    Ok(Json(engine))
}

/// `DELETE /engine/:id` — delete an engine, returning its last state.
pub async fn delete_engine(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Engine>, ApiError> {
    let engine = state.engines.delete(id).await?;
    info!(engine_id = %engine.engine_id, "engine deleted");
    Ok(Json(engine))
}

#[cfg(test)]
#[path = "engines_test.rs"]
mod tests;
