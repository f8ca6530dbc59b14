//! Car routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use super::ApiError;
use crate::models::{Car, CarRequest};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct BrandQuery {
    #[serde(default)]
    pub brand: String,
    /// Engine detail is joined only when this is exactly `"true"`.
    #[serde(rename = "isEngine")]
    pub is_engine: Option<String>,
}

impl BrandQuery {
    fn include_engine(&self) -> bool {
        self.is_engine.as_deref() == Some("true")
    }
}

/// `GET /cars/:id` — fetch one car with its engine.
pub async fn get_car(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Car>, ApiError> {
    let car = state.cars.get_by_id(id).await?;
    Ok(Json(car))
}

/// `GET /cars?brand=..&isEngine=..` — list cars of one brand.
pub async fn list_cars_by_brand(
    State(state): State<AppState>,
    Query(query): Query<BrandQuery>,
) -> Result<Json<Vec<Car>>, ApiError> {
    let cars = state
        .cars
        .get_by_brand(&query.brand, query.include_engine())
        .await?;
    Ok(Json(cars))
}

/// `POST /cars` — create a car referencing an existing engine.
pub async fn create_car(
    State(state): State<AppState>,
    Json(req): Json<CarRequest>,
) -> Result<(StatusCode, Json<Car>), ApiError> {
    let car = state.cars.create(&req).await?;
    info!(car_id = %car.id, engine_id = %car.engine.engine_id, "car created");
    Ok((StatusCode::CREATED, Json(car)))
}

/// `PUT /cars/:id` — replace a car in full.
pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CarRequest>,
) -> Result<Json<Car>, ApiError> {
    let car = state.cars.update(id, &req).await?;
    info!(car_id = %car.id, "car updated");
    Ok(Json(car))
}

/// `DELETE /cars/:id` — delete a car, returning its last state.
pub async fn delete_car(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Car>, ApiError> {
    let car = state.cars.delete(id).await?;
    info!(car_id = %car.id, "car deleted");
    Ok(Json(car))
}

#[cfg(test)]
#[path = "cars_test.rs"]
mod tests;
