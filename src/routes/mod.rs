//! Router assembly and failure mapping.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the car and engine endpoints under a single Axum
//! router. Handlers decode the request, call a service through `AppState`,
//! and encode either the entity or an `ErrorBody`. Failure logging happens
//! here, never inside the services.

pub mod cars;
pub mod engines;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::{ErrorBody, ErrorCode};
use crate::services::ServiceError;
use crate::state::AppState;

/// Build the HTTP router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cars", get(cars::list_cars_by_brand).post(cars::create_car))
        .route(
            "/cars/{id}",
            get(cars::get_car)
                .put(cars::update_car)
                .delete(cars::delete_car),
        )
        .route("/engine", post(engines::create_engine))
        .route(
            "/engine/{id}",
            get(engines::get_engine)
                .put(engines::update_engine)
                .delete(engines::delete_engine),
        )
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

// =============================================================================
// ERRORS
// =============================================================================

pub(crate) fn service_error_to_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handler error: a service failure rendered as status + `ErrorBody`.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = service_error_to_status(&self.0);
        match &self.0 {
            ServiceError::Validation(err) => {
                tracing::warn!(reason = err.reason(), code = self.0.error_code(), "request rejected");
            }
            err if status.is_server_error() => {
                tracing::error!(error = %err, code = err.error_code(), "request failed");
            }
            err => tracing::warn!(error = %err, code = err.error_code(), "request rejected"),
        }
        (status, Json(ErrorBody::from_error(&self.0))).into_response()
    }
}

// =============================================================================
// TEST SUPPORT
// =============================================================================


#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
