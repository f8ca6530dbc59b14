//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Services own validation and the car/engine relational rules, then
//! delegate to a store. Route handlers depend on the `EngineApi` and
//! `CarApi` traits so they stay focused on protocol translation.
//!
//! ERROR HANDLING
//! ==============
//! Services never log, retry, or swallow failures. Every validation or
//! store failure is returned to the caller as a `ServiceError`, whose kind
//! tells the boundary which response to choose.

pub mod car;
pub mod engine;

use uuid::Uuid;

use crate::error::ErrorCode;
use crate::models::{Car, CarRequest, Engine, EngineRequest};
use crate::store::StoreError;
use crate::validation::ValidationError;

pub use car::CarService;
pub use engine::EngineService;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("store failed: {0}")]
    Store(#[source] sqlx::Error),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => Self::NotFound { entity, id },
            StoreError::Database(e) => Self::Store(e),
        }
    }
}

impl ErrorCode for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "E_VALIDATION",
            Self::NotFound { .. } => "E_NOT_FOUND",
            Self::Store(_) => "E_STORE",
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// CONTRACTS
// =============================================================================

/// Engine operations exposed to the HTTP boundary.
#[async_trait::async_trait]
pub trait EngineApi: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Engine>;
    async fn create(&self, req: &EngineRequest) -> ServiceResult<Engine>;
    async fn update(&self, id: Uuid, req: &EngineRequest) -> ServiceResult<Engine>;
    async fn delete(&self, id: Uuid) -> ServiceResult<Engine>;
}

/// Car operations exposed to the HTTP boundary.
#[async_trait::async_trait]
pub trait CarApi: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Car>;
    async fn get_by_brand(&self, brand: &str, include_engine: bool) -> ServiceResult<Vec<Car>>;
    async fn create(&self, req: &CarRequest) -> ServiceResult<Car>;
    async fn update(&self, id: Uuid, req: &CarRequest) -> ServiceResult<Car>;
    async fn delete(&self, id: Uuid) -> ServiceResult<Car>;
}
