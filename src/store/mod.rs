//! Persistence contracts and their Postgres implementations.
//!
//! ARCHITECTURE
//! ============
//! Services depend only on the `EngineStore` and `CarStore` traits. The
//! `Pg*Store` types implement them over a shared `PgPool`; tests swap in
//! the in-memory doubles from `memory`.

pub mod car;
pub mod engine;
#[cfg(test)]
pub mod memory;

use uuid::Uuid;

use crate::models::{Car, CarRequest, Engine, EngineRequest};

pub use car::PgCarStore;
pub use engine::PgEngineStore;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    #[must_use]
    pub fn engine_not_found(id: Uuid) -> Self {
        Self::NotFound { entity: "engine", id }
    }

    #[must_use]
    pub fn car_not_found(id: Uuid) -> Self {
        Self::NotFound { entity: "car", id }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// CONTRACTS
// =============================================================================

/// Durable CRUD for engine rows.
#[async_trait::async_trait]
pub trait EngineStore: Send + Sync {
    /// Fetch one engine. `NotFound` when no row has this identifier.
    async fn engine_by_id(&self, id: Uuid) -> StoreResult<Engine>;

    /// Insert a new engine under a freshly generated identifier.
    async fn engine_create(&self, req: &EngineRequest) -> StoreResult<Engine>;

    /// Replace every mutable field of an existing engine.
    async fn engine_update(&self, id: Uuid, req: &EngineRequest) -> StoreResult<Engine>;

    /// Remove an engine and return the row as it was before deletion.
    async fn engine_delete(&self, id: Uuid) -> StoreResult<Engine>;
}

/// Durable CRUD for car rows. Each row references one engine row.
#[async_trait::async_trait]
pub trait CarStore: Send + Sync {
    /// Fetch one car with its engine detail joined.
    async fn car_by_id(&self, id: Uuid) -> StoreResult<Car>;

    /// All cars whose brand matches exactly. With `include_engine` false the
    /// embedded engine carries only its identifier.
    async fn cars_by_brand(&self, brand: &str, include_engine: bool) -> StoreResult<Vec<Car>>;

    /// Insert a car; timestamps are assigned by the store.
    async fn car_create(&self, req: &CarRequest) -> StoreResult<Car>;

    /// Full replace. Only `id` and `created_at` survive from the prior row.
    async fn car_update(&self, id: Uuid, req: &CarRequest) -> StoreResult<Car>;

    /// Remove a car and return the row as it was before deletion.
    async fn car_delete(&self, id: Uuid) -> StoreResult<Car>;
}
