//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the two services behind their traits; the services in turn own
//! their store handles, so there is no process-wide database singleton.

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::{CarApi, CarService, EngineApi, EngineService};
use crate::store::{PgCarStore, PgEngineStore};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; both fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<dyn CarApi>,
    pub engines: Arc<dyn EngineApi>,
}

impl AppState {
    #[must_use]
    pub fn new(cars: Arc<dyn CarApi>, engines: Arc<dyn EngineApi>) -> Self {
        Self { cars, engines }
    }

    /// Wire Postgres-backed stores into both services.
    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        let engine_store = PgEngineStore::new(pool.clone());
        let car_store = PgCarStore::new(pool);
        Self::new(
            Arc::new(CarService::new(car_store, engine_store.clone())),
            Arc::new(EngineService::new(engine_store)),
        )
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
