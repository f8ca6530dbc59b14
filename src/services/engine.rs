//! Engine service — validated CRUD over an `EngineStore`.

use uuid::Uuid;

use super::{EngineApi, ServiceResult};
use crate::models::{Engine, EngineRequest};
use crate::store::EngineStore;
use crate::validation::validate_engine;

#[derive(Clone)]
pub struct EngineService<S> {
    store: S,
}

impl<S: EngineStore> EngineService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl<S: EngineStore> EngineApi for EngineService<S> {
    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Engine> {
        Ok(self.store.engine_by_id(id).await?)
    }

    async fn create(&self, req: &EngineRequest) -> ServiceResult<Engine> {
        validate_engine(req)?;
        Ok(self.store.engine_create(req).await?)
    }

    async fn update(&self, id: Uuid, req: &EngineRequest) -> ServiceResult<Engine> {
        validate_engine(req)?;
        Ok(self.store.engine_update(id, req).await?)
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<Engine> {
        Ok(self.store.engine_delete(id).await?)
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
