//! Car service — validated CRUD over a `CarStore`.
//!
//! DESIGN
//! ======
//! A car owns exactly one engine snapshot. Writes first run the ordered
//! field rules, then confirm the referenced engine row exists through the
//! `EngineStore`, so a dangling reference is reported as a validation
//! failure rather than a foreign-key error from the database.

use uuid::Uuid;

use super::{CarApi, ServiceError, ServiceResult};
use crate::models::{Car, CarRequest};
use crate::store::{CarStore, EngineStore, StoreError};
use crate::validation::{ValidationError, validate_car};

#[derive(Clone)]
pub struct CarService<C, E> {
    cars: C,
    engines: E,
}

impl<C: CarStore, E: EngineStore> CarService<C, E> {
    #[must_use]
    pub fn new(cars: C, engines: E) -> Self {
        Self { cars, engines }
    }

    async fn validate(&self, req: &CarRequest) -> ServiceResult<()> {
        validate_car(req)?;
        let engine_id = req.engine.engine_id;
        match self.engines.engine_by_id(engine_id).await {
            Ok(_) => Ok(()),
            Err(StoreError::NotFound { .. }) => {
                Err(ValidationError::new(format!("engine {engine_id} does not exist")).into())
            }
            Err(e) => Err(ServiceError::from(e)),
        }
    }
}

#[async_trait::async_trait]
impl<C: CarStore, E: EngineStore> CarApi for CarService<C, E> {
    async fn get_by_id(&self, id: Uuid) -> ServiceResult<Car> {
        Ok(self.cars.car_by_id(id).await?)
    }

    async fn get_by_brand(&self, brand: &str, include_engine: bool) -> ServiceResult<Vec<Car>> {
        Ok(self.cars.cars_by_brand(brand, include_engine).await?)
    }

    async fn create(&self, req: &CarRequest) -> ServiceResult<Car> {
        self.validate(req).await?;
        Ok(self.cars.car_create(req).await?)
    }

    async fn update(&self, id: Uuid, req: &CarRequest) -> ServiceResult<Car> {
        self.validate(req).await?;
        Ok(self.cars.car_update(id, req).await?)
    }

    async fn delete(&self, id: Uuid) -> ServiceResult<Car> {
        Ok(self.cars.car_delete(id).await?)
    }
}

#[cfg(test)]
#[path = "car_test.rs"]
mod tests;
