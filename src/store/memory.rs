//! In-memory store doubles for service and route tests.
//!
//! Behaves like the Postgres stores: fresh v4 identifiers, store-assigned
//! timestamps, joined engine snapshots, and a foreign-key style refusal to
//! delete an engine that a car still references. `fail_with_database_error`
//! makes every subsequent call fail as an opaque database error.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use time::OffsetDateTime;
use uuid::Uuid;

use super::{CarStore, EngineStore, StoreError, StoreResult};
use crate::models::{Car, CarRequest, Engine, EngineRequest};

#[derive(Debug, Clone)]
struct CarRecord {
    id: Uuid,
    name: String,
    year: String,
    brand: String,
    fuel_type: String,
    engine_id: Uuid,
    price: f64,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

impl CarRecord {
    fn to_car(&self, engine: Engine) -> Car {
        Car {
            id: self.id,
            name: self.name.clone(),
            year: self.year.clone(),
            brand: self.brand.clone(),
            fuel_type: self.fuel_type.clone(),
            engine,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Default)]
struct Tables {
    engines: HashMap<Uuid, Engine>,
    cars: HashMap<Uuid, CarRecord>,
}

/// Shared in-memory tables. Clones see the same rows.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_with_database_error(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn engine_count(&self) -> usize {
        self.tables.lock().unwrap().engines.len()
    }

    pub fn car_count(&self) -> usize {
        self.tables.lock().unwrap().cars.len()
    }

    fn check_failing(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

fn joined(tables: &Tables, record: &CarRecord) -> StoreResult<Car> {
    let engine = tables
        .engines
        .get(&record.engine_id)
        .copied()
        .ok_or_else(|| StoreError::Database(sqlx::Error::Protocol("car references missing engine".into())))?;
    Ok(record.to_car(engine))
}

fn ensure_engine(tables: &Tables, engine_id: Uuid) -> StoreResult<()> {
    if tables.engines.contains_key(&engine_id) {
        return Ok(());
    }
    Err(StoreError::Database(sqlx::Error::Protocol(format!(
        "insert or update on table \"cars\" violates foreign key constraint: engine {engine_id}"
    ))))
}

#[async_trait::async_trait]
impl EngineStore for MemoryStore {
    async fn engine_by_id(&self, id: Uuid) -> StoreResult<Engine> {
        self.check_failing()?;
        let tables = self.tables.lock().unwrap();
        tables
            .engines
            .get(&id)
            .copied()
            .ok_or_else(|| StoreError::engine_not_found(id))
    }

    async fn engine_create(&self, req: &EngineRequest) -> StoreResult<Engine> {
        self.check_failing()?;
        let engine = req.into_engine(Uuid::new_v4());
        self.tables
            .lock()
            .unwrap()
            .engines
            .insert(engine.engine_id, engine);
        Ok(engine)
    }

    async fn engine_update(&self, id: Uuid, req: &EngineRequest) -> StoreResult<Engine> {
        self.check_failing()?;
        let mut tables = self.tables.lock().unwrap();
        let slot = tables
            .engines
            .get_mut(&id)
            .ok_or_else(|| StoreError::engine_not_found(id))?;
        *slot = req.into_engine(id);
        Ok(*slot)
    }

    async fn engine_delete(&self, id: Uuid) -> StoreResult<Engine> {
        self.check_failing()?;
        let mut tables = self.tables.lock().unwrap();
        if !tables.engines.contains_key(&id) {
            return Err(StoreError::engine_not_found(id));
        }
        if tables.cars.values().any(|car| car.engine_id == id) {
            return Err(StoreError::Database(sqlx::Error::Protocol(format!(
                "engine {id} is still referenced by a car"
            ))));
        }
        tables
            .engines
            .remove(&id)
            .ok_or_else(|| StoreError::engine_not_found(id))
    }
}

#[async_trait::async_trait]
impl CarStore for MemoryStore {
    async fn car_by_id(&self, id: Uuid) -> StoreResult<Car> {
        self.check_failing()?;
        let tables = self.tables.lock().unwrap();
        let record = tables.cars.get(&id).ok_or_else(|| StoreError::car_not_found(id))?;
        joined(&tables, record)
    }

    async fn cars_by_brand(&self, brand: &str, include_engine: bool) -> StoreResult<Vec<Car>> {
        self.check_failing()?;
        let tables = self.tables.lock().unwrap();
        let mut records: Vec<&CarRecord> = tables.cars.values().filter(|car| car.brand == brand).collect();
        records.sort_by_key(|car| (car.created_at, car.id));
        records
            .into_iter()
            .map(|record| {
                if include_engine {
                    joined(&tables, record)
                } else {
                    Ok(record.to_car(Engine::reference(record.engine_id)))
                }
            })
            .collect()
    }

    async fn car_create(&self, req: &CarRequest) -> StoreResult<Car> {
        self.check_failing()?;
        let mut tables = self.tables.lock().unwrap();
        ensure_engine(&tables, req.engine.engine_id)?;
        let now = OffsetDateTime::now_utc();
        let record = CarRecord {
            id: Uuid::new_v4(),
            name: req.name.clone(),
            year: req.year.clone(),
            brand: req.brand.clone(),
            fuel_type: req.fuel_type.clone(),
            engine_id: req.engine.engine_id,
            price: req.price,
            created_at: now,
            updated_at: now,
        };
        let car = joined(&tables, &record)?;
        tables.cars.insert(record.id, record);
        Ok(car)
    }

    async fn car_update(&self, id: Uuid, req: &CarRequest) -> StoreResult<Car> {
        self.check_failing()?;
        let mut tables = self.tables.lock().unwrap();
        let created_at = tables
            .cars
            .get(&id)
            .map(|car| car.created_at)
            .ok_or_else(|| StoreError::car_not_found(id))?;
        ensure_engine(&tables, req.engine.engine_id)?;
        let record = CarRecord {
            id,
            name: req.name.clone(),
            year: req.year.clone(),
            brand: req.brand.clone(),
            fuel_type: req.fuel_type.clone(),
            engine_id: req.engine.engine_id,
            price: req.price,
            created_at,
            updated_at: OffsetDateTime::now_utc().max(created_at),
        };
        let car = joined(&tables, &record)?;
        tables.cars.insert(id, record);
        Ok(car)
    }

    async fn car_delete(&self, id: Uuid) -> StoreResult<Car> {
        self.check_failing()?;
        let mut tables = self.tables.lock().unwrap();
        let record = tables.cars.remove(&id).ok_or_else(|| StoreError::car_not_found(id))?;
        joined(&tables, &record)
    }
}
