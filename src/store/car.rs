//! Postgres car store.
//!
//! DESIGN
//! ======
//! Writes are single statements: the mutating CTE (`INSERT`/`UPDATE`/
//! `DELETE ... RETURNING *`) is joined against `engines` in the same query,
//! so the returned car always carries the engine snapshot as stored and no
//! explicit transaction is needed.

use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{CarStore, StoreError, StoreResult};
use crate::models::{Car, CarRequest, Engine};

/// Car columns followed by the joined engine columns.
type CarRow = (
    Uuid,
    String,
    String,
    String,
    String,
    f64,
    OffsetDateTime,
    OffsetDateTime,
    Uuid,
    i64,
    i64,
    i64,
);

/// Car columns with only the engine reference.
type CarRefRow = (Uuid, String, String, String, String, f64, OffsetDateTime, OffsetDateTime, Uuid);

fn car_from_row(row: CarRow) -> Car {
    let (id, name, year, brand, fuel_type, price, created_at, updated_at, engine_id, displacement, cylinder_count, range) =
        row;
    Car {
        id,
        name,
        year,
        brand,
        fuel_type,
        engine: Engine { engine_id, displacement, cylinder_count, range },
        price,
        created_at,
        updated_at,
    }
}

fn car_from_ref_row(row: CarRefRow) -> Car {
    let (id, name, year, brand, fuel_type, price, created_at, updated_at, engine_id) = row;
    Car {
        id,
        name,
        year,
        brand,
        fuel_type,
        engine: Engine::reference(engine_id),
        price,
        created_at,
        updated_at,
    }
}

#[derive(Clone)]
pub struct PgCarStore {
    pool: PgPool,
}

impl PgCarStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CarStore for PgCarStore {
    async fn car_by_id(&self, id: Uuid) -> StoreResult<Car> {
        let row = sqlx::query_as::<_, CarRow>(
            "SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.price, c.created_at, c.updated_at, \
                    e.engine_id, e.displacement, e.cylinder_count, e.car_range \
             FROM cars c JOIN engines e ON e.engine_id = c.engine_id \
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(car_from_row)
            .ok_or_else(|| StoreError::car_not_found(id))
    }

    async fn cars_by_brand(&self, brand: &str, include_engine: bool) -> StoreResult<Vec<Car>> {
        if include_engine {
            let rows = sqlx::query_as::<_, CarRow>(
                "SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.price, c.created_at, c.updated_at, \
                        e.engine_id, e.displacement, e.cylinder_count, e.car_range \
                 FROM cars c JOIN engines e ON e.engine_id = c.engine_id \
                 WHERE c.brand = $1 \
                 ORDER BY c.created_at ASC, c.id ASC",
            )
            .bind(brand)
            .fetch_all(&self.pool)
            .await?;
            return Ok(rows.into_iter().map(car_from_row).collect());
        }

        let rows = sqlx::query_as::<_, CarRefRow>(
            "SELECT id, name, year, brand, fuel_type, price, created_at, updated_at, engine_id \
             FROM cars \
             WHERE brand = $1 \
             ORDER BY created_at ASC, id ASC",
        )
        .bind(brand)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(car_from_ref_row).collect())
    }

    async fn car_create(&self, req: &CarRequest) -> StoreResult<Car> {
        let row = sqlx::query_as::<_, CarRow>(
            "WITH c AS ( \
                 INSERT INTO cars (id, name, year, brand, fuel_type, engine_id, price, created_at, updated_at) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, now(), now()) \
                 RETURNING * \
             ) \
             SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.price, c.created_at, c.updated_at, \
                    e.engine_id, e.displacement, e.cylinder_count, e.car_range \
             FROM c JOIN engines e ON e.engine_id = c.engine_id",
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.year)
        .bind(&req.brand)
        .bind(&req.fuel_type)
        .bind(req.engine.engine_id)
        .bind(req.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(car_from_row(row))
    }

    async fn car_update(&self, id: Uuid, req: &CarRequest) -> StoreResult<Car> {
        let row = sqlx::query_as::<_, CarRow>(
            "WITH c AS ( \
                 UPDATE cars SET name = $2, year = $3, brand = $4, fuel_type = $5, engine_id = $6, \
                                 price = $7, updated_at = now() \
                 WHERE id = $1 \
                 RETURNING * \
             ) \
             SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.price, c.created_at, c.updated_at, \
                    e.engine_id, e.displacement, e.cylinder_count, e.car_range \
             FROM c JOIN engines e ON e.engine_id = c.engine_id",
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.year)
        .bind(&req.brand)
        .bind(&req.fuel_type)
        .bind(req.engine.engine_id)
        .bind(req.price)
        .fetch_optional(&self.pool)
        .await?;

        row.map(car_from_row)
            .ok_or_else(|| StoreError::car_not_found(id))
    }

    async fn car_delete(&self, id: Uuid) -> StoreResult<Car> {
        let row = sqlx::query_as::<_, CarRow>(
            "WITH c AS (DELETE FROM cars WHERE id = $1 RETURNING *) \
             SELECT c.id, c.name, c.year, c.brand, c.fuel_type, c.price, c.created_at, c.updated_at, \
                    e.engine_id, e.displacement, e.cylinder_count, e.car_range \
             FROM c JOIN engines e ON e.engine_id = c.engine_id",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(car_from_row)
            .ok_or_else(|| StoreError::car_not_found(id))
    }
}

#[cfg(all(test, feature = "live-db-tests"))]
#[path = "car_test.rs"]
mod tests;
