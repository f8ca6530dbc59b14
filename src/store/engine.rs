//! Postgres engine store.

use sqlx::PgPool;
use uuid::Uuid;

use super::{EngineStore, StoreError, StoreResult};
use crate::models::{Engine, EngineRequest};

/// `(engine_id, displacement, cylinder_count, car_range)`
type EngineRow = (Uuid, i64, i64, i64);

fn engine_from_row((engine_id, displacement, cylinder_count, range): EngineRow) -> Engine {
    Engine { engine_id, displacement, cylinder_count, range }
}

#[derive(Clone)]
pub struct PgEngineStore {
    pool: PgPool,
}

impl PgEngineStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl EngineStore for PgEngineStore {
    async fn engine_by_id(&self, id: Uuid) -> StoreResult<Engine> {
        let row = sqlx::query_as::<_, EngineRow>(
            "SELECT engine_id, displacement, cylinder_count, car_range FROM engines WHERE engine_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(engine_from_row)
            .ok_or_else(|| StoreError::engine_not_found(id))
    }

    async fn engine_create(&self, req: &EngineRequest) -> StoreResult<Engine> {
        let engine = req.into_engine(Uuid::new_v4());
        sqlx::query(
            "INSERT INTO engines (engine_id, displacement, cylinder_count, car_range) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(engine.engine_id)
        .bind(engine.displacement)
        .bind(engine.cylinder_count)
        .bind(engine.range)
        .execute(&self.pool)
        .await?;

        Ok(engine)
    }

    async fn engine_update(&self, id: Uuid, req: &EngineRequest) -> StoreResult<Engine> {
        let row = sqlx::query_as::<_, EngineRow>(
            "UPDATE engines SET displacement = $2, cylinder_count = $3, car_range = $4 \
             WHERE engine_id = $1 \
             RETURNING engine_id, displacement, cylinder_count, car_range",
        )
        .bind(id)
        .bind(req.displacement)
        .bind(req.cylinder_count)
        .bind(req.range)
        .fetch_optional(&self.pool)
        .await?;

        row.map(engine_from_row)
            .ok_or_else(|| StoreError::engine_not_found(id))
    }

    async fn engine_delete(&self, id: Uuid) -> StoreResult<Engine> {
        // RETURNING yields the row as it was, so no separate snapshot read.
        let row = sqlx::query_as::<_, EngineRow>(
            "DELETE FROM engines WHERE engine_id = $1 \
             RETURNING engine_id, displacement, cylinder_count, car_range",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(engine_from_row)
            .ok_or_else(|| StoreError::engine_not_found(id))
    }
}
