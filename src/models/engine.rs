//! Engine entity. Mirrors the `engines` table.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored engine. Also embedded in `Car` as its engine snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Engine {
    #[serde(default)]
    pub engine_id: Uuid,
    #[serde(default)]
    pub displacement: i64,
    #[serde(rename = "noOfCylinders", default)]
    pub cylinder_count: i64,
    #[serde(rename = "carRange", default)]
    pub range: i64,
}

impl Engine {
    /// Engine carrying only its identifier, as returned by reads that skip
    /// the engine join.
    #[must_use]
    pub fn reference(engine_id: Uuid) -> Self {
        Self { engine_id, ..Self::default() }
    }
}

/// Payload for creating or fully replacing an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineRequest {
    #[serde(default)]
    pub displacement: i64,
    #[serde(rename = "noOfCylinders", default)]
    pub cylinder_count: i64,
    #[serde(rename = "carRange", default)]
    pub range: i64,
}

impl EngineRequest {
    /// Materialize the request as an engine with the given identifier.
    #[must_use]
    pub fn into_engine(self, engine_id: Uuid) -> Engine {
        Engine {
            engine_id,
            displacement: self.displacement,
            cylinder_count: self.cylinder_count,
            range: self.range,
        }
    }
}
