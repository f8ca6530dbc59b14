//! Car entity. Mirrors the `cars` table joined with its engine.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use super::engine::Engine;

// =============================================================================
// FUEL TYPE
// =============================================================================

/// Closed set of accepted fuel types. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [Self; 4] = [Self::Petrol, Self::Diesel, Self::Electric, Self::Hybrid];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Petrol => "Petrol",
            Self::Diesel => "Diesel",
            Self::Electric => "Electric",
            Self::Hybrid => "Hybrid",
        }
    }

    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|fuel| fuel.as_str() == s)
    }
}

// =============================================================================
// CAR
// =============================================================================

/// A stored car with its engine snapshot and store-assigned timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    pub name: String,
    pub year: String,
    pub brand: String,
    pub fuel_type: String,
    pub engine: Engine,
    pub price: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Payload for creating or fully replacing a car.
///
/// `engine.engine_id` must name an engine that already exists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CarRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub engine: Engine,
    #[serde(default)]
    pub price: f64,
}
