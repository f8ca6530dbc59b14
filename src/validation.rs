//! Request validation — ordered, short-circuiting domain rules.
//!
//! DESIGN
//! ======
//! Each check returns early on the first violated rule, so callers see
//! exactly one reason per call. Car fields are checked name → year → brand
//! → fuel type → engine → price; engine fields displacement → cylinder
//! count → range. Nothing here performs I/O.

use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::ErrorCode;
use crate::models::{CarRequest, Engine, EngineRequest, FuelType};

/// The automobile was invented in 1886; no earlier model year is accepted.
pub const EARLIEST_MODEL_YEAR: i32 = 1886;

/// A violated domain rule. Carries only a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {reason}")]
pub struct ValidationError {
    reason: String,
}

impl ValidationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        "E_VALIDATION"
    }
}

type Result = std::result::Result<(), ValidationError>;

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// Validate a car payload against the current UTC calendar year.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_car(req: &CarRequest) -> Result {
    validate_car_at(req, current_year())
}

/// Validate a car payload, treating `current_year` as the latest valid year.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_car_at(req: &CarRequest, current_year: i32) -> Result {
    validate_name(&req.name)?;
    validate_year(&req.year, current_year)?;
    validate_brand(&req.brand)?;
    validate_fuel_type(&req.fuel_type)?;
    validate_car_engine(&req.engine)?;
    validate_price(req.price)
}

/// Validate a standalone engine payload.
///
/// # Errors
///
/// Returns the first violated rule.
pub fn validate_engine(req: &EngineRequest) -> Result {
    validate_engine_specs(req.displacement, req.cylinder_count, req.range)
}

#[must_use]
pub fn current_year() -> i32 {
    OffsetDateTime::now_utc().year()
}

// =============================================================================
// RULES
// =============================================================================

fn validate_name(name: &str) -> Result {
    if name.is_empty() {
        return Err(ValidationError::new("name is required"));
    }
    Ok(())
}

fn validate_year(year: &str, current_year: i32) -> Result {
    if year.is_empty() {
        return Err(ValidationError::new("year is required"));
    }
    let Ok(parsed) = year.parse::<i64>() else {
        return Err(ValidationError::new("year must be a valid number"));
    };
    if !(i64::from(EARLIEST_MODEL_YEAR)..=i64::from(current_year)).contains(&parsed) {
        return Err(ValidationError::new(format!(
            "year must be between {EARLIEST_MODEL_YEAR} and {current_year}"
        )));
    }
    Ok(())
}

fn validate_brand(brand: &str) -> Result {
    if brand.is_empty() {
        return Err(ValidationError::new("brand is required"));
    }
    Ok(())
}

fn validate_fuel_type(fuel_type: &str) -> Result {
    if FuelType::from_str(fuel_type).is_none() {
        let allowed = FuelType::ALL.map(FuelType::as_str).join(", ");
        return Err(ValidationError::new(format!("fuel_type must be one of: {allowed}")));
    }
    Ok(())
}

fn validate_car_engine(engine: &Engine) -> Result {
    if engine.engine_id == Uuid::nil() {
        return Err(ValidationError::new("engine_id is required"));
    }
    validate_engine_specs(engine.displacement, engine.cylinder_count, engine.range)
}

fn validate_engine_specs(displacement: i64, cylinder_count: i64, range: i64) -> Result {
    if displacement <= 0 {
        return Err(ValidationError::new("displacement must be greater than zero"));
    }
    if cylinder_count <= 0 {
        return Err(ValidationError::new("cylinder_count must be greater than zero"));
    }
    if range <= 0 {
        return Err(ValidationError::new("range must be greater than zero"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result {
    if price.is_nan() || price <= 0.0 {
        return Err(ValidationError::new("price must be greater than zero"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
