//! Domain entities and request payloads.
//!
//! DESIGN
//! ======
//! Entities (`Car`, `Engine`) carry store-assigned fields. Request objects
//! (`CarRequest`, `EngineRequest`) carry only what a caller may set and are
//! what validation inspects before anything reaches a store.

pub mod car;
pub mod engine;

pub use car::{Car, CarRequest, FuelType};
pub use engine::{Engine, EngineRequest};
