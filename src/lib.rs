//! Charging Station Model - cash-flow projection for EV charging station business cases
//!
//! This library provides:
//! - Station, energy-mix and financing inputs with validation at the boundary
//! - A deterministic yearly projection of revenue, cost and net cash flow
//! - Investment metrics: NPV, IRR, payback period, profitability index, breakeven price
//! - CSV and text reporting of the projection

pub mod error;
pub mod inputs;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use error::{InputError, LoadError};
pub use inputs::{StationInputs, CostModel, GrowthModel, AssetOwnership, ChargerType};
pub use projection::{compute, ProjectionEngine, ProjectionConfig, ProjectionResult, YearRow};
