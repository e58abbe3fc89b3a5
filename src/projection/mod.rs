//! Projection engine for station cash flows and investment metrics

mod engine;
mod cashflows;
mod energy;
mod financing;
mod irr;
mod metrics;

pub use engine::{compute, ProjectionConfig, ProjectionEngine};
pub use cashflows::{DerivedAssumptions, ProjectionResult, YearRow};
pub use energy::{energy_unit_cost, EnergyCost};
pub use financing::{annuity_payment, FinancingSchedule};
pub use irr::{calculate_irr, calculate_npv, has_sign_change};
pub use metrics::{breakeven_price, payback_period, profitability_index, InvestmentMetrics};

// ============================================================================
// Default Ratios
// ============================================================================
// - Leased equipment costs a fixed share of capex every year
// - Without an energy-mix breakdown, energy is costed as a share of revenue

/// Annual lease payment as a share of capex (15%)
pub const DEFAULT_LEASE_RATE: f64 = 0.15;

/// Energy cost as a share of revenue under the revenue-proxy model (30%)
pub const DEFAULT_REVENUE_PROXY_ENERGY_SHARE: f64 = 0.30;
