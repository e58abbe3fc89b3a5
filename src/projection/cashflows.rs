//! Projection output structures

use serde::{Deserialize, Serialize};

use super::financing::FinancingSchedule;
use super::metrics::InvestmentMetrics;
use crate::inputs::CostModel;

/// One projected year
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct YearRow {
    /// Projection year (1-indexed)
    pub year: u32,

    pub revenue: f64,

    // Cost components
    pub opex: f64,
    pub energy_cost: f64,
    pub loan_payment: f64,
    pub lease_payment: f64,

    /// Sum of the cost components
    pub cost: f64,

    pub net_cash_flow: f64,
}

/// Intermediate values the projection was built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedAssumptions {
    pub sessions_per_year: f64,
    pub annual_energy_kwh: f64,

    /// Price per kWh after resolving the charger default
    pub price_per_kwh: f64,

    /// Year-0 revenue, before any growth
    pub base_revenue: f64,

    /// Cost model applied to energy
    pub cost_model: CostModel,

    /// Weighted energy cost per kWh; only set in energy-mix mode
    pub energy_unit_cost: Option<f64>,

    pub financing: FinancingSchedule,
}

/// Full result of one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Year 0 holds the capex outflow; years 1..=n hold net cash flows
    pub cash_flows: Vec<f64>,

    /// Running sum of `cash_flows`
    pub cumulative_cash_flows: Vec<f64>,

    pub yearly_breakdown: Vec<YearRow>,

    pub metrics: InvestmentMetrics,

    pub derived: DerivedAssumptions,
}

impl ProjectionResult {
    /// Number of projected years, excluding year 0
    pub fn years(&self) -> usize {
        self.yearly_breakdown.len()
    }

    /// Final projected year, if any
    pub fn last_year(&self) -> Option<&YearRow> {
        self.yearly_breakdown.last()
    }

    /// Cumulative position at the end of the horizon
    pub fn final_cumulative_cash_flow(&self) -> f64 {
        self.cumulative_cash_flows.last().copied().unwrap_or(0.0)
    }

    pub fn total_revenue(&self) -> f64 {
        self.yearly_breakdown.iter().map(|row| row.revenue).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.yearly_breakdown.iter().map(|row| row.cost).sum()
    }
}
