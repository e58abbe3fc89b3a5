//! Core projection engine
//!
//! Turns one set of station inputs into a yearly cash-flow projection and
//! the investment metrics derived from it. The engine holds no per-request
//! state, so a single instance can serve any number of computations.

use crate::inputs::{GrowthModel, StationInputs};

use super::cashflows::{DerivedAssumptions, ProjectionResult, YearRow};
use super::energy::EnergyCost;
use super::financing::FinancingSchedule;
use super::metrics::InvestmentMetrics;
use super::{DEFAULT_LEASE_RATE, DEFAULT_REVENUE_PROXY_ENERGY_SHARE};

/// Fixed ratios the projection applies on top of the station inputs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Annual lease payment as a share of capex
    pub lease_rate: f64,

    /// Energy cost as a share of revenue under the revenue-proxy model
    pub revenue_proxy_energy_share: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            lease_rate: DEFAULT_LEASE_RATE,
            revenue_proxy_energy_share: DEFAULT_REVENUE_PROXY_ENERGY_SHARE,
        }
    }
}

/// Cash-flow projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project cash flows and metrics for one station
    ///
    /// Inputs are expected to have passed validation. Degenerate metrics
    /// (no IRR, zero capex, zero delivered energy) come back as `None`.
    pub fn compute(&self, inputs: &StationInputs) -> ProjectionResult {
        let years = inputs.horizon.years;
        let capex = inputs.costs.capex_amount;

        let sessions_per_year = inputs.sessions_per_year();
        let annual_energy_kwh = inputs.annual_energy_kwh();
        let price_per_kwh = inputs.price_per_kwh();
        let base_revenue = annual_energy_kwh * price_per_kwh;
        let base_opex = inputs.costs.opex_monthly * 12.0;

        let energy = EnergyCost::resolve(inputs, self.config.revenue_proxy_energy_share);
        let financing = FinancingSchedule::new(&inputs.financing, capex, self.config.lease_rate);

        let (revenue_factor, opex_factor) = match inputs.growth.model {
            GrowthModel::Flat => (1.0, 1.0),
            GrowthModel::Compounding => (
                1.0 + inputs.growth.revenue_growth_percent / 100.0,
                1.0 + inputs.growth.opex_inflation_percent / 100.0,
            ),
        };

        let capacity = years as usize + 1;
        let mut cash_flows = Vec::with_capacity(capacity);
        let mut cumulative_cash_flows = Vec::with_capacity(capacity);
        let mut yearly_breakdown = Vec::with_capacity(years as usize);

        cash_flows.push(-capex);
        cumulative_cash_flows.push(-capex);

        let mut revenue = base_revenue;
        let mut opex = base_opex;
        let mut cumulative = -capex;

        for year in 1..=years {
            revenue *= revenue_factor;
            opex *= opex_factor;

            let energy_cost = energy.for_year(revenue);
            let loan_payment = financing.loan_payment(year);
            let lease_payment = financing.annual_lease_payment;
            let cost = opex + energy_cost + loan_payment + lease_payment;
            let net_cash_flow = revenue - cost;

            cumulative += net_cash_flow;
            cash_flows.push(net_cash_flow);
            cumulative_cash_flows.push(cumulative);

            yearly_breakdown.push(YearRow {
                year,
                revenue,
                opex,
                energy_cost,
                loan_payment,
                lease_payment,
                cost,
                net_cash_flow,
            });
        }

        let last_year_cost = yearly_breakdown.last().map_or(0.0, |row| row.cost);
        let metrics = InvestmentMetrics::from_cash_flows(
            &cash_flows,
            &cumulative_cash_flows,
            inputs.horizon.discount_rate_percent / 100.0,
            capex,
            last_year_cost,
            annual_energy_kwh,
        );

        log::debug!(
            "Projected {} years at {}: npv={:.2}, irr={:?}, payback={:?}",
            years,
            inputs.station.location,
            metrics.npv,
            metrics.irr,
            metrics.payback_period_years
        );

        ProjectionResult {
            cash_flows,
            cumulative_cash_flows,
            yearly_breakdown,
            metrics,
            derived: DerivedAssumptions {
                sessions_per_year,
                annual_energy_kwh,
                price_per_kwh,
                base_revenue,
                cost_model: energy.model(),
                energy_unit_cost: energy.unit_cost(),
                financing,
            },
        }
    }
}

/// Project with the default engine configuration
pub fn compute(inputs: &StationInputs) -> ProjectionResult {
    ProjectionEngine::default().compute(inputs)
}
