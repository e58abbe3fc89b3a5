//! Investment metrics derived from a cash-flow projection

use serde::{Deserialize, Serialize};

use super::irr::{calculate_irr, calculate_npv};

/// Scalar results of a projection; `None` marks a metric that is undefined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentMetrics {
    pub npv: f64,

    /// Internal rate of return as a decimal
    pub irr: Option<f64>,

    /// First year the cumulative cash flow turns positive
    pub payback_period_years: Option<u32>,

    pub profitability_index: Option<f64>,

    /// Price per kWh at which the final year's revenue covers its cost
    pub breakeven_price_per_kwh: Option<f64>,
}

impl InvestmentMetrics {
    /// Reduce a cash-flow sequence to metrics
    ///
    /// `cash_flows[0]` is the capex outflow. `last_year_cost` and
    /// `annual_energy_kwh` feed the breakeven price.
    pub fn from_cash_flows(
        cash_flows: &[f64],
        cumulative: &[f64],
        discount_rate: f64,
        capex: f64,
        last_year_cost: f64,
        annual_energy_kwh: f64,
    ) -> Self {
        let npv = calculate_npv(discount_rate, cash_flows);
        Self {
            npv,
            irr: calculate_irr(cash_flows),
            payback_period_years: payback_period(cumulative),
            profitability_index: profitability_index(npv, capex),
            breakeven_price_per_kwh: breakeven_price(last_year_cost, annual_energy_kwh),
        }
    }

    /// IRR in percent, for display
    pub fn irr_percent(&self) -> Option<f64> {
        self.irr.map(|r| r * 100.0)
    }
}

/// Smallest year index (>= 1) with a strictly positive cumulative cash flow
pub fn payback_period(cumulative: &[f64]) -> Option<u32> {
    cumulative
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(_, &cum)| cum > 0.0)
        .and_then(|(year, _)| u32::try_from(year).ok())
}

/// Present value of inflows over initial investment
pub fn profitability_index(npv: f64, capex: f64) -> Option<f64> {
    if capex == 0.0 {
        return None;
    }
    Some((npv + capex) / capex)
}

/// Price per kWh that makes revenue equal `annual_cost`
pub fn breakeven_price(annual_cost: f64, annual_energy_kwh: f64) -> Option<f64> {
    if annual_energy_kwh == 0.0 {
        return None;
    }
    Some(annual_cost / annual_energy_kwh)
}
