//! Boundary validation for station inputs
//!
//! The projection engine assumes every value is in range. Anything that
//! collects inputs from outside (files, CLI flags, HTTP bodies) runs them
//! through [`validate`] first.

use super::{CostModel, StationInputs};
use crate::error::InputError;

/// Check every numeric input, returning the first violation found
pub fn validate(inputs: &StationInputs) -> Result<(), InputError> {
    let usage = &inputs.usage;
    if usage.sessions_per_day == 0 {
        return Err(InputError::ZeroSessions);
    }
    positive("avg_kwh_per_session", usage.avg_kwh_per_session)?;

    non_negative("capex_amount", inputs.costs.capex_amount)?;
    non_negative("opex_monthly", inputs.costs.opex_monthly)?;

    let energy = &inputs.energy;
    percent("solar_percent", energy.solar_percent)?;
    percent("dg_percent", energy.dg_percent)?;
    percent("cng_percent", energy.cng_percent)?;
    if let Some(costs) = &energy.unit_costs {
        non_negative("solar_cost_per_kwh", costs.solar_cost_per_kwh)?;
        non_negative("dg_cost_per_kwh", costs.dg_cost_per_kwh)?;
        non_negative("cng_cost_per_kwh", costs.cng_cost_per_kwh)?;
        non_negative("grid_cost_per_kwh", costs.grid_cost_per_kwh)?;
    }
    if inputs.cost_model == Some(CostModel::EnergyMix) && energy.unit_costs.is_none() {
        return Err(InputError::MissingUnitCosts);
    }

    positive("price_per_kwh", inputs.price_per_kwh())?;

    percent("revenue_growth_percent", inputs.growth.revenue_growth_percent)?;
    percent("opex_inflation_percent", inputs.growth.opex_inflation_percent)?;

    let financing = &inputs.financing;
    percent("loan_percent_of_capex", financing.loan_percent_of_capex)?;
    if financing.loan_term_years == 0 {
        return Err(InputError::ZeroLoanTerm);
    }
    percent("annual_interest_rate_percent", financing.annual_interest_rate_percent)?;

    if inputs.horizon.years == 0 {
        return Err(InputError::ZeroYears);
    }
    percent("discount_rate_percent", inputs.horizon.discount_rate_percent)?;

    Ok(())
}

impl StationInputs {
    /// Consume the inputs, returning them only if they pass [`validate`]
    pub fn validated(self) -> Result<Self, InputError> {
        validate(&self)?;
        Ok(self)
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), InputError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(InputError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::Negative { field, value })
    }
}

fn percent(field: &'static str, value: f64) -> Result<(), InputError> {
    finite(field, value)?;
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(InputError::PercentOutOfRange { field, value })
    }
}
