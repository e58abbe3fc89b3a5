//! Energy cost models

use crate::inputs::{CostModel, EnergyMix, EnergyUnitCosts, StationInputs};

/// Weighted cost per kWh of the supply mix
///
/// Grid covers the remainder of the mix, clamped so it is never negative.
pub fn energy_unit_cost(mix: &EnergyMix, costs: &EnergyUnitCosts) -> f64 {
    mix.solar_percent / 100.0 * costs.solar_cost_per_kwh
        + mix.dg_percent / 100.0 * costs.dg_cost_per_kwh
        + mix.cng_percent / 100.0 * costs.cng_cost_per_kwh
        + mix.grid_percent() / 100.0 * costs.grid_cost_per_kwh
}

/// Energy cost formula resolved for one projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnergyCost {
    /// Share of the year's revenue
    RevenueShare(f64),
    /// Fixed annual cost from delivered kWh and the mix unit cost
    PerKwh {
        unit_cost: f64,
        annual_cost: f64,
    },
}

impl EnergyCost {
    /// Resolve the cost formula for a set of inputs
    ///
    /// An energy-mix request without unit costs cannot be honoured; it falls
    /// back to the revenue share. Validated inputs never reach that branch.
    pub fn resolve(inputs: &StationInputs, revenue_share: f64) -> Self {
        match (inputs.requested_cost_model(), inputs.energy.unit_costs) {
            (CostModel::EnergyMix, Some(costs)) => {
                let unit_cost = energy_unit_cost(&inputs.energy, &costs);
                EnergyCost::PerKwh {
                    unit_cost,
                    annual_cost: inputs.annual_energy_kwh() * unit_cost,
                }
            }
            (CostModel::EnergyMix, None) => {
                log::warn!("Energy-mix cost model without unit costs, using revenue share");
                EnergyCost::RevenueShare(revenue_share)
            }
            (CostModel::RevenueProxy, _) => EnergyCost::RevenueShare(revenue_share),
        }
    }

    /// Energy cost for a year with the given revenue
    pub fn for_year(&self, revenue: f64) -> f64 {
        match *self {
            EnergyCost::RevenueShare(share) => revenue * share,
            EnergyCost::PerKwh { annual_cost, .. } => annual_cost,
        }
    }

    /// Cost model actually applied
    pub fn model(&self) -> CostModel {
        match self {
            EnergyCost::RevenueShare(_) => CostModel::RevenueProxy,
            EnergyCost::PerKwh { .. } => CostModel::EnergyMix,
        }
    }

    /// Weighted unit cost, when the energy-mix model applies
    pub fn unit_cost(&self) -> Option<f64> {
        match self {
            EnergyCost::RevenueShare(_) => None,
            EnergyCost::PerKwh { unit_cost, .. } => Some(*unit_cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn costs() -> EnergyUnitCosts {
        EnergyUnitCosts {
            solar_cost_per_kwh: 40.0,
            dg_cost_per_kwh: 300.0,
            cng_cost_per_kwh: 150.0,
            grid_cost_per_kwh: 100.0,
        }
    }

    #[test]
    fn test_all_solar_costs_solar_rate() {
        let mix = EnergyMix {
            solar_percent: 100.0,
            dg_percent: 0.0,
            cng_percent: 0.0,
            unit_costs: None,
        };
        assert_eq!(energy_unit_cost(&mix, &costs()), 40.0);
    }

    #[test]
    fn test_weighted_mix() {
        // 40% solar, 20% DG, 10% CNG, 30% grid
        let mix = EnergyMix {
            solar_percent: 40.0,
            dg_percent: 20.0,
            cng_percent: 10.0,
            unit_costs: None,
        };
        let expected = 0.4 * 40.0 + 0.2 * 300.0 + 0.1 * 150.0 + 0.3 * 100.0;
        assert_relative_eq!(energy_unit_cost(&mix, &costs()), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_oversubscribed_mix_drops_grid() {
        let mix = EnergyMix {
            solar_percent: 60.0,
            dg_percent: 60.0,
            cng_percent: 0.0,
            unit_costs: None,
        };
        let expected = 0.6 * 40.0 + 0.6 * 300.0;
        assert_relative_eq!(energy_unit_cost(&mix, &costs()), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_resolve_revenue_proxy() {
        let inputs = StationInputs::default();
        let cost = EnergyCost::resolve(&inputs, 0.3);

        assert_eq!(cost.model(), CostModel::RevenueProxy);
        assert_eq!(cost.unit_cost(), None);
        assert_relative_eq!(cost.for_year(1_000.0), 300.0);
    }

    #[test]
    fn test_resolve_energy_mix() {
        let mut inputs = StationInputs::default();
        inputs.energy.unit_costs = Some(costs());
        let cost = EnergyCost::resolve(&inputs, 0.3);

        // 40% solar, 60% grid
        let unit = 0.4 * 40.0 + 0.6 * 100.0;
        assert_eq!(cost.model(), CostModel::EnergyMix);
        assert_relative_eq!(cost.unit_cost().unwrap_or_default(), unit, max_relative = 1e-12);
        // Independent of revenue
        assert_relative_eq!(cost.for_year(1.0), 365_000.0 * unit, max_relative = 1e-12);
        assert_eq!(cost.for_year(1.0), cost.for_year(1e9));
    }

    #[test]
    fn test_energy_mix_without_costs_falls_back() {
        let mut inputs = StationInputs::default();
        inputs.cost_model = Some(CostModel::EnergyMix);
        let cost = EnergyCost::resolve(&inputs, 0.3);
        assert_eq!(cost, EnergyCost::RevenueShare(0.3));
    }
}
