//! End-to-end projection checks through the public API

use approx::{assert_abs_diff_eq, assert_relative_eq};

use charging_station_model::{
    inputs::{parse_inputs, EnergyUnitCosts},
    projection::{calculate_irr, calculate_npv, payback_period},
    compute, AssetOwnership, CostModel, GrowthModel, StationInputs,
};

/// capex 15M, opex 500k/month, 50 sessions x 20 kWh at 200, half the capex
/// on a 5-year 10% loan, 5 years at a 10% discount rate, no growth
fn reference_inputs() -> StationInputs {
    let json = r#"{
        "usage": { "sessions_per_day": 50, "avg_kwh_per_session": 20 },
        "costs": { "capex_amount": 15000000, "opex_monthly": 500000 },
        "price_per_kwh": 200,
        "growth": { "revenue_growth_percent": 0, "opex_inflation_percent": 0 },
        "financing": {
            "loan_percent_of_capex": 50,
            "loan_term_years": 5,
            "annual_interest_rate_percent": 10
        },
        "horizon": { "years": 5, "discount_rate_percent": 10 }
    }"#;
    parse_inputs(json).expect("reference inputs are valid")
}

#[test]
fn test_reference_case() {
    let result = compute(&reference_inputs());

    assert_eq!(result.derived.sessions_per_year, 18_250.0);
    assert_eq!(result.derived.base_revenue, 73_000_000.0);
    assert_eq!(result.cash_flows.len(), 6);
    assert_eq!(result.cash_flows[0], -15_000_000.0);

    let first = result.cash_flows[1];
    for cf in &result.cash_flows[1..] {
        assert_relative_eq!(*cf, first, max_relative = 1e-12);
    }

    // NPV and IRR agree with each other on the same flows
    let irr = result.metrics.irr.expect("flows change sign");
    assert_abs_diff_eq!(calculate_npv(irr, &result.cash_flows), 0.0, epsilon = 1e-2);
    assert_relative_eq!(
        result.metrics.npv,
        calculate_npv(0.10, &result.cash_flows),
        max_relative = 1e-12
    );
    assert_eq!(result.metrics.payback_period_years, Some(1));

    // Deterministic across calls
    assert_eq!(compute(&reference_inputs()), result);
}

#[test]
fn test_cumulative_is_running_sum() {
    let mut inputs = StationInputs::default();
    inputs.horizon.years = 15;
    let result = compute(&inputs);

    assert_eq!(result.cumulative_cash_flows[0], result.cash_flows[0]);
    for y in 1..=15 {
        assert_eq!(
            result.cumulative_cash_flows[y],
            result.cumulative_cash_flows[y - 1] + result.cash_flows[y]
        );
    }
}

#[test]
fn test_zero_growth_gives_flat_net_cash_flow() {
    let mut inputs = StationInputs::default();
    inputs.growth.revenue_growth_percent = 0.0;
    inputs.growth.opex_inflation_percent = 0.0;
    inputs.financing.loan_percent_of_capex = 0.0;
    let result = compute(&inputs);

    let first = result.yearly_breakdown[0].net_cash_flow;
    assert!(result.yearly_breakdown.iter().all(|row| row.net_cash_flow == first));
}

#[test]
fn test_payback_example() {
    let flows = [-100.0, 60.0, 60.0];
    let cumulative: Vec<f64> = flows
        .iter()
        .scan(0.0, |acc, cf| {
            *acc += cf;
            Some(*acc)
        })
        .collect();
    assert_eq!(payback_period(&cumulative), Some(2));
}

#[test]
fn test_no_sign_change_means_no_irr() {
    assert_eq!(calculate_irr(&[-100.0, -1.0, -1.0]), None);
    assert_eq!(calculate_irr(&[100.0, 1.0, 1.0]), None);
}

#[test]
fn test_breakeven_round_trip() {
    let mut inputs = StationInputs::default();
    inputs.financing.asset_ownership = AssetOwnership::Lease;
    inputs.horizon.years = 7;
    let result = compute(&inputs);

    let last = result.last_year().expect("at least one year");
    let breakeven = result.metrics.breakeven_price_per_kwh.expect("energy delivered");
    assert_relative_eq!(
        breakeven * result.derived.sessions_per_year * inputs.usage.avg_kwh_per_session,
        last.cost,
        max_relative = 1e-12
    );
}

#[test]
fn test_all_solar_unit_cost() {
    let mut inputs = StationInputs::default();
    inputs.energy.solar_percent = 100.0;
    inputs.energy.dg_percent = 0.0;
    inputs.energy.cng_percent = 0.0;
    inputs.energy.unit_costs = Some(EnergyUnitCosts {
        solar_cost_per_kwh: 42.5,
        dg_cost_per_kwh: 310.0,
        cng_cost_per_kwh: 160.0,
        grid_cost_per_kwh: 95.0,
    });
    let result = compute(&inputs.validated().expect("valid"));

    assert_eq!(result.derived.cost_model, CostModel::EnergyMix);
    assert_eq!(result.derived.energy_unit_cost, Some(42.5));
}

#[test]
fn test_flat_growth_model_from_json() {
    let inputs = parse_inputs(r#"{ "growth": { "model": "flat" }, "horizon": { "years": 3 } }"#)
        .expect("valid");
    assert_eq!(inputs.growth.model, GrowthModel::Flat);

    let result = compute(&inputs);
    let revenues: Vec<f64> = result.yearly_breakdown.iter().map(|r| r.revenue).collect();
    assert_eq!(revenues, vec![109_500_000.0; 3]);
}

#[test]
fn test_result_serializes_nulls() {
    let mut inputs = StationInputs::default();
    inputs.costs.capex_amount = 0.0;
    let result = compute(&inputs);
    let value = serde_json::to_value(&result).expect("serializable");

    assert!(value["metrics"]["profitability_index"].is_null());
    assert!(value["metrics"]["irr"].is_null());
    assert_eq!(value["cash_flows"].as_array().map(Vec::len), Some(11));
}

#[test]
fn test_demo_input_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/lekki_dc_energy_mix.json");
    let inputs = charging_station_model::inputs::load_inputs(path).expect("demo loads");
    let result = compute(&inputs);

    // DC default price applies since no price is given
    assert_eq!(result.derived.price_per_kwh, 500.0);
    assert_eq!(result.derived.cost_model, CostModel::EnergyMix);
    assert_eq!(result.cash_flows.len(), 13);
    assert_eq!(result.yearly_breakdown[6].loan_payment, result.derived.financing.annual_loan_payment);
    assert_eq!(result.yearly_breakdown[7].loan_payment, 0.0);
}
