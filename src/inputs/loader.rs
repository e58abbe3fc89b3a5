//! Load station inputs from JSON

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::StationInputs;
use crate::error::LoadError;

/// Load and validate inputs from a JSON file
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<StationInputs, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let inputs = load_inputs_from_reader(BufReader::new(file))?;
    log::debug!("Loaded station inputs from {}", path.display());
    Ok(inputs)
}

/// Load and validate inputs from any JSON reader
pub fn load_inputs_from_reader<R: Read>(reader: R) -> Result<StationInputs, LoadError> {
    let inputs: StationInputs = serde_json::from_reader(reader)?;
    Ok(inputs.validated()?)
}

/// Parse and validate inputs from a JSON string; an empty body yields defaults
pub fn parse_inputs(body: &str) -> Result<StationInputs, LoadError> {
    if body.trim().is_empty() {
        return Ok(StationInputs::default());
    }
    let inputs: StationInputs = serde_json::from_str(body)?;
    Ok(inputs.validated()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::inputs::{AssetOwnership, CostModel, GrowthModel};

    #[test]
    fn test_partial_document_uses_defaults() {
        let json = r#"{
            "usage": { "sessions_per_day": 80 },
            "financing": { "asset_ownership": "lease" },
            "growth": { "model": "flat" }
        }"#;
        let inputs = load_inputs_from_reader(json.as_bytes()).expect("valid inputs");

        assert_eq!(inputs.usage.sessions_per_day, 80);
        assert_eq!(inputs.usage.avg_kwh_per_session, 20.0);
        assert_eq!(inputs.financing.asset_ownership, AssetOwnership::Lease);
        assert_eq!(inputs.financing.loan_term_years, 5);
        assert_eq!(inputs.growth.model, GrowthModel::Flat);
        assert_eq!(inputs.horizon.years, 10);
    }

    #[test]
    fn test_unit_costs_and_cost_model() {
        let json = r#"{
            "energy": {
                "solar_percent": 100,
                "unit_costs": {
                    "solar_cost_per_kwh": 35,
                    "dg_cost_per_kwh": 300,
                    "cng_cost_per_kwh": 140,
                    "grid_cost_per_kwh": 110
                }
            },
            "cost_model": "energy_mix"
        }"#;
        let inputs = parse_inputs(json).expect("valid inputs");
        assert_eq!(inputs.requested_cost_model(), CostModel::EnergyMix);
        assert_eq!(inputs.energy.unit_costs.map(|c| c.solar_cost_per_kwh), Some(35.0));
    }

    #[test]
    fn test_empty_body_is_default() {
        assert_eq!(parse_inputs("  ").expect("defaults"), StationInputs::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let json = r#"{ "horizon": { "years": 0 } }"#;
        let err = parse_inputs(json).unwrap_err();
        assert!(matches!(err, LoadError::Invalid(InputError::ZeroYears)));
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_inputs("{ \"usage\": ").unwrap_err();
        assert!(matches!(err, LoadError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_inputs("does/not/exist.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
