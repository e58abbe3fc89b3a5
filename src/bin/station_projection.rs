//! Run a station projection from a JSON input file and command-line overrides
//!
//! Prints the financial summary and cash-flow table, optionally writing the
//! table as CSV and the full result as JSON.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use charging_station_model::{
    inputs::load_inputs,
    report::{cashflow_table, summary, write_cashflow_csv},
    AssetOwnership, CostModel, GrowthModel, ProjectionEngine, StationInputs,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CostModelArg {
    RevenueProxy,
    EnergyMix,
}

impl From<CostModelArg> for CostModel {
    fn from(arg: CostModelArg) -> Self {
        match arg {
            CostModelArg::RevenueProxy => CostModel::RevenueProxy,
            CostModelArg::EnergyMix => CostModel::EnergyMix,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OwnershipArg {
    Purchase,
    Lease,
}

impl From<OwnershipArg> for AssetOwnership {
    fn from(arg: OwnershipArg) -> Self {
        match arg {
            OwnershipArg::Purchase => AssetOwnership::Purchase,
            OwnershipArg::Lease => AssetOwnership::Lease,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GrowthModelArg {
    Flat,
    Compounding,
}

impl From<GrowthModelArg> for GrowthModel {
    fn from(arg: GrowthModelArg) -> Self {
        match arg {
            GrowthModelArg::Flat => GrowthModel::Flat,
            GrowthModelArg::Compounding => GrowthModel::Compounding,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON station inputs; defaults are used for anything not given
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Projection horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Discount rate (%)
    #[arg(long)]
    discount_rate: Option<f64>,

    /// Selling price per kWh
    #[arg(long)]
    price_per_kwh: Option<f64>,

    #[arg(long)]
    sessions_per_day: Option<u32>,

    /// Initial setup cost
    #[arg(long)]
    capex: Option<f64>,

    /// Purchase (optionally loan-financed) or lease the equipment
    #[arg(long, value_enum)]
    ownership: Option<OwnershipArg>,

    /// Flat keeps revenue and opex at base values; compounding applies growth
    #[arg(long, value_enum)]
    growth_model: Option<GrowthModelArg>,

    #[arg(long, value_enum)]
    cost_model: Option<CostModelArg>,

    /// Write the cash-flow table to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the full result to this JSON file
    #[arg(long)]
    json: Option<PathBuf>,
}

impl Args {
    fn apply_overrides(&self, inputs: &mut StationInputs) {
        if let Some(years) = self.years {
            inputs.horizon.years = years;
        }
        if let Some(rate) = self.discount_rate {
            inputs.horizon.discount_rate_percent = rate;
        }
        if let Some(price) = self.price_per_kwh {
            inputs.price_per_kwh = Some(price);
        }
        if let Some(sessions) = self.sessions_per_day {
            inputs.usage.sessions_per_day = sessions;
        }
        if let Some(capex) = self.capex {
            inputs.costs.capex_amount = capex;
        }
        if let Some(ownership) = self.ownership {
            inputs.financing.asset_ownership = ownership.into();
        }
        if let Some(model) = self.growth_model {
            inputs.growth.model = model.into();
        }
        if let Some(model) = self.cost_model {
            inputs.cost_model = Some(model.into());
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut inputs = match &args.input {
        Some(path) => load_inputs(path)
            .with_context(|| format!("Failed to load inputs from {}", path.display()))?,
        None => StationInputs::default(),
    };
    args.apply_overrides(&mut inputs);
    let inputs = inputs.validated().context("Invalid station inputs")?;

    let start = Instant::now();
    let result = ProjectionEngine::default().compute(&inputs);
    log::info!("Projection complete in {:?}", start.elapsed());

    println!(
        "EV Charging Station Projection - {} ({:?} charger)\n",
        inputs.station.location, inputs.station.charger_type
    );
    println!("{}", summary(&result));
    println!("Cash Flow Projection:");
    print!("{}", cashflow_table(&result));

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        write_cashflow_csv(&result, BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nCash flows written to {}", path.display());
    }

    if let Some(path) = &args.json {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &result)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Result written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("station_projection").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn test_flags_switch_file_settings_back() {
        let mut inputs = StationInputs::default();
        inputs.financing.asset_ownership = AssetOwnership::Lease;
        inputs.growth.model = GrowthModel::Flat;

        parse(&["--ownership", "purchase", "--growth-model", "compounding"])
            .apply_overrides(&mut inputs);

        assert_eq!(inputs.financing.asset_ownership, AssetOwnership::Purchase);
        assert_eq!(inputs.growth.model, GrowthModel::Compounding);
    }

    #[test]
    fn test_unset_flags_keep_file_settings() {
        let mut inputs = StationInputs::default();
        inputs.financing.asset_ownership = AssetOwnership::Lease;
        inputs.growth.model = GrowthModel::Flat;
        inputs.cost_model = Some(CostModel::EnergyMix);

        parse(&["--years", "3"]).apply_overrides(&mut inputs);

        assert_eq!(inputs.horizon.years, 3);
        assert_eq!(inputs.financing.asset_ownership, AssetOwnership::Lease);
        assert_eq!(inputs.growth.model, GrowthModel::Flat);
        assert_eq!(inputs.cost_model, Some(CostModel::EnergyMix));
    }

    #[test]
    fn test_value_enum_flags() {
        let mut inputs = StationInputs::default();
        parse(&["--ownership", "lease", "--growth-model", "flat", "--cost-model", "revenue-proxy"])
            .apply_overrides(&mut inputs);

        assert_eq!(inputs.financing.asset_ownership, AssetOwnership::Lease);
        assert_eq!(inputs.growth.model, GrowthModel::Flat);
        assert_eq!(inputs.cost_model, Some(CostModel::RevenueProxy));
        assert!(Args::try_parse_from(["station_projection", "--ownership", "rent"]).is_err());
    }
}
