//! Station inputs, defaults, loading and validation

mod station;
mod validate;
pub mod loader;

pub use station::{
    AssetOwnership, ChargerType, CostInputs, CostModel, EnergyMix, EnergyUnitCosts,
    FinancingInputs, GrowthInputs, GrowthModel, HorizonInputs, StationInputs, StationProfile,
    Usage, DAYS_PER_YEAR, DEFAULT_AC_PRICE_PER_KWH, DEFAULT_DC_PRICE_PER_KWH,
};
pub use validate::validate;
pub use loader::{load_inputs, load_inputs_from_reader, parse_inputs};
