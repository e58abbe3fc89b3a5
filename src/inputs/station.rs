//! Station business-case inputs
//!
//! Every section deserializes with defaults, so a JSON file only needs to
//! name the values that differ from the baseline case.

use serde::{Deserialize, Serialize};

/// Operating days in a projection year
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Default price per kWh for AC (slow) chargers
pub const DEFAULT_AC_PRICE_PER_KWH: f64 = 300.0;

/// Default price per kWh for DC (fast) chargers
pub const DEFAULT_DC_PRICE_PER_KWH: f64 = 500.0;

/// Charger hardware class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargerType {
    /// AC (slow) charger
    #[default]
    Ac,
    /// DC (fast) charger
    Dc,
}

impl ChargerType {
    /// Price used when the inputs do not name one
    pub fn default_price_per_kwh(self) -> f64 {
        match self {
            ChargerType::Ac => DEFAULT_AC_PRICE_PER_KWH,
            ChargerType::Dc => DEFAULT_DC_PRICE_PER_KWH,
        }
    }
}

/// How the station assets are financed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetOwnership {
    /// Outright purchase, optionally part-funded by an amortizing loan
    #[default]
    Purchase,
    /// Leased equipment with a fixed annual payment
    Lease,
}

/// Energy cost formula used by the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostModel {
    /// Energy cost is a fixed share of the year's revenue
    RevenueProxy,
    /// Energy cost is delivered kWh times the weighted unit cost of the mix
    EnergyMix,
}

/// Year-over-year behaviour of revenue and opex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthModel {
    /// Revenue and opex stay at their base values every year
    Flat,
    /// Revenue grows and opex inflates annually, compounding from year 1
    #[default]
    Compounding,
}

/// Descriptive station attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationProfile {
    pub location: String,
    pub charger_type: ChargerType,
}

impl Default for StationProfile {
    fn default() -> Self {
        Self {
            location: "Victoria Island".to_string(),
            charger_type: ChargerType::Ac,
        }
    }
}

/// Charging demand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    /// Charging sessions per day (> 0)
    pub sessions_per_day: u32,

    /// Average energy delivered per session in kWh (> 0)
    pub avg_kwh_per_session: f64,

    /// Average session length; informational only
    pub charging_time_minutes: u32,
}

impl Default for Usage {
    fn default() -> Self {
        Self {
            sessions_per_day: 50,
            avg_kwh_per_session: 20.0,
            charging_time_minutes: 60,
        }
    }
}

/// Capital and operating expenditure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostInputs {
    /// Initial setup cost, paid at year 0
    pub capex_amount: f64,

    /// Operating expense per month, before inflation
    pub opex_monthly: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            capex_amount: 15_000_000.0,
            opex_monthly: 500_000.0,
        }
    }
}

/// Unit cost of each energy source, per kWh
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyUnitCosts {
    pub solar_cost_per_kwh: f64,
    pub dg_cost_per_kwh: f64,
    pub cng_cost_per_kwh: f64,
    pub grid_cost_per_kwh: f64,
}

/// Supply mix for delivered energy
///
/// Grid takes whatever share solar, diesel generator (DG) and CNG leave
/// over. The shares are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyMix {
    pub solar_percent: f64,
    pub dg_percent: f64,
    pub cng_percent: f64,

    /// Per-source unit costs; when present the energy-mix cost model applies
    /// unless another model is selected explicitly
    pub unit_costs: Option<EnergyUnitCosts>,
}

impl Default for EnergyMix {
    fn default() -> Self {
        Self {
            solar_percent: 40.0,
            dg_percent: 0.0,
            cng_percent: 0.0,
            unit_costs: None,
        }
    }
}

impl EnergyMix {
    /// Remaining share drawn from the grid, clamped at zero when oversubscribed
    pub fn grid_percent(&self) -> f64 {
        (100.0 - self.solar_percent - self.dg_percent - self.cng_percent).max(0.0)
    }
}

/// Annual growth assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthInputs {
    pub model: GrowthModel,

    /// Annual revenue growth (%)
    pub revenue_growth_percent: f64,

    /// Annual opex inflation (%)
    pub opex_inflation_percent: f64,
}

impl Default for GrowthInputs {
    fn default() -> Self {
        Self {
            model: GrowthModel::Compounding,
            revenue_growth_percent: 3.0,
            opex_inflation_percent: 5.0,
        }
    }
}

/// Financing terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancingInputs {
    pub asset_ownership: AssetOwnership,

    /// Share of capex funded by the loan (%); ignored when leasing
    pub loan_percent_of_capex: f64,

    /// Loan tenure in years (>= 1)
    pub loan_term_years: u32,

    /// Annual loan interest rate (%)
    pub annual_interest_rate_percent: f64,
}

impl Default for FinancingInputs {
    fn default() -> Self {
        Self {
            asset_ownership: AssetOwnership::Purchase,
            loan_percent_of_capex: 50.0,
            loan_term_years: 5,
            annual_interest_rate_percent: 10.0,
        }
    }
}

/// Projection horizon and discounting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HorizonInputs {
    /// Number of projected years (>= 1)
    pub years: u32,

    /// Discount rate for NPV (%)
    pub discount_rate_percent: f64,
}

impl Default for HorizonInputs {
    fn default() -> Self {
        Self {
            years: 10,
            discount_rate_percent: 10.0,
        }
    }
}

/// Complete input set for one projection
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationInputs {
    pub station: StationProfile,
    pub usage: Usage,
    pub costs: CostInputs,
    pub energy: EnergyMix,

    /// Selling price per kWh; falls back to the charger type's default
    pub price_per_kwh: Option<f64>,

    pub growth: GrowthInputs,
    pub financing: FinancingInputs,
    pub horizon: HorizonInputs,

    /// Explicit energy cost model; inferred from `energy.unit_costs` when unset
    pub cost_model: Option<CostModel>,
}

impl StationInputs {
    /// Selling price per kWh, resolving the charger-type default
    pub fn price_per_kwh(&self) -> f64 {
        self.price_per_kwh
            .unwrap_or_else(|| self.station.charger_type.default_price_per_kwh())
    }

    /// Cost model requested by these inputs
    ///
    /// An explicit selection wins. Otherwise supplying unit costs selects the
    /// energy-mix model.
    pub fn requested_cost_model(&self) -> CostModel {
        match (self.cost_model, self.energy.unit_costs) {
            (Some(model), _) => model,
            (None, Some(_)) => CostModel::EnergyMix,
            (None, None) => CostModel::RevenueProxy,
        }
    }

    /// Charging sessions over a full year
    pub fn sessions_per_year(&self) -> f64 {
        f64::from(self.usage.sessions_per_day) * DAYS_PER_YEAR
    }

    /// Energy delivered over a full year in kWh
    pub fn annual_energy_kwh(&self) -> f64 {
        self.sessions_per_year() * self.usage.avg_kwh_per_session
    }
}
