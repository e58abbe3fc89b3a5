//! Loan amortization and lease payments

use serde::{Deserialize, Serialize};

use crate::inputs::{AssetOwnership, FinancingInputs};

/// Fixed annual payment amortizing `principal` over `years` at `annual_rate`
///
/// `annual_rate` is a decimal (0.10 = 10%). A zero rate spreads the
/// principal evenly; a zero term or principal yields no payment.
pub fn annuity_payment(principal: f64, annual_rate: f64, years: u32) -> f64 {
    if years == 0 || principal == 0.0 {
        return 0.0;
    }
    let n = f64::from(years);
    if annual_rate == 0.0 {
        principal / n
    } else {
        annual_rate * principal / (1.0 - (1.0 + annual_rate).powf(-n))
    }
}

/// Financing cash outflows for the whole projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancingSchedule {
    /// Portion of capex funded by debt
    pub loan_amount: f64,

    /// Portion of capex funded by the owner
    pub equity_amount: f64,

    /// Loan payment for each year inside the loan term
    pub annual_loan_payment: f64,

    /// Lease payment charged every projected year
    pub annual_lease_payment: f64,

    pub loan_term_years: u32,
}

impl FinancingSchedule {
    /// Build the schedule for a station costing `capex`
    ///
    /// Leasing replaces the loan entirely: the lease costs `lease_rate` of
    /// capex per year and no debt is raised.
    pub fn new(financing: &FinancingInputs, capex: f64, lease_rate: f64) -> Self {
        match financing.asset_ownership {
            AssetOwnership::Purchase => {
                let loan_amount = capex * financing.loan_percent_of_capex / 100.0;
                let annual_loan_payment = annuity_payment(
                    loan_amount,
                    financing.annual_interest_rate_percent / 100.0,
                    financing.loan_term_years,
                );
                Self {
                    loan_amount,
                    equity_amount: capex - loan_amount,
                    annual_loan_payment,
                    annual_lease_payment: 0.0,
                    loan_term_years: financing.loan_term_years,
                }
            }
            AssetOwnership::Lease => Self {
                loan_amount: 0.0,
                equity_amount: capex,
                annual_loan_payment: 0.0,
                annual_lease_payment: capex * lease_rate,
                loan_term_years: 0,
            },
        }
    }

    /// Loan payment due in a projection year (1-indexed)
    pub fn loan_payment(&self, year: u32) -> f64 {
        if year >= 1 && year <= self.loan_term_years {
            self.annual_loan_payment
        } else {
            0.0
        }
    }
}
