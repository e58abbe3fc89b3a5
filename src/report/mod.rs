//! Tabular and text output for projection results

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::projection::ProjectionResult;

/// Marker printed for undefined metrics
pub const NOT_AVAILABLE: &str = "N/A";

/// One row of the exported cash-flow table
///
/// Year 0 carries the capex outflow with all operating columns at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CashflowRow {
    pub year: u32,
    pub revenue: f64,
    pub opex: f64,
    pub energy_cost: f64,
    pub loan_payment: f64,
    pub lease_payment: f64,
    pub cost: f64,
    pub net_cash_flow: f64,
    pub cumulative_cash_flow: f64,
}

/// Flatten a projection into table rows, year 0 first
pub fn cashflow_rows(result: &ProjectionResult) -> Vec<CashflowRow> {
    let mut rows = Vec::with_capacity(result.cash_flows.len());
    rows.push(CashflowRow {
        year: 0,
        revenue: 0.0,
        opex: 0.0,
        energy_cost: 0.0,
        loan_payment: 0.0,
        lease_payment: 0.0,
        cost: 0.0,
        net_cash_flow: result.cash_flows.first().copied().unwrap_or(0.0),
        cumulative_cash_flow: result.cumulative_cash_flows.first().copied().unwrap_or(0.0),
    });
    for (row, cumulative) in result
        .yearly_breakdown
        .iter()
        .zip(result.cumulative_cash_flows.iter().skip(1))
    {
        rows.push(CashflowRow {
            year: row.year,
            revenue: row.revenue,
            opex: row.opex,
            energy_cost: row.energy_cost,
            loan_payment: row.loan_payment,
            lease_payment: row.lease_payment,
            cost: row.cost,
            net_cash_flow: row.net_cash_flow,
            cumulative_cash_flow: *cumulative,
        });
    }
    rows
}

/// Write the cash-flow table as CSV with a header row
pub fn write_cashflow_csv<W: Write>(result: &ProjectionResult, writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in cashflow_rows(result) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Format a money amount with thousands separators and no decimals
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn format_optional(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.precision$}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Headline metrics block, rendered through `Display`
pub struct Summary<'a>(pub &'a ProjectionResult);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metrics = &self.0.metrics;
        writeln!(f, "Financial Summary:")?;
        writeln!(f, "  NPV:                 {}", format_amount(metrics.npv))?;
        writeln!(f, "  IRR (%):             {}", format_optional(metrics.irr_percent(), 2))?;
        match metrics.payback_period_years {
            Some(years) => writeln!(f, "  Payback Period:      {years} years")?,
            None => writeln!(f, "  Payback Period:      Not achieved")?,
        }
        writeln!(
            f,
            "  Profitability Index: {}",
            format_optional(metrics.profitability_index, 2)
        )?;
        writeln!(
            f,
            "  Breakeven Price/kWh: {}",
            format_optional(metrics.breakeven_price_per_kwh, 2)
        )?;

        let derived = &self.0.derived;
        writeln!(f, "\nAssumptions:")?;
        writeln!(f, "  Sessions/year:       {}", format_amount(derived.sessions_per_year))?;
        writeln!(f, "  Energy/year (kWh):   {}", format_amount(derived.annual_energy_kwh))?;
        writeln!(f, "  Base revenue:        {}", format_amount(derived.base_revenue))?;
        writeln!(f, "  Energy cost model:   {:?}", derived.cost_model)?;
        if let Some(unit_cost) = derived.energy_unit_cost {
            writeln!(f, "  Energy cost/kWh:     {unit_cost:.2}")?;
        }
        let financing = &derived.financing;
        writeln!(f, "  Loan / equity:       {} / {}",
            format_amount(financing.loan_amount), format_amount(financing.equity_amount))?;
        writeln!(f, "  Loan payment/year:   {}", format_amount(financing.annual_loan_payment))?;
        writeln!(f, "  Lease payment/year:  {}", format_amount(financing.annual_lease_payment))
    }
}

/// Fixed-width cash-flow table, rendered through `Display`
pub struct CashflowTable<'a>(pub &'a ProjectionResult);

impl fmt::Display for CashflowTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<6} {:>16} {:>16} {:>16} {:>16}",
            "Year", "Revenue", "Cost", "Cash Flow", "Cumulative"
        )?;
        for row in cashflow_rows(self.0) {
            writeln!(
                f,
                "{:<6} {:>16} {:>16} {:>16} {:>16}",
                row.year,
                format_amount(row.revenue),
                format_amount(row.cost),
                format_amount(row.net_cash_flow),
                format_amount(row.cumulative_cash_flow)
            )?;
        }
        Ok(())
    }
}

pub fn summary(result: &ProjectionResult) -> String {
    Summary(result).to_string()
}

pub fn cashflow_table(result: &ProjectionResult) -> String {
    CashflowTable(result).to_string()
}
