//! Net present value and internal rate of return

/// Rates at or below this are treated as a total loss; `1 + r` must stay positive
const MIN_RATE: f64 = -0.999_999;

const NEWTON_MAX_ITER: usize = 200;
const BISECTION_MAX_ITER: usize = 500;

/// Net present value of `cash_flows` at `rate` (decimal)
///
/// The first flow is at t = 0 and is not discounted.
pub fn calculate_npv(rate: f64, cash_flows: &[f64]) -> f64 {
    let one_plus_r = 1.0 + rate;
    let mut discount = 1.0;
    let mut npv = 0.0;
    for (t, cf) in cash_flows.iter().enumerate() {
        if t > 0 {
            discount *= one_plus_r;
        }
        npv += cf / discount;
    }
    npv
}

/// NPV and its derivative with respect to the rate
fn npv_and_derivative(rate: f64, cash_flows: &[f64]) -> (f64, f64) {
    let one_plus_r = 1.0 + rate;
    let mut discount = 1.0;
    let mut npv = 0.0;
    let mut dnpv = 0.0;
    for (t, cf) in cash_flows.iter().enumerate() {
        if t > 0 {
            discount *= one_plus_r;
            dnpv -= t as f64 * cf / (discount * one_plus_r);
        }
        npv += cf / discount;
    }
    (npv, dnpv)
}

/// True when the sequence has both a strictly positive and a strictly negative flow
pub fn has_sign_change(cash_flows: &[f64]) -> bool {
    cash_flows.iter().any(|&cf| cf > 0.0) && cash_flows.iter().any(|&cf| cf < 0.0)
}

/// Upper bound on any IRR of `cash_flows`
///
/// With `x = 1/(1+r)` the NPV is a polynomial in `x` whose lowest nonzero
/// coefficient is the first nonzero flow. Cauchy's bound keeps every root at
/// `|x| >= |a0| / (|a0| + max|a_t|)`, so `r <= max|a_t| / |a0|`.
fn max_rate(cash_flows: &[f64]) -> f64 {
    let mut flows = cash_flows.iter().skip_while(|cf| **cf == 0.0);
    let anchor = flows.next().map_or(1.0, |cf| cf.abs());
    let largest = flows.fold(0.0_f64, |acc, cf| acc.max(cf.abs()));
    2.0 * (largest / anchor).max(1.0)
}

/// Internal rate of return as a decimal (0.12 = 12%)
///
/// Returns `None` when the flows never change sign, since no rate can zero
/// the NPV, or when neither solver converges.
pub fn calculate_irr(cash_flows: &[f64]) -> Option<f64> {
    if cash_flows.len() < 2 || !has_sign_change(cash_flows) {
        return None;
    }
    if cash_flows.iter().any(|cf| !cf.is_finite()) {
        return None;
    }

    // NPV near the root is on the order of the first nonzero flow
    let anchor = cash_flows
        .iter()
        .find(|cf| **cf != 0.0)
        .map_or(1.0, |cf| cf.abs());
    let tolerance = anchor * 1e-10;
    let upper = max_rate(cash_flows);

    newton_raphson(cash_flows, tolerance, upper).or_else(|| {
        log::debug!("Newton-Raphson did not converge, falling back to bisection");
        bisection(cash_flows, tolerance, upper)
    })
}

fn newton_raphson(cash_flows: &[f64], tolerance: f64, upper: f64) -> Option<f64> {
    let mut rate = 0.10;
    for _ in 0..NEWTON_MAX_ITER {
        let (npv, dnpv) = npv_and_derivative(rate, cash_flows);
        if npv.abs() <= tolerance {
            return Some(rate);
        }
        if dnpv == 0.0 || !dnpv.is_finite() {
            return None;
        }
        let next = rate - npv / dnpv;
        if !next.is_finite() || next <= MIN_RATE || next > upper {
            return None;
        }
        if (next - rate).abs() <= 1e-12 * next.abs().max(1.0) {
            return Some(next);
        }
        rate = next;
    }
    None
}

/// Bracket a sign change on a widening grid, then bisect
fn bisection(cash_flows: &[f64], tolerance: f64, upper: f64) -> Option<f64> {
    let mut lo = MIN_RATE;
    let mut f_lo = calculate_npv(lo, cash_flows);
    let mut hi = -0.5;
    let mut f_hi = calculate_npv(hi, cash_flows);

    while f_lo.signum() == f_hi.signum() {
        if hi >= upper {
            log::warn!("No IRR bracket found for {} cash flows", cash_flows.len());
            return None;
        }
        lo = hi;
        f_lo = f_hi;
        hi = if hi < 1.0 { hi + 0.5 } else { (hi * 2.0).min(upper) };
        f_hi = calculate_npv(hi, cash_flows);
        if f_hi == 0.0 {
            return Some(hi);
        }
    }

    for _ in 0..BISECTION_MAX_ITER {
        let mid = 0.5 * (lo + hi);
        let f_mid = calculate_npv(mid, cash_flows);
        if f_mid.abs() <= tolerance || (hi - lo) <= 1e-14 * mid.abs().max(1.0) {
            return Some(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    Some(0.5 * (lo + hi))
}
