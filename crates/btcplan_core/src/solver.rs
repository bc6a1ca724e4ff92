//! Future-value / required-BTC solver.
//!
//! Compounds the contribution stream to the retirement date, inflates the
//! spending target, and converts the total retirement bill into a BTC
//! quantity at the projected retirement-date price. Zero-rate cases take
//! additive branches so no geometric-series formula ever divides by zero.

use crate::error::ComputationError;
use crate::model::{Contribution, RetirementPlan, RetirementRequirement};

/// Future value of a monthly contribution stream after `years`, compounded
/// monthly at `annual_rate` (annuity-due: each contribution grows from the
/// start of its month).
///
/// A zero rate degenerates to plain linear accumulation.
#[must_use]
pub fn future_value_of_contributions(monthly: f64, years: u32, annual_rate: f64) -> f64 {
    if annual_rate == 0.0 {
        return monthly * 12.0 * f64::from(years);
    }
    let monthly_rate = annual_rate / 12.0;
    let periods = f64::from(years * 12);
    monthly * (((1.0 + monthly_rate).powf(periods) - 1.0) / monthly_rate) * (1.0 + monthly_rate)
}

/// Sum of `years` annual expenses starting at `annual_expense` and growing
/// with inflation each year (annuity-due). Zero inflation degenerates to the
/// plain product.
#[must_use]
pub fn total_inflated_expenses(annual_expense: f64, years: u32, inflation_rate: f64) -> f64 {
    if inflation_rate == 0.0 {
        return annual_expense * f64::from(years);
    }
    annual_expense
        * (((1.0 + inflation_rate).powf(f64::from(years)) - 1.0) / inflation_rate)
        * (1.0 + inflation_rate)
}

/// Solve a plan for its retirement requirement.
///
/// Randomized plans are solved at the distribution's expected annual rate;
/// the Monte Carlo simulator owns the distributional view.
pub fn solve(plan: &RetirementPlan) -> Result<RetirementRequirement, ComputationError> {
    let growth = plan.growth.expected_rate();
    let years_to_retirement = plan.years_to_retirement();

    let inflation_factor =
        (1.0 + plan.annual_inflation_rate).powi(years_to_retirement as i32);
    let annual_expense_at_retirement = plan.monthly_spending * 12.0 * inflation_factor;
    let total_retirement_expenses = total_inflated_expenses(
        annual_expense_at_retirement,
        plan.retirement_years(),
        plan.annual_inflation_rate,
    );

    let projected_price_at_retirement =
        plan.current_btc_price * (1.0 + growth).powi(years_to_retirement as i32);

    // A zero spending target needs zero BTC regardless of price
    let required_btc = if total_retirement_expenses == 0.0 {
        0.0
    } else {
        total_retirement_expenses / projected_price_at_retirement
    };

    let (contribution_value_at_retirement, btc_from_contributions) = match plan.monthly_contribution
    {
        Contribution::Fiat(monthly) => {
            let value = future_value_of_contributions(monthly, years_to_retirement, growth);
            (value, value / projected_price_at_retirement)
        }
        Contribution::Btc(monthly) => {
            let quantity = monthly * 12.0 * f64::from(years_to_retirement);
            (quantity * projected_price_at_retirement, quantity)
        }
    };
    let projected_btc_at_retirement = plan.current_holdings_btc + btc_from_contributions;

    let requirement = RetirementRequirement {
        required_btc,
        projected_price_at_retirement,
        annual_expense_at_retirement,
        total_retirement_expenses,
        contribution_value_at_retirement,
        projected_btc_at_retirement,
    };
    check_finite(&requirement)?;
    Ok(requirement)
}

fn check_finite(requirement: &RetirementRequirement) -> Result<(), ComputationError> {
    let checks = [
        ("required_btc", requirement.required_btc),
        (
            "projected_price_at_retirement",
            requirement.projected_price_at_retirement,
        ),
        (
            "annual_expense_at_retirement",
            requirement.annual_expense_at_retirement,
        ),
        (
            "total_retirement_expenses",
            requirement.total_retirement_expenses,
        ),
        (
            "contribution_value_at_retirement",
            requirement.contribution_value_at_retirement,
        ),
        (
            "projected_btc_at_retirement",
            requirement.projected_btc_at_retirement,
        ),
    ];
    for (quantity, value) in checks {
        if !value.is_finite() {
            return Err(ComputationError::NonFinite { quantity, value });
        }
    }
    Ok(())
}
