//! Vectorized year-by-year holdings projection.
//!
//! The full trajectory is produced in one pass: a cumulative product builds
//! the price series, then a single fold walks holdings across it. The same
//! fold, fed per-path sampled rates, backs the Monte Carlo simulator.
//!
//! Year convention: entry 0 is the current age. Pre-retirement years add the
//! year's contribution at that year's price; the retirement-age entry records
//! the holdings the plan arrives with; withdrawals run over the following
//! years through the life expectancy, clamped at zero.

use crate::model::{Contribution, ProjectionResult, ProjectionYear, RetirementPlan};

/// Project the deterministic trajectory of a plan.
///
/// Uses the plan's expected annual growth rate for every year; there is no
/// randomness on this path, so identical inputs yield bit-identical results.
#[must_use]
pub fn project(plan: &RetirementPlan) -> ProjectionResult {
    let rates = vec![plan.growth.expected_rate(); plan.horizon_years() as usize];
    project_with_rates(plan, &rates)
}

/// Project a plan along an explicit per-year growth-rate path.
///
/// `annual_rates[i]` is the growth applied between year `i` and year `i + 1`;
/// at most `horizon_years - 1` entries are consumed.
#[must_use]
pub fn project_with_rates(plan: &RetirementPlan, annual_rates: &[f64]) -> ProjectionResult {
    let n = plan.horizon_years() as usize;
    debug_assert!(
        annual_rates.len() + 1 >= n,
        "rate path covers {} of the {} year-over-year steps",
        annual_rates.len(),
        n - 1
    );
    let inflation = plan.annual_inflation_rate;

    // Cumulative price series: price[0] is today's price
    let prices: Vec<f64> = std::iter::once(plan.current_btc_price)
        .chain(annual_rates.iter().scan(plan.current_btc_price, |p, r| {
            *p *= 1.0 + r;
            Some(*p)
        }))
        .take(n)
        .collect();

    let annual_expense_at_retirement = plan.monthly_spending
        * 12.0
        * (1.0 + inflation).powi(plan.years_to_retirement() as i32);

    let mut years = Vec::with_capacity(n);
    let mut holdings = plan.current_holdings_btc;
    let mut spending_need = plan.monthly_spending * 12.0;
    let mut annual_expense = annual_expense_at_retirement;

    for (year_index, &price) in prices.iter().enumerate() {
        let age = plan.current_age + year_index as u8;
        if age < plan.retirement_age {
            holdings += yearly_contribution_btc(plan.monthly_contribution, price);
        } else if age > plan.retirement_age {
            // Expenses keep inflating past the retirement date, so each
            // withdrawal matches that year's spending need and the depletion
            // schedule sums to the solver's retirement bill
            annual_expense *= 1.0 + inflation;
            holdings = (holdings - annual_expense / price).max(0.0);
        }
        years.push(ProjectionYear {
            age,
            year_index: year_index as u32,
            btc_holdings: holdings,
            nominal_value: holdings * price,
            spending_need,
        });
        spending_need *= 1.0 + inflation;
    }

    ProjectionResult {
        retirement_age: plan.retirement_age,
        years,
    }
}

/// Holdings value at the retirement date along an explicit growth-rate path,
/// in currency units.
///
/// Same accumulation logic as [`project_with_rates`], folded without
/// materializing the per-year records; the Monte Carlo hot loop only needs
/// this single number. `annual_rates` must cover `years_to_retirement`
/// entries.
#[must_use]
pub fn value_at_retirement(plan: &RetirementPlan, annual_rates: &[f64]) -> f64 {
    let mut holdings = plan.current_holdings_btc;
    let mut price = plan.current_btc_price;
    for &rate in annual_rates
        .iter()
        .take(plan.years_to_retirement() as usize)
    {
        holdings += yearly_contribution_btc(plan.monthly_contribution, price);
        price *= 1.0 + rate;
    }
    holdings * price
}

/// One year of contributions expressed in BTC at the given price
#[inline]
fn yearly_contribution_btc(contribution: Contribution, price: f64) -> f64 {
    match contribution {
        Contribution::Btc(monthly) => monthly * 12.0,
        Contribution::Fiat(monthly) => monthly * 12.0 / price,
    }
}
