//! Integration tests for the planning engine
//!
//! Tests are organized by topic:
//! - `validation` - Input validation and field-identified errors
//! - `solver` - Future-value / required-BTC solving
//! - `projection` - Deterministic year-by-year trajectories
//! - `simulation` - Monte Carlo reproducibility and remediation search
//! - `health` - Funding ratio, runway and composite score
//! - `evaluation` - The composed `evaluate_plan` entry point

mod projection;
mod simulation;

use crate::config::PlannerConfig;
use crate::model::{Contribution, PlanInput, RetirementPlan};

/// A plan that is comfortably within every admissible range; individual
/// tests override the fields they care about.
pub(crate) fn base_input() -> PlanInput {
    PlanInput {
        current_age: 30,
        retirement_age: 65,
        life_expectancy: 85,
        current_holdings_btc: 1.5,
        monthly_contribution: Contribution::Fiat(500.0),
        fixed_growth_rate: Some(0.05),
        growth_distribution: None,
        annual_inflation_rate: 0.02,
        monthly_spending: 3_000.0,
        current_btc_price: 30_000.0,
    }
}

pub(crate) fn validated(input: &PlanInput) -> RetirementPlan {
    crate::validate::validate(input, &PlannerConfig::default())
        .expect("test input should validate")
}
