use serde::{Deserialize, Serialize};

use crate::model::{GrowthDistribution, GrowthModel};

/// Monthly contribution, denominated either directly in BTC or in currency
/// units converted at each projection year's price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Contribution {
    Btc(f64),
    Fiat(f64),
}

impl Contribution {
    /// The raw amount regardless of denomination, for range checks
    #[must_use]
    pub fn amount(&self) -> f64 {
        match self {
            Contribution::Btc(a) | Contribution::Fiat(a) => *a,
        }
    }
}

impl Default for Contribution {
    fn default() -> Self {
        Contribution::Fiat(0.0)
    }
}

/// Raw, unvalidated plan fields as supplied by the caller.
///
/// Rates are fractional (0.05 = 5% per year). Exactly one of
/// `fixed_growth_rate` / `growth_distribution` must be set; the validator
/// rejects anything else. Build a [`RetirementPlan`] via
/// [`validate`](crate::validate::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanInput {
    pub current_age: u8,
    pub retirement_age: u8,
    pub life_expectancy: u8,
    /// BTC currently held
    pub current_holdings_btc: f64,
    pub monthly_contribution: Contribution,
    pub fixed_growth_rate: Option<f64>,
    pub growth_distribution: Option<GrowthDistribution>,
    pub annual_inflation_rate: f64,
    /// Retirement spending target per month, in today's currency units
    pub monthly_spending: f64,
    /// Externally supplied spot price, currency units per BTC
    pub current_btc_price: f64,
}

impl Default for PlanInput {
    fn default() -> Self {
        Self {
            current_age: 21,
            retirement_age: 67,
            life_expectancy: 85,
            current_holdings_btc: 0.1,
            monthly_contribution: Contribution::Fiat(500.0),
            fixed_growth_rate: Some(0.21),
            growth_distribution: None,
            annual_inflation_rate: 0.05,
            monthly_spending: 5_000.0,
            current_btc_price: 100_000.0,
        }
    }
}

/// A validated retirement plan.
///
/// Invariants (enforced at construction, relied on everywhere downstream):
/// `current_age < retirement_age <= life_expectancy`, all monetary and
/// quantity fields finite and non-negative, price strictly positive, and
/// exactly one growth mode active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetirementPlan {
    pub current_age: u8,
    pub retirement_age: u8,
    pub life_expectancy: u8,
    pub current_holdings_btc: f64,
    pub monthly_contribution: Contribution,
    pub growth: GrowthModel,
    pub annual_inflation_rate: f64,
    pub monthly_spending: f64,
    pub current_btc_price: f64,
}

impl RetirementPlan {
    /// Accumulation years before retirement
    #[must_use]
    pub fn years_to_retirement(&self) -> u32 {
        u32::from(self.retirement_age - self.current_age)
    }

    /// Drawdown years after retirement
    #[must_use]
    pub fn retirement_years(&self) -> u32 {
        u32::from(self.life_expectancy - self.retirement_age)
    }

    /// Number of projected years, from `current_age` through
    /// `life_expectancy` inclusive
    #[must_use]
    pub fn horizon_years(&self) -> u32 {
        u32::from(self.life_expectancy - self.current_age) + 1
    }

    /// A copy of this plan with an extra fiat monthly contribution.
    ///
    /// BTC-denominated contributions are bumped by the extra amount converted
    /// at today's price, so the suggestion stays comparable across plans.
    #[must_use]
    pub fn with_additional_contribution(&self, fiat_per_month: f64) -> RetirementPlan {
        let mut plan = self.clone();
        plan.monthly_contribution = match self.monthly_contribution {
            Contribution::Fiat(m) => Contribution::Fiat(m + fiat_per_month),
            Contribution::Btc(b) => Contribution::Btc(b + fiat_per_month / self.current_btc_price),
        };
        plan
    }

    /// A copy of this plan retiring `years` later, or `None` if the delayed
    /// retirement would pass the life expectancy.
    #[must_use]
    pub fn with_delayed_retirement(&self, years: u8) -> Option<RetirementPlan> {
        let delayed = self.retirement_age.checked_add(years)?;
        if delayed > self.life_expectancy {
            return None;
        }
        let mut plan = self.clone();
        plan.retirement_age = delayed;
        Some(plan)
    }
}
