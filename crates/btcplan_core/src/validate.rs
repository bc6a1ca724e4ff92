//! Input validation: turns raw [`PlanInput`] fields into a [`RetirementPlan`]
//! or fails with a field-identified [`ValidationError`].

use crate::config::PlannerConfig;
use crate::error::ValidationError;
use crate::model::{GrowthDistribution, GrowthModel, MIN_ANNUAL_RETURN, PlanInput, RetirementPlan};

/// Validate raw plan fields against the configured admissible ranges.
///
/// No computation is attempted on invalid input; the first violation found
/// is returned. Checks run field by field in declaration order so error
/// messages are stable.
pub fn validate(
    input: &PlanInput,
    config: &PlannerConfig,
) -> Result<RetirementPlan, ValidationError> {
    check_age("current_age", input.current_age, config)?;
    check_age("retirement_age", input.retirement_age, config)?;
    check_age("life_expectancy", input.life_expectancy, config)?;

    if input.retirement_age <= input.current_age {
        return Err(ValidationError::AgeOrdering {
            field: "retirement_age",
            value: input.retirement_age,
            other_field: "current_age",
            other_value: input.current_age,
        });
    }
    if input.life_expectancy < input.retirement_age {
        return Err(ValidationError::AgeOrdering {
            field: "life_expectancy",
            value: input.life_expectancy,
            other_field: "retirement_age",
            other_value: input.retirement_age,
        });
    }

    check_non_negative("current_holdings_btc", input.current_holdings_btc)?;
    if input.current_holdings_btc > config.max_holdings_btc {
        return Err(ValidationError::OutOfRange {
            field: "current_holdings_btc",
            value: input.current_holdings_btc,
            min: 0.0,
            max: config.max_holdings_btc,
        });
    }
    check_non_negative("monthly_contribution", input.monthly_contribution.amount())?;
    check_non_negative("annual_inflation_rate", input.annual_inflation_rate)?;
    check_non_negative("monthly_spending", input.monthly_spending)?;

    if !input.current_btc_price.is_finite() || input.current_btc_price <= 0.0 {
        return Err(ValidationError::NonPositivePrice {
            value: input.current_btc_price,
        });
    }

    let growth = match (input.fixed_growth_rate, &input.growth_distribution) {
        (Some(_), Some(_)) => return Err(ValidationError::GrowthModeConflict),
        (None, None) => return Err(ValidationError::GrowthModeMissing),
        (Some(rate), None) => {
            if !rate.is_finite() {
                return Err(ValidationError::NotFinite {
                    field: "fixed_growth_rate",
                    value: rate,
                });
            }
            if rate < MIN_ANNUAL_RETURN {
                return Err(ValidationError::OutOfRange {
                    field: "fixed_growth_rate",
                    value: rate,
                    min: MIN_ANNUAL_RETURN,
                    max: f64::INFINITY,
                });
            }
            GrowthModel::Fixed { rate }
        }
        (None, Some(distribution)) => {
            check_distribution(distribution)?;
            GrowthModel::Random {
                distribution: distribution.clone(),
            }
        }
    };

    Ok(RetirementPlan {
        current_age: input.current_age,
        retirement_age: input.retirement_age,
        life_expectancy: input.life_expectancy,
        current_holdings_btc: input.current_holdings_btc,
        monthly_contribution: input.monthly_contribution,
        growth,
        annual_inflation_rate: input.annual_inflation_rate,
        monthly_spending: input.monthly_spending,
        current_btc_price: input.current_btc_price,
    })
}

fn check_age(field: &'static str, value: u8, config: &PlannerConfig) -> Result<(), ValidationError> {
    if value < config.min_age || value > config.max_age {
        return Err(ValidationError::OutOfRange {
            field,
            value: f64::from(value),
            min: f64::from(config.min_age),
            max: f64::from(config.max_age),
        });
    }
    Ok(())
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(())
}

/// Reject distribution parameters the sampler could not construct, so bad
/// configuration surfaces as a validation error instead of mid-simulation.
fn check_distribution(distribution: &GrowthDistribution) -> Result<(), ValidationError> {
    let check_finite = |field: &'static str, value: f64| {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ValidationError::InvalidGrowthDistribution {
                field,
                value,
                reason: "parameter must be finite",
            })
        }
    };
    let check_std_dev = |field: &'static str, value: f64| {
        check_finite(field, value)?;
        if value < 0.0 {
            return Err(ValidationError::InvalidGrowthDistribution {
                field,
                value,
                reason: "std_dev must be non-negative",
            });
        }
        Ok(())
    };

    match distribution {
        GrowthDistribution::Normal { mean, std_dev }
        | GrowthDistribution::LogNormal { mean, std_dev } => {
            check_finite("mean", *mean)?;
            check_std_dev("std_dev", *std_dev)?;
        }
        GrowthDistribution::RegimeMix {
            bull_mean,
            bull_std_dev,
            bear_mean,
            bear_std_dev,
            bull_prob,
        } => {
            check_finite("bull_mean", *bull_mean)?;
            check_std_dev("bull_std_dev", *bull_std_dev)?;
            check_finite("bear_mean", *bear_mean)?;
            check_std_dev("bear_std_dev", *bear_std_dev)?;
            check_finite("bull_prob", *bull_prob)?;
            if !(0.0..=1.0).contains(bull_prob) {
                return Err(ValidationError::InvalidGrowthDistribution {
                    field: "bull_prob",
                    value: *bull_prob,
                    reason: "bull_prob must be within [0, 1]",
                });
            }
        }
    }
    Ok(())
}
