//! Remediation search for under-target plans.
//!
//! Searches one adjustable input at a time for the minimal change that lifts
//! the success probability to the configured target: first an additional
//! fiat monthly contribution (geometric bracketing, then bisection down to
//! the policy granularity), then, if no affordable contribution suffices, a
//! retirement delay of whole years. Every candidate is evaluated with the
//! caller's seed and sample count so suggestions are reproducible.

use crate::config::{PlannerConfig, RemediationPolicy};
use crate::error::ComputationError;
use crate::model::{Remediation, RetirementPlan, RetirementRequirement};
use crate::simulation::success_probability;
use crate::solver;

/// Find the smallest adjustment that reaches the target success probability,
/// or `None` if nothing within the policy bounds does.
pub fn suggest_remediation(
    plan: &RetirementPlan,
    requirement: &RetirementRequirement,
    config: &PlannerConfig,
    samples: usize,
    seed: u64,
) -> Result<Option<Remediation>, ComputationError> {
    let policy = &config.remediation;
    let target = config.target_success_probability;
    let mut evaluations = 0u32;

    if let Some(suggestion) = search_contribution(
        plan,
        requirement,
        policy,
        target,
        samples,
        seed,
        &mut evaluations,
    )? {
        return Ok(Some(suggestion));
    }

    search_delay(plan, policy, target, samples, seed, &mut evaluations)
}

/// Extra monthly contribution does not change the retirement bill, so every
/// candidate is scored against the base requirement.
fn search_contribution(
    plan: &RetirementPlan,
    requirement: &RetirementRequirement,
    policy: &RemediationPolicy,
    target: f64,
    samples: usize,
    seed: u64,
    evaluations: &mut u32,
) -> Result<Option<Remediation>, ComputationError> {
    let required_value = requirement.total_retirement_expenses;
    let evaluate = |evaluations: &mut u32, extra: f64| -> Result<f64, ComputationError> {
        *evaluations += 1;
        let candidate = plan.with_additional_contribution(extra);
        success_probability(&candidate, required_value, samples, seed)
    };

    // Geometric bracketing: grow the step until the target is reached or the
    // cap/iteration budget runs out
    let mut low = 0.0;
    let mut high = policy.initial_step;
    let mut bracket = None;
    while *evaluations < policy.max_evaluations {
        if high > policy.max_additional_contribution {
            break;
        }
        let probability = evaluate(evaluations, high)?;
        if probability >= target {
            bracket = Some((high, probability));
            break;
        }
        low = high;
        high *= policy.step_factor;
    }

    let Some((mut best, mut best_probability)) = bracket else {
        return Ok(None);
    };

    // Bisect down to the minimal sufficient addition
    let mut high = best;
    while high - low > policy.granularity && *evaluations < policy.max_evaluations {
        let mid = f64::midpoint(low, high);
        let probability = evaluate(evaluations, mid)?;
        if probability >= target {
            high = mid;
            best = mid;
            best_probability = probability;
        } else {
            low = mid;
        }
    }

    Ok(Some(Remediation::AdditionalMonthlyContribution {
        fiat_per_month: best,
        achieved_probability: best_probability,
    }))
}

/// Delaying retirement changes the requirement itself (fewer drawdown years,
/// more accumulation), so each candidate is re-solved before scoring.
fn search_delay(
    plan: &RetirementPlan,
    policy: &RemediationPolicy,
    target: f64,
    samples: usize,
    seed: u64,
    evaluations: &mut u32,
) -> Result<Option<Remediation>, ComputationError> {
    for years in 1..=policy.max_delay_years {
        if *evaluations >= policy.max_evaluations {
            break;
        }
        let Some(candidate) = plan.with_delayed_retirement(years) else {
            break;
        };
        *evaluations += 1;
        let candidate_requirement = solver::solve(&candidate)?;
        let probability = success_probability(
            &candidate,
            candidate_requirement.total_retirement_expenses,
            samples,
            seed,
        )?;
        if probability >= target {
            return Ok(Some(Remediation::DelayRetirement {
                years,
                achieved_probability: probability,
            }));
        }
    }
    Ok(None)
}
