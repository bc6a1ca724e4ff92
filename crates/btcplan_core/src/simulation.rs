//! Monte Carlo plan simulation.
//!
//! Each path draws independent annual growth rates from the plan's growth
//! model, accumulates holdings with the projection fold, and succeeds when
//! its retirement-date value covers the solver's required funding amount.
//!
//! Paths are grouped into fixed-size batches; each batch derives its path
//! seeds from its own `SmallRng`, so results are reproducible for a given
//! master seed and identical with or without the `parallel` feature.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::config::PlannerConfig;
use crate::error::ComputationError;
use crate::model::{RetirementPlan, RetirementRequirement, SimulationResult};
use crate::optimize::suggest_remediation;
use crate::projection::value_at_retirement;

const BATCH_SIZE: usize = 100;

/// Per-run simulation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Requested path count; 0 means the planner's `default_samples`, and
    /// anything above `max_samples` is clamped
    pub samples: usize,
    /// Master seed; fixed seed gives reproducible results
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            samples: 1_000,
            seed: 42,
        }
    }
}

/// Run the Monte Carlo simulation for a validated plan.
///
/// When the success probability lands below the planner's target, the
/// remediation search runs with the same seed and sample count and its
/// suggestion (if any) is attached to the result.
pub fn monte_carlo(
    plan: &RetirementPlan,
    requirement: &RetirementRequirement,
    sim: &SimulationConfig,
    config: &PlannerConfig,
) -> Result<SimulationResult, ComputationError> {
    let requested = if sim.samples == 0 {
        config.default_samples
    } else {
        sim.samples
    };
    let samples = requested.clamp(1, config.max_samples.max(1));
    let success_probability = success_probability(
        plan,
        requirement.total_retirement_expenses,
        samples,
        sim.seed,
    )?;

    let suggestion = if success_probability < config.target_success_probability {
        suggest_remediation(plan, requirement, config, samples, sim.seed)?
    } else {
        None
    };

    Ok(SimulationResult {
        success_probability,
        sample_count: samples,
        suggestion,
    })
}

/// Fraction of paths whose retirement-date holdings value meets or exceeds
/// `required_value`.
///
/// A zero requirement trivially succeeds on every path.
pub fn success_probability(
    plan: &RetirementPlan,
    required_value: f64,
    samples: usize,
    seed: u64,
) -> Result<f64, ComputationError> {
    let samples = samples.max(1);
    if required_value <= 0.0 {
        return Ok(1.0);
    }

    let horizon = plan.years_to_retirement() as usize;
    let num_batches = samples.div_ceil(BATCH_SIZE);

    let run_batch = |batch: usize| -> Result<usize, ComputationError> {
        let mut seed_rng = SmallRng::seed_from_u64(seed.wrapping_add(batch as u64));
        let batch_size = if batch == num_batches - 1 {
            samples - batch * BATCH_SIZE
        } else {
            BATCH_SIZE
        };

        let mut successes = 0;
        for _ in 0..batch_size {
            let mut path_rng = SmallRng::seed_from_u64(seed_rng.next_u64());
            let rates = plan.growth.sample_path(&mut path_rng, horizon)?;
            if value_at_retirement(plan, &rates) >= required_value {
                successes += 1;
            }
        }
        Ok(successes)
    };

    #[cfg(feature = "parallel")]
    let successes: usize = (0..num_batches)
        .into_par_iter()
        .map(run_batch)
        .try_reduce(|| 0, |a, b| Ok(a + b))?;

    #[cfg(not(feature = "parallel"))]
    let successes: usize = (0..num_batches).map(run_batch).try_fold(
        0usize,
        |acc, batch| -> Result<usize, ComputationError> { Ok(acc + batch?) },
    )?;

    Ok(successes as f64 / samples as f64)
}
