//! Engine configuration: admissible input ranges, Monte Carlo defaults and
//! the remediation search policy.

use serde::{Deserialize, Serialize};

/// Total Bitcoin that will ever exist; upper bound on holdings
pub const MAX_HOLDINGS_BTC: f64 = 21_000_000.0;

/// Configuration for the planning engine.
///
/// All knobs the caller may want to turn live here; the engine itself holds
/// no process-wide state. Defaults match the planner's published tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Minimum admissible age for any age field
    pub min_age: u8,
    /// Maximum admissible age for any age field
    pub max_age: u8,
    /// Upper bound on current holdings, in BTC
    pub max_holdings_btc: f64,
    /// Monte Carlo sample count used when the caller does not specify one
    pub default_samples: usize,
    /// Hard cap on the Monte Carlo sample count, to keep latency bounded
    pub max_samples: usize,
    /// Success probability at or above which a plan needs no remediation
    pub target_success_probability: f64,
    /// Policy for the remediation search run on under-target plans
    pub remediation: RemediationPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_age: 18,
            max_age: 120,
            max_holdings_btc: MAX_HOLDINGS_BTC,
            default_samples: 1_000,
            max_samples: 10_000,
            target_success_probability: 0.90,
            remediation: RemediationPolicy::default(),
        }
    }
}

/// Step policy for the remediation search.
///
/// The search grows an additional monthly contribution geometrically until
/// the target success probability is bracketed, then refines by bisection.
/// Both the bracketing bound and the step schedule are configuration, not
/// hard-coded behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationPolicy {
    /// First additional monthly contribution tried, in currency units
    pub initial_step: f64,
    /// Multiplier applied to the step on each bracketing iteration
    pub step_factor: f64,
    /// Maximum total simulation evaluations across bracketing and refinement
    pub max_evaluations: u32,
    /// Largest additional monthly contribution the search will suggest
    pub max_additional_contribution: f64,
    /// Largest retirement delay, in years, the fallback search will suggest
    pub max_delay_years: u8,
    /// Refinement stops once the bracket is narrower than this, in currency units
    pub granularity: f64,
}

impl Default for RemediationPolicy {
    fn default() -> Self {
        Self {
            initial_step: 50.0,
            step_factor: 2.0,
            max_evaluations: 32,
            max_additional_contribution: 500_000.0,
            max_delay_years: 10,
            granularity: 10.0,
        }
    }
}
