//! Bitcoin retirement planning engine
//!
//! Pure calculation core for a Bitcoin-denominated retirement plan:
//! - input validation with field-identified errors
//! - future-value / required-BTC solving with zero-rate special cases
//! - deterministic year-by-year holdings projection
//! - Monte Carlo success-probability simulation with seeded, reproducible
//!   sampling and an optional remediation suggestion
//! - funding-ratio / runway health scoring
//!
//! The engine holds no process-wide state: every input arrives as an
//! explicit parameter and every output is a returned value. Callers own
//! price fetching, caching and rendering.
//!
//! ```ignore
//! use btcplan_core::{PlannerConfig, SimulationConfig, evaluate_plan};
//! use btcplan_core::model::PlanInput;
//!
//! let input = PlanInput {
//!     current_age: 30,
//!     retirement_age: 65,
//!     life_expectancy: 90,
//!     current_btc_price: 60_000.0,
//!     ..PlanInput::default()
//! };
//! let evaluation = evaluate_plan(&input, &PlannerConfig::default(), &SimulationConfig::default())?;
//! println!("success: {:.1}%", evaluation.simulation.success_probability * 100.0);
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod health;
pub mod model;
pub mod optimize;
pub mod projection;
pub mod simulation;
pub mod solver;
pub mod validate;

#[cfg(test)]
mod tests;

pub use config::{PlannerConfig, RemediationPolicy};
pub use error::{ComputationError, PlanError, ValidationError};
pub use simulation::SimulationConfig;

use serde::Serialize;

use crate::model::{
    HealthScore, PlanInput, ProjectionResult, RetirementPlan, RetirementRequirement,
    SimulationResult,
};

/// Everything the engine computes for one plan in one pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEvaluation {
    pub plan: RetirementPlan,
    pub requirement: RetirementRequirement,
    pub projection: ProjectionResult,
    pub health: HealthScore,
    pub simulation: SimulationResult,
}

/// Validate a raw plan and run the full evaluation: solver, projection,
/// health score and Monte Carlo simulation.
pub fn evaluate_plan(
    input: &PlanInput,
    config: &PlannerConfig,
    sim: &SimulationConfig,
) -> Result<PlanEvaluation, PlanError> {
    let plan = validate::validate(input, config)?;
    let requirement = solver::solve(&plan)?;
    let projection = projection::project(&plan);
    let health = health::health_score(&projection, &requirement);
    let simulation = simulation::monte_carlo(&plan, &requirement, sim, config)?;
    Ok(PlanEvaluation {
        plan,
        requirement,
        projection,
        health,
        simulation,
    })
}
