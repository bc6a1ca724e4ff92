//! Value objects: plan inputs, validated plans, growth models and results.
//!
//! Everything here is constructed from inputs, never mutated in place, and
//! discarded after a single calculation pass.

mod growth;
mod plan;
mod results;

pub use growth::{GrowthDistribution, GrowthModel, MIN_ANNUAL_RETURN};
pub use plan::{Contribution, PlanInput, RetirementPlan};
pub use results::{
    FUNDING_RATIO_CAP, HealthScore, ProjectionResult, ProjectionYear, Remediation,
    RetirementRequirement, Runway, SimulationResult,
};
