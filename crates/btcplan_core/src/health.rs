//! Plan health: funding ratio, post-retirement runway and a composite score.

use crate::model::{
    FUNDING_RATIO_CAP, HealthScore, ProjectionResult, RetirementRequirement, Runway,
};

/// Derive the health score from a projection and its requirement.
///
/// The funding ratio compares projected to required BTC at the retirement
/// date (quantity and value ratios coincide there). Runway counts the
/// post-retirement years the depletion schedule stays funded; a balance that
/// never reaches zero before the life expectancy reports `Indefinite`.
#[must_use]
pub fn health_score(
    projection: &ProjectionResult,
    requirement: &RetirementRequirement,
) -> HealthScore {
    let funding_ratio = if requirement.required_btc <= 0.0 {
        FUNDING_RATIO_CAP
    } else {
        (requirement.projected_btc_at_retirement / requirement.required_btc).min(FUNDING_RATIO_CAP)
    };

    HealthScore {
        funding_ratio,
        runway: runway(projection),
        score: composite_score(funding_ratio),
    }
}

/// Walk the post-retirement depletion schedule and count funded years until
/// the balance first hits zero.
fn runway(projection: &ProjectionResult) -> Runway {
    let mut funded = 0u32;
    for year in projection.post_retirement() {
        if year.btc_holdings <= 0.0 {
            return Runway::Years(funded);
        }
        funded += 1;
    }
    Runway::Indefinite
}

/// 0-100 score: 100 at a funding ratio of 2 or better, linear below
fn composite_score(funding_ratio: f64) -> u8 {
    (50.0 * funding_ratio).clamp(0.0, 100.0).round() as u8
}
