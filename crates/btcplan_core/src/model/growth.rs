use rand::Rng;
use rand_distr::Distribution;
use serde::{Deserialize, Serialize};

use crate::error::ComputationError;

/// Floor on any single year's growth rate. A draw below this would send the
/// projected price to zero or negative.
pub const MIN_ANNUAL_RETURN: f64 = -0.99;

/// Shape of the randomized annual growth-rate draws used by the Monte Carlo
/// simulator.
///
/// All rates are fractional (0.21 = 21% per year). Samples are clamped at
/// [`MIN_ANNUAL_RETURN`] so the price path stays positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GrowthDistribution {
    Normal {
        mean: f64,
        std_dev: f64,
    },
    /// `mean`/`std_dev` parameterize the log of the annual growth factor
    LogNormal {
        mean: f64,
        std_dev: f64,
    },
    /// Two-state regime mix: each year is drawn from the bull profile with
    /// probability `bull_prob`, otherwise from the bear profile. Captures the
    /// boom/bust clustering of Bitcoin market cycles.
    RegimeMix {
        bull_mean: f64,
        bull_std_dev: f64,
        bear_mean: f64,
        bear_std_dev: f64,
        bull_prob: f64,
    },
}

impl GrowthDistribution {
    /// Bull/bear regime mix calibrated to historical Bitcoin cycles:
    /// even odds of a bull year at +30% +/- 20% or a bear year at -10% +/- 25%.
    pub const BULL_BEAR_CYCLE: GrowthDistribution = GrowthDistribution::RegimeMix {
        bull_mean: 0.30,
        bull_std_dev: 0.20,
        bear_mean: -0.10,
        bear_std_dev: 0.25,
        bull_prob: 0.5,
    };

    /// Sample a single annual growth rate from this distribution.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, ComputationError> {
        let raw = match self {
            GrowthDistribution::Normal { mean, std_dev } => {
                rand_distr::Normal::new(*mean, *std_dev)
                    .map(|d| d.sample(rng))
                    .map_err(|_| ComputationError::InvalidDistributionParameters {
                        profile_type: "Normal growth",
                        mean: *mean,
                        std_dev: *std_dev,
                        reason: "std_dev must be non-negative and finite",
                    })?
            }
            GrowthDistribution::LogNormal { mean, std_dev } => {
                rand_distr::LogNormal::new(*mean, *std_dev)
                    .map(|d| d.sample(rng) - 1.0)
                    .map_err(|_| ComputationError::InvalidDistributionParameters {
                        profile_type: "LogNormal growth",
                        mean: *mean,
                        std_dev: *std_dev,
                        reason: "std_dev must be positive and finite",
                    })?
            }
            GrowthDistribution::RegimeMix {
                bull_mean,
                bull_std_dev,
                bear_mean,
                bear_std_dev,
                bull_prob,
            } => {
                let (mean, std_dev) = if rng.random::<f64>() < *bull_prob {
                    (*bull_mean, *bull_std_dev)
                } else {
                    (*bear_mean, *bear_std_dev)
                };
                rand_distr::Normal::new(mean, std_dev)
                    .map(|d| d.sample(rng))
                    .map_err(|_| ComputationError::InvalidDistributionParameters {
                        profile_type: "RegimeMix growth",
                        mean,
                        std_dev,
                        reason: "std_dev must be non-negative and finite",
                    })?
            }
        };
        Ok(raw.max(MIN_ANNUAL_RETURN))
    }

    /// Sample `n` independent annual growth rates.
    pub fn sample_sequence<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
    ) -> Result<Vec<f64>, ComputationError> {
        let mut rates = Vec::with_capacity(n);
        for _ in 0..n {
            rates.push(self.sample(rng)?);
        }
        Ok(rates)
    }

    /// Expected annual growth rate of the distribution, used for the
    /// deterministic projection of randomized plans.
    #[must_use]
    pub fn expected_rate(&self) -> f64 {
        match self {
            GrowthDistribution::Normal { mean, .. } => *mean,
            GrowthDistribution::LogNormal { mean, std_dev } => {
                (mean + std_dev * std_dev / 2.0).exp() - 1.0
            }
            GrowthDistribution::RegimeMix {
                bull_mean,
                bear_mean,
                bull_prob,
                ..
            } => bull_prob * bull_mean + (1.0 - bull_prob) * bear_mean,
        }
    }
}

/// Growth-rate assumption of a validated plan.
///
/// Exactly one mode is active per plan; the validator enforces this when
/// constructing a [`RetirementPlan`](crate::model::RetirementPlan).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum GrowthModel {
    Fixed { rate: f64 },
    Random { distribution: GrowthDistribution },
}

impl GrowthModel {
    pub const CONSERVATIVE: GrowthModel = GrowthModel::Fixed { rate: 0.10 };
    pub const MODERATE: GrowthModel = GrowthModel::Fixed { rate: 0.21 };
    pub const AGGRESSIVE: GrowthModel = GrowthModel::Fixed { rate: 0.30 };
    pub const HYPERBITCOINIZATION: GrowthModel = GrowthModel::Fixed { rate: 0.42 };

    /// Named fixed-rate presets offered to callers
    #[must_use]
    pub fn presets() -> [(&'static str, GrowthModel); 4] {
        [
            ("conservative", GrowthModel::CONSERVATIVE),
            ("moderate", GrowthModel::MODERATE),
            ("aggressive", GrowthModel::AGGRESSIVE),
            ("hyperbitcoinization", GrowthModel::HYPERBITCOINIZATION),
        ]
    }

    /// Annual rate used for the deterministic projection: the fixed rate
    /// itself, or the distribution's expected rate.
    #[must_use]
    pub fn expected_rate(&self) -> f64 {
        match self {
            GrowthModel::Fixed { rate } => *rate,
            GrowthModel::Random { distribution } => distribution.expected_rate(),
        }
    }

    /// Draw one path of `n` annual growth rates. Fixed-rate models yield a
    /// constant sequence and consume no randomness.
    pub fn sample_path<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
    ) -> Result<Vec<f64>, ComputationError> {
        match self {
            GrowthModel::Fixed { rate } => Ok(vec![*rate; n]),
            GrowthModel::Random { distribution } => distribution.sample_sequence(rng, n),
        }
    }
}
