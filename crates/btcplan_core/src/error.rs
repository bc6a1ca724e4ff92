use std::fmt;

/// Errors from rejecting raw plan input.
///
/// Every variant names the offending field and carries the value that was
/// supplied, so the caller can render a precise message and re-prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric field fell outside its admissible range
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A monetary or quantity field was negative
    Negative { field: &'static str, value: f64 },
    /// A field was NaN or infinite
    NotFinite { field: &'static str, value: f64 },
    /// An age field violated the required ordering
    AgeOrdering {
        field: &'static str,
        value: u8,
        other_field: &'static str,
        other_value: u8,
    },
    /// The current BTC price must be strictly positive
    NonPositivePrice { value: f64 },
    /// Both a fixed growth rate and a growth distribution were supplied
    GrowthModeConflict,
    /// Neither a fixed growth rate nor a growth distribution was supplied
    GrowthModeMissing,
    /// Growth distribution parameters are not usable
    InvalidGrowthDistribution {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl ValidationError {
    /// The name of the field that failed validation
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::NotFinite { field, .. }
            | ValidationError::AgeOrdering { field, .. } => field,
            ValidationError::NonPositivePrice { .. } => "current_btc_price",
            ValidationError::GrowthModeConflict | ValidationError::GrowthModeMissing => {
                "growth_rate"
            }
            ValidationError::InvalidGrowthDistribution { .. } => "growth_distribution",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::OutOfRange {
                field,
                value,
                min,
                max,
            } => {
                write!(f, "{field} must be between {min} and {max}, got {value}")
            }
            ValidationError::Negative { field, value } => {
                write!(f, "{field} cannot be negative, got {value}")
            }
            ValidationError::NotFinite { field, value } => {
                write!(f, "{field} must be a finite number, got {value}")
            }
            ValidationError::AgeOrdering {
                field,
                value,
                other_field,
                other_value,
            } => {
                write!(
                    f,
                    "{field} ({value}) must not precede {other_field} ({other_value})"
                )
            }
            ValidationError::NonPositivePrice { value } => {
                write!(f, "current_btc_price must be positive, got {value}")
            }
            ValidationError::GrowthModeConflict => {
                write!(
                    f,
                    "growth_rate: supply either a fixed growth rate or a growth distribution, not both"
                )
            }
            ValidationError::GrowthModeMissing => {
                write!(
                    f,
                    "growth_rate: supply a fixed growth rate or a growth distribution"
                )
            }
            ValidationError::InvalidGrowthDistribution {
                field,
                value,
                reason,
            } => {
                write!(f, "growth_distribution.{field} ({value}): {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors from degenerate numeric cases during projection or simulation.
///
/// These should be rare: the known zero/boundary cases are special-cased in
/// the solver and projection, so a `NonFinite` here means the inputs drove
/// the arithmetic past what `f64` can represent.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationError {
    /// A computed quantity overflowed or degenerated to NaN
    NonFinite { quantity: &'static str, value: f64 },
    /// A sampling distribution could not be constructed
    InvalidDistributionParameters {
        profile_type: &'static str,
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
}

impl fmt::Display for ComputationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComputationError::NonFinite { quantity, value } => {
                write!(f, "{quantity} is not representable ({value})")
            }
            ComputationError::InvalidDistributionParameters {
                profile_type,
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid {profile_type} parameters (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
        }
    }
}

impl std::error::Error for ComputationError {}

/// Top-level error type for a full plan evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    Validation(ValidationError),
    Computation(ComputationError),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Validation(e) => write!(f, "{e}"),
            PlanError::Computation(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Validation(e) => Some(e),
            PlanError::Computation(e) => Some(e),
        }
    }
}

impl From<ValidationError> for PlanError {
    fn from(e: ValidationError) -> Self {
        PlanError::Validation(e)
    }
}

impl From<ComputationError> for PlanError {
    fn from(e: ComputationError) -> Self {
        PlanError::Computation(e)
    }
}
