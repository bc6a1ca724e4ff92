use serde::Serialize;

/// One projected year of the plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionYear {
    pub age: u8,
    /// Years elapsed since the plan's current age; 0 is today
    pub year_index: u32,
    /// BTC held at the end of this year
    pub btc_holdings: f64,
    /// Holdings valued at this year's projected price, in currency units
    pub nominal_value: f64,
    /// Inflation-adjusted annual spending need for this year, in currency units
    pub spending_need: f64,
}

/// Deterministic year-by-year trajectory of a plan, one entry per year from
/// the current age through the life expectancy. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub retirement_age: u8,
    pub years: Vec<ProjectionYear>,
}

impl ProjectionResult {
    /// The entry for a given age, if it falls inside the projected horizon
    #[must_use]
    pub fn at_age(&self, age: u8) -> Option<&ProjectionYear> {
        let first = self.years.first()?.age;
        if age < first {
            return None;
        }
        self.years.get(usize::from(age - first))
    }

    /// The entry for the retirement year: accumulation is complete, the
    /// first withdrawal has not yet happened
    #[must_use]
    pub fn at_retirement(&self) -> Option<&ProjectionYear> {
        self.at_age(self.retirement_age)
    }

    /// Entries for the drawdown years after retirement
    #[must_use]
    pub fn post_retirement(&self) -> &[ProjectionYear] {
        let Some(first) = self.years.first() else {
            return &[];
        };
        let split = usize::from(self.retirement_age - first.age) + 1;
        self.years.get(split..).unwrap_or(&[])
    }
}

/// Output of the required-BTC solver: what retirement costs and what the
/// plan is projected to hold when it gets there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RetirementRequirement {
    /// BTC quantity needed at the retirement date to fund all retirement
    /// spending; 0 when the spending target is 0
    pub required_btc: f64,
    /// Projected price at the retirement date, currency units per BTC
    pub projected_price_at_retirement: f64,
    /// Inflation-adjusted annual spending at the retirement date
    pub annual_expense_at_retirement: f64,
    /// Sum of all inflation-grown annual expenses over the retirement years
    pub total_retirement_expenses: f64,
    /// Future value of the contribution stream at the retirement date
    pub contribution_value_at_retirement: f64,
    /// Current holdings plus contributions, as BTC at the retirement date
    pub projected_btc_at_retirement: f64,
}

/// Years the holdings survive post-retirement spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Runway {
    /// Depleted after this many funded years
    Years(u32),
    /// Never depletes within the projected horizon
    Indefinite,
}

/// Plan health derived from a projection and its requirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HealthScore {
    /// Projected holdings at retirement over required holdings. Capped at
    /// [`FUNDING_RATIO_CAP`]; a zero requirement reports the cap rather than
    /// infinity.
    pub funding_ratio: f64,
    pub runway: Runway,
    /// Composite 0-100 score derived from the funding ratio
    pub score: u8,
}

/// Ceiling on the reported funding ratio, so a zero or near-zero requirement
/// never surfaces as infinity
pub const FUNDING_RATIO_CAP: f64 = 100.0;

/// Smallest change found that lifts the plan to the target success
/// probability
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Remediation {
    AdditionalMonthlyContribution {
        /// Extra contribution per month, in currency units
        fiat_per_month: f64,
        achieved_probability: f64,
    },
    DelayRetirement {
        years: u8,
        achieved_probability: f64,
    },
}

/// Outcome of the Monte Carlo simulation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Fraction of simulated paths whose retirement-date holdings value met
    /// the required funding amount
    pub success_probability: f64,
    /// Number of paths actually simulated
    pub sample_count: usize,
    /// Present when the success probability fell below the configured target
    /// and the remediation search found a sufficient adjustment
    pub suggestion: Option<Remediation>,
}
