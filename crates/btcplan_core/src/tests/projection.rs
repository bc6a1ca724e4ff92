//! Deterministic projection: worked linear-accumulation example, determinism
//! and the zero clamp on the depletion schedule.

use crate::model::Contribution;
use crate::projection::{project, project_with_rates, value_at_retirement};
use crate::tests::{base_input, validated};

#[test]
fn test_linear_accumulation_worked_example() {
    // Spec'd hand-checkable case: 0.5 BTC held, 0.01 BTC/month, zero growth
    let mut input = base_input();
    input.current_age = 30;
    input.retirement_age = 65;
    input.life_expectancy = 90;
    input.current_holdings_btc = 0.5;
    input.monthly_contribution = Contribution::Btc(0.01);
    input.fixed_growth_rate = Some(0.0);
    input.annual_inflation_rate = 0.0;
    input.monthly_spending = 2_000.0;
    input.current_btc_price = 60_000.0;

    let projection = project(&validated(&input));
    let at_retirement = projection.at_retirement().unwrap();

    assert_eq!(at_retirement.age, 65);
    let expected = 0.5 + 0.01 * 12.0 * 35.0; // 4.7 BTC
    assert!((at_retirement.btc_holdings - expected).abs() < 1e-9);
    assert!((at_retirement.nominal_value - expected * 60_000.0).abs() < 1e-4);
}

#[test]
fn test_projection_covers_full_horizon() {
    let plan = validated(&base_input());
    let projection = project(&plan);

    assert_eq!(projection.years.len(), plan.horizon_years() as usize);
    assert_eq!(projection.years.first().unwrap().age, 30);
    assert_eq!(projection.years.last().unwrap().age, 85);
    for (i, year) in projection.years.iter().enumerate() {
        assert_eq!(year.year_index, i as u32);
    }
}

#[test]
fn test_projection_is_deterministic() {
    let plan = validated(&base_input());

    let first = project(&plan);
    let second = project(&plan);

    // Bit-identical, not approximately equal
    assert_eq!(first, second);
}

#[test]
fn test_random_plan_projection_is_deterministic() {
    let mut input = base_input();
    input.fixed_growth_rate = None;
    input.growth_distribution = Some(crate::model::GrowthDistribution::BULL_BEAR_CYCLE);
    let plan = validated(&input);

    assert_eq!(project(&plan), project(&plan));
}

#[test]
fn test_holdings_never_go_negative() {
    // Spending far beyond what the holdings can sustain
    let mut input = base_input();
    input.current_holdings_btc = 0.2;
    input.monthly_contribution = Contribution::Fiat(0.0);
    input.monthly_spending = 20_000.0;

    let projection = project(&validated(&input));

    for year in &projection.years {
        assert!(year.btc_holdings >= 0.0, "negative holdings at age {}", year.age);
    }
    // Once depleted, the balance stays at zero
    let last = projection.years.last().unwrap();
    assert_eq!(last.btc_holdings, 0.0);
}

#[test]
fn test_contributions_stop_at_retirement() {
    let mut input = base_input();
    input.monthly_spending = 0.0;
    input.monthly_contribution = Contribution::Btc(0.01);
    input.fixed_growth_rate = Some(0.10);

    let projection = project(&validated(&input));
    let at_retirement = projection.at_retirement().unwrap().btc_holdings;

    // With zero spending, holdings are flat after the last contribution
    for year in projection.post_retirement() {
        assert_eq!(year.btc_holdings, at_retirement);
    }
}

#[test]
fn test_spending_need_tracks_inflation() {
    let plan = validated(&base_input());
    let projection = project(&plan);

    let year0 = projection.years[0].spending_need;
    let year10 = projection.years[10].spending_need;

    assert!((year0 - 3_000.0 * 12.0).abs() < 1e-9);
    assert!((year10 - 3_000.0 * 12.0 * 1.02f64.powi(10)).abs() < 1e-6);
}

#[test]
fn test_value_at_retirement_matches_full_projection() {
    let plan = validated(&base_input());
    let rates = vec![0.05; plan.horizon_years() as usize];

    let full = project_with_rates(&plan, &rates);
    let slim = value_at_retirement(&plan, &rates);

    let at_retirement = full.at_retirement().unwrap();
    let tolerance = at_retirement.nominal_value.abs() * 1e-12;
    assert!((slim - at_retirement.nominal_value).abs() <= tolerance);
}

#[test]
fn test_exactly_funded_plan_depletes_at_life_expectancy() {
    // Holding precisely the solved requirement at a flat price leaves the
    // balance at zero in the final projected year and not before
    let mut input = base_input();
    input.current_age = 60;
    input.retirement_age = 62;
    input.life_expectancy = 66;
    input.current_holdings_btc = 0.0;
    input.monthly_contribution = Contribution::Fiat(0.0);
    input.fixed_growth_rate = Some(0.0);
    input.annual_inflation_rate = 0.05;
    input.monthly_spending = 1_000.0;
    input.current_btc_price = 100_000.0;

    let required = crate::solver::solve(&validated(&input)).unwrap().required_btc;
    input.current_holdings_btc = required;

    let projection = project(&validated(&input));
    let years = &projection.years;
    assert!(years[years.len() - 2].btc_holdings > 0.0);
    assert!(years.last().unwrap().btc_holdings < 1e-9);
}

#[test]
fn test_path_projection_follows_supplied_rates() {
    let mut input = base_input();
    input.current_age = 60;
    input.retirement_age = 62;
    input.life_expectancy = 64;
    input.current_holdings_btc = 1.0;
    input.monthly_contribution = Contribution::Fiat(0.0);
    input.monthly_spending = 0.0;
    input.current_btc_price = 10_000.0;
    let plan = validated(&input);

    // Price doubles, halves, then doubles twice
    let projection = project_with_rates(&plan, &[1.0, -0.5, 1.0, 1.0]);
    let values: Vec<f64> = projection.years.iter().map(|y| y.nominal_value).collect();

    assert_eq!(values, vec![10_000.0, 20_000.0, 10_000.0, 20_000.0, 40_000.0]);
}
