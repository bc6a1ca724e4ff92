//! Plain-text rendering of a plan evaluation.

use btcplan_core::PlanEvaluation;
use btcplan_core::config::PlannerConfig;
use btcplan_core::model::{Remediation, Runway};

pub fn print_report(evaluation: &PlanEvaluation, config: &PlannerConfig) {
    let plan = &evaluation.plan;
    let requirement = &evaluation.requirement;
    let health = &evaluation.health;
    let simulation = &evaluation.simulation;

    println!("Retirement plan: age {} -> {} (life expectancy {})",
        plan.current_age, plan.retirement_age, plan.life_expectancy);
    println!();

    println!("At retirement (in {} years):", plan.years_to_retirement());
    println!("  projected BTC price:      ${:>14.2}", requirement.projected_price_at_retirement);
    println!("  projected holdings:       {:>15.4} BTC", requirement.projected_btc_at_retirement);
    println!("  BTC needed:               {:>15.4} BTC", requirement.required_btc);
    println!("  annual expenses:          ${:>14.2}", requirement.annual_expense_at_retirement);
    println!("  total retirement bill:    ${:>14.2}", requirement.total_retirement_expenses);
    println!();

    println!("Health:");
    println!("  funding ratio:            {:>15.2}", health.funding_ratio);
    match health.runway {
        Runway::Years(years) => println!("  runway:                   {years:>15} years"),
        Runway::Indefinite => println!("  runway:                        indefinite"),
    }
    println!("  score:                    {:>15}/100", health.score);
    println!();

    println!(
        "Monte Carlo: {:.1}% success over {} paths (target {:.0}%)",
        simulation.success_probability * 100.0,
        simulation.sample_count,
        config.target_success_probability * 100.0,
    );
    match simulation.suggestion {
        Some(Remediation::AdditionalMonthlyContribution {
            fiat_per_month,
            achieved_probability,
        }) => {
            println!(
                "  suggestion: invest an extra ${fiat_per_month:.0}/month to reach {:.1}%",
                achieved_probability * 100.0
            );
        }
        Some(Remediation::DelayRetirement {
            years,
            achieved_probability,
        }) => {
            println!(
                "  suggestion: retire {years} year(s) later to reach {:.1}%",
                achieved_probability * 100.0
            );
        }
        None => {}
    }
    println!();
    println!("Note: Bitcoin prices are highly volatile. These projections are estimates,");
    println!("not financial advice.");
}
