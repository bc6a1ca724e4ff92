//! Command-line front end for the btcplan engine.
//!
//! Parses plan fields from flags (rates in percent, as people type them),
//! hands a `PlanInput` to the engine and prints the evaluation as a plain
//! report or JSON. The spot price is an explicit flag: fetching and caching
//! a live price is the caller's business, not this tool's.

mod report;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use btcplan_core::model::{Contribution, GrowthDistribution, GrowthModel, PlanInput};
use btcplan_core::{PlannerConfig, SimulationConfig, evaluate_plan};

#[derive(Parser, Debug)]
#[command(name = "btcplan")]
#[command(about = "Bitcoin retirement planning calculator")]
struct Args {
    /// Your current age in years
    #[arg(long, default_value_t = 21)]
    current_age: u8,

    /// The age at which you plan to retire
    #[arg(long, default_value_t = 67)]
    retirement_age: u8,

    /// Your expected lifespan in years
    #[arg(long, default_value_t = 85)]
    life_expectancy: u8,

    /// Bitcoin you currently hold, in BTC
    #[arg(long, default_value_t = 0.1)]
    holdings: f64,

    /// Monthly recurring investment, in USD
    #[arg(long, default_value_t = 500.0, conflicts_with = "contribution_btc")]
    contribution_usd: f64,

    /// Monthly recurring investment, in BTC (instead of USD)
    #[arg(long)]
    contribution_btc: Option<f64>,

    /// Fixed annual Bitcoin growth rate, in percent
    #[arg(long, conflicts_with_all = ["preset", "random_growth"])]
    growth_rate: Option<f64>,

    /// Named growth preset: conservative, moderate, aggressive,
    /// hyperbitcoinization
    #[arg(long, conflicts_with = "random_growth")]
    preset: Option<String>,

    /// Sample growth from the bull/bear cycle model instead of a fixed rate
    #[arg(long)]
    random_growth: bool,

    /// Expected annual inflation rate, in percent
    #[arg(long, default_value_t = 5.0)]
    inflation_rate: f64,

    /// Monthly spending in retirement, in today's USD
    #[arg(long, default_value_t = 5000.0)]
    spending: f64,

    /// Current Bitcoin price in USD
    #[arg(long, default_value_t = 100_000.0)]
    price: f64,

    /// Monte Carlo sample count
    #[arg(long, default_value_t = 1000)]
    samples: usize,

    /// Random seed for reproducible simulation runs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Emit the full evaluation as JSON instead of a report
    #[arg(long)]
    json: bool,
}

fn growth_fields(args: &Args) -> color_eyre::Result<(Option<f64>, Option<GrowthDistribution>)> {
    if args.random_growth {
        return Ok((None, Some(GrowthDistribution::BULL_BEAR_CYCLE)));
    }
    if let Some(percent) = args.growth_rate {
        return Ok((Some(percent / 100.0), None));
    }
    let name = args.preset.as_deref().unwrap_or("moderate");
    let preset = GrowthModel::presets()
        .into_iter()
        .find(|(preset_name, _)| *preset_name == name)
        .ok_or_else(|| color_eyre::eyre::eyre!("unknown growth preset: {name}"))?;
    Ok((Some(preset.1.expected_rate()), None))
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("btcplan=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let (fixed_growth_rate, growth_distribution) = growth_fields(&args)?;

    let input = PlanInput {
        current_age: args.current_age,
        retirement_age: args.retirement_age,
        life_expectancy: args.life_expectancy,
        current_holdings_btc: args.holdings,
        monthly_contribution: match args.contribution_btc {
            Some(btc) => Contribution::Btc(btc),
            None => Contribution::Fiat(args.contribution_usd),
        },
        fixed_growth_rate,
        growth_distribution,
        annual_inflation_rate: args.inflation_rate / 100.0,
        monthly_spending: args.spending,
        current_btc_price: args.price,
    };

    let config = PlannerConfig::default();
    let sim = SimulationConfig {
        samples: args.samples,
        seed: args.seed,
    };

    tracing::info!(samples = sim.samples, seed = sim.seed, "evaluating plan");
    let evaluation = evaluate_plan(&input, &config, &sim)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        report::print_report(&evaluation, &config);
    }
    Ok(())
}
