//! Compare command implementation
//!
//! Evaluates a policy scenario against its reference scenario (autarky
//! for domestic policies, undistorted free trade for trade
//! interventions) and reports the net welfare change.

use tracing::info;
use welfare_engine::{WelfareDelta, WelfareModel};

use crate::args::{EngineArgs, MarketArgs, OutputFormat, ScenarioArgs};
use crate::commands::evaluate::print_snapshot;
use crate::Result;

/// Run the compare command
pub fn run(
    market: &MarketArgs,
    engine: &EngineArgs,
    scenario: &ScenarioArgs,
    format: OutputFormat,
) -> Result<()> {
    let market = market.to_market()?;
    let model = WelfareModel::with_config(market, engine.to_config())?;
    let scenario = scenario.to_scenario()?;
    let reference = scenario.baseline();

    info!(
        "Comparing {} against {}",
        scenario.label(),
        reference.label()
    );
    let current = model.evaluate(&scenario);
    let baseline = model.evaluate(&reference);
    let delta = current.net_change(&baseline);

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "scenario": scenario.label(),
                "baseline_scenario": reference.label(),
                "current": current,
                "baseline": baseline,
                "net_change": delta,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => {
            print_snapshot(scenario.label(), &current);
            print_snapshot(reference.label(), &baseline);
            print_delta(&delta);
        }
    }
    Ok(())
}

fn print_delta(delta: &WelfareDelta<f64>) {
    let left = "─".repeat(30);
    let right = "─".repeat(16);

    println!("\n┌{left}┬{right}┐");
    println!("│ {:<28} │ {:>14} │", "Net change", "Value");
    println!("├{left}┼{right}┤");
    print_row("Consumer surplus", delta.consumer_surplus);
    print_row("Producer surplus", delta.producer_surplus);
    print_row("Government revenue", delta.government_revenue);
    print_row("Total welfare", delta.total_welfare);
    print_row("Deadweight loss", delta.deadweight_loss);
    println!("└{left}┴{right}┘");
}

fn print_row(label: &str, value: f64) {
    println!("│ {label:<28} │ {value:>+14.2} │");
}
