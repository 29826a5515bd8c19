//! Evaluate command implementation
//!
//! Evaluates one policy scenario and prints the resulting welfare
//! snapshot.

use tracing::info;
use welfare_engine::{WelfareModel, WelfareSnapshot};

use crate::args::{EngineArgs, MarketArgs, OutputFormat, ScenarioArgs};
use crate::Result;

/// Run the evaluate command
pub fn run(
    market: &MarketArgs,
    engine: &EngineArgs,
    scenario: &ScenarioArgs,
    format: OutputFormat,
) -> Result<()> {
    let market = market.to_market()?;
    let model = WelfareModel::with_config(market, engine.to_config())?;
    let scenario = scenario.to_scenario()?;

    info!("Evaluating scenario: {}", scenario.label());
    let snapshot = model.evaluate(&scenario);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&snapshot)?),
        OutputFormat::Table => print_snapshot(scenario.label(), &snapshot),
    }
    Ok(())
}

/// Prints one snapshot as an aligned table.
pub(crate) fn print_snapshot(title: &str, snapshot: &WelfareSnapshot<f64>) {
    let left = "─".repeat(30);
    let right = "─".repeat(16);

    println!("\n┌{left}┬{right}┐");
    println!("│ {:<28} │ {:>14} │", title, "Value");
    println!("├{left}┼{right}┤");
    print_row("Consumer surplus", snapshot.consumer_surplus);
    print_row("Producer surplus", snapshot.producer_surplus);
    print_row("Government revenue", snapshot.government_revenue);
    if let Some(gain) = snapshot.trade_gain {
        print_row("Gains from trade", gain);
    }
    if snapshot.terms_of_trade_gain != 0.0 {
        print_row("Terms-of-trade gain", snapshot.terms_of_trade_gain);
    }
    print_row("Total welfare", snapshot.total_welfare);
    print_row("Deadweight loss", snapshot.deadweight_loss);
    println!("├{left}┼{right}┤");
    print_row("Quantity transacted", snapshot.quantity);
    print_row("Consumer price", snapshot.consumer_price);
    print_row("Producer price", snapshot.producer_price);
    println!(
        "│ {:<28} │ {:>14} │",
        "Policy binding",
        if snapshot.binding { "yes" } else { "no" }
    );
    println!("└{left}┴{right}┘");
}

fn print_row(label: &str, value: f64) {
    println!("│ {label:<28} │ {value:>14.2} │");
}
