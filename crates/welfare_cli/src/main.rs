//! Welfare CLI - command-line operations for the welfare engine
//!
//! # Commands
//!
//! - `welfare evaluate <SCENARIO>` - Evaluate one policy scenario
//! - `welfare compare <SCENARIO>` - Compare a scenario against its baseline
//!
//! Market parameters default to the reference market (demand
//! `P = 100 - Q`, supply `P = 20 + Q`) and can be overridden per flag.
//!
//! # Examples
//!
//! ```text
//! welfare evaluate tax --value 10
//! welfare evaluate tariff --value 10 --world-price 40 --scale large
//! welfare compare quota --quota-volume 20 --world-price 40 --format json
//! ```

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod commands;
mod error;

use args::{EngineArgs, MarketArgs, OutputFormat, ScenarioArgs};
pub use error::{CliError, Result};

/// Linear-market welfare analysis CLI
#[derive(Parser)]
#[command(name = "welfare")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one policy scenario into a welfare snapshot
    Evaluate {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Compare a scenario against its reference scenario
    Compare {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Evaluate {
            market,
            engine,
            scenario,
            format,
        } => commands::evaluate::run(&market, &engine, &scenario, format),
        Commands::Compare {
            market,
            engine,
            scenario,
            format,
        } => commands::compare::run(&market, &engine, &scenario, format),
    }
}
