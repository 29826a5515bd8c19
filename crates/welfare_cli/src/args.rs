//! Shared argument groups for the CLI commands.
//!
//! The market, engine, and scenario flags are identical for `evaluate`
//! and `compare`, so each group lives in one `clap::Args` struct that
//! both subcommands flatten in.

use clap::{Args, ValueEnum};
use welfare_core::{MarketParams, Scenario, TradeScale};
use welfare_engine::EngineConfig;

use crate::{CliError, Result};

/// Linear market parameters.
///
/// Defaults describe the demand curve `P = 100 - Q` against the supply
/// curve `P = 20 + Q`.
#[derive(Debug, Args)]
pub struct MarketArgs {
    /// Demand choke price (price at zero demand)
    #[arg(long, default_value_t = 100.0)]
    pub demand_intercept: f64,

    /// Demand slope (price drop per unit demanded)
    #[arg(long, default_value_t = 1.0)]
    pub demand_slope: f64,

    /// Supply reservation price (price at zero supply)
    #[arg(long, default_value_t = 20.0)]
    pub supply_intercept: f64,

    /// Supply slope (price rise per unit supplied)
    #[arg(long, default_value_t = 1.0)]
    pub supply_slope: f64,
}

impl MarketArgs {
    /// Builds validated market parameters from the flags.
    pub fn to_market(&self) -> Result<MarketParams<f64>> {
        Ok(MarketParams::new(
            self.demand_intercept,
            self.demand_slope,
            self.supply_intercept,
            self.supply_slope,
        )?)
    }
}

/// Engine tuning flags.
#[derive(Debug, Args)]
pub struct EngineArgs {
    /// Share of a tariff absorbed by foreign exporters (large economy)
    #[arg(long)]
    pub tariff_passthrough: Option<f64>,

    /// Share of an export subsidy passed into the world price (large economy)
    #[arg(long)]
    pub subsidy_passthrough: Option<f64>,
}

impl EngineArgs {
    /// Builds an engine configuration, starting from the defaults.
    pub fn to_config(&self) -> EngineConfig<f64> {
        let mut config = EngineConfig::new();
        if let Some(share) = self.tariff_passthrough {
            config = config.with_tariff_passthrough(share);
        }
        if let Some(share) = self.subsidy_passthrough {
            config = config.with_subsidy_passthrough(share);
        }
        config
    }
}

/// Policy scenario selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioKind {
    /// Unregulated domestic equilibrium
    Autarky,
    /// Per-unit tax on transactions
    Tax,
    /// Binding maximum price
    Ceiling,
    /// Binding minimum price
    Floor,
    /// Single profit-maximising seller
    Monopoly,
    /// Open trade at the world price
    FreeTrade,
    /// Per-unit tariff on imports
    Tariff,
    /// Quantitative limit on imports
    Quota,
    /// Per-unit subsidy on exports
    Subsidy,
}

/// Economy size for tariff and subsidy scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleArg {
    /// Price taker on world markets
    Small,
    /// Policy moves the world price
    Large,
}

impl From<ScaleArg> for TradeScale {
    fn from(scale: ScaleArg) -> Self {
        match scale {
            ScaleArg::Small => TradeScale::Small,
            ScaleArg::Large => TradeScale::Large,
        }
    }
}

/// Scenario flags.
#[derive(Debug, Args)]
pub struct ScenarioArgs {
    /// Policy scenario to evaluate
    #[arg(value_enum)]
    pub scenario: ScenarioKind,

    /// Policy magnitude: tax/tariff/subsidy rate, ceiling cap, or floor level
    #[arg(short = 'x', long)]
    pub value: Option<f64>,

    /// World price (required for trade scenarios)
    #[arg(short, long)]
    pub world_price: Option<f64>,

    /// Permitted import volume (required for quota)
    #[arg(short, long)]
    pub quota_volume: Option<f64>,

    /// Economy size for tariff and subsidy scenarios
    #[arg(long, value_enum, default_value = "small")]
    pub scale: ScaleArg,
}

impl ScenarioArgs {
    /// Assembles the scenario, rejecting incomplete flag combinations.
    pub fn to_scenario(&self) -> Result<Scenario<f64>> {
        let scenario = match self.scenario {
            ScenarioKind::Autarky => Scenario::Autarky,
            ScenarioKind::Tax => Scenario::Tax {
                rate: self.require_value("tax")?,
            },
            ScenarioKind::Ceiling => Scenario::PriceCeiling {
                cap: self.require_value("ceiling")?,
            },
            ScenarioKind::Floor => Scenario::PriceFloor {
                floor: self.require_value("floor")?,
            },
            ScenarioKind::Monopoly => Scenario::Monopoly,
            ScenarioKind::FreeTrade => Scenario::FreeTrade {
                world_price: self.require_world_price("free-trade")?,
            },
            ScenarioKind::Tariff => Scenario::ImportTariff {
                rate: self.require_value("tariff")?,
                world_price: self.require_world_price("tariff")?,
                scale: self.scale.into(),
            },
            ScenarioKind::Quota => Scenario::ImportQuota {
                volume: self.quota_volume.ok_or_else(|| {
                    CliError::InvalidArgument(
                        "quota requires --quota-volume".to_string(),
                    )
                })?,
                world_price: self.require_world_price("quota")?,
            },
            ScenarioKind::Subsidy => Scenario::ExportSubsidy {
                rate: self.require_value("subsidy")?,
                world_price: self.require_world_price("subsidy")?,
                scale: self.scale.into(),
            },
        };
        Ok(scenario)
    }

    fn require_value(&self, name: &str) -> Result<f64> {
        self.value.ok_or_else(|| {
            CliError::InvalidArgument(format!("{name} requires --value"))
        })
    }

    fn require_world_price(&self, name: &str) -> Result<f64> {
        self.world_price.ok_or_else(|| {
            CliError::InvalidArgument(format!("{name} requires --world-price"))
        })
    }
}

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned table on stdout
    Table,
    /// Pretty-printed JSON on stdout
    Json,
}
