//! Top-level welfare model.
//!
//! Ties the equilibrium solver, scenario resolver, and surplus
//! integrator together and assembles their outputs into one
//! [`WelfareSnapshot`] per evaluation.

use num_traits::Float;
use welfare_core::market::MarketParams;
use welfare_core::scenario::Scenario;

use crate::config::EngineConfig;
use crate::equilibrium::Equilibrium;
use crate::error::EngineError;
use crate::resolver;
use crate::snapshot::WelfareSnapshot;
use crate::surplus;

/// Welfare model for one linear market.
///
/// Holds the validated market parameters and the engine configuration;
/// every evaluation is a pure, stateless transformation of a scenario
/// into a fresh snapshot. Evaluations are independent and may run in
/// any order or in parallel.
///
/// # Examples
/// ```
/// use welfare_core::{MarketParams, Scenario, TradeScale};
/// use welfare_engine::WelfareModel;
///
/// let market = MarketParams::new(100.0_f64, 1.0, 20.0, 1.0).unwrap();
/// let model = WelfareModel::new(market);
///
/// let tariff = Scenario::ImportTariff {
///     rate: 10.0,
///     world_price: 40.0,
///     scale: TradeScale::Small,
/// };
/// let current = model.evaluate(&tariff);
/// let baseline = model.baseline(&tariff);
///
/// // The tariff destroys welfare relative to free trade.
/// let delta = current.net_change(&baseline);
/// assert!(delta.total_welfare < 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct WelfareModel<T: Float> {
    market: MarketParams<T>,
    config: EngineConfig<T>,
}

impl<T: Float> WelfareModel<T> {
    /// Creates a model with the default engine configuration.
    pub fn new(market: MarketParams<T>) -> Self {
        Self {
            market,
            config: EngineConfig::default(),
        }
    }

    /// Creates a model with a custom engine configuration.
    ///
    /// # Errors
    /// `EngineError::InvalidConfig` if a pass-through share is outside `[0, 1)`.
    pub fn with_config(market: MarketParams<T>, config: EngineConfig<T>) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { market, config })
    }

    /// Returns the market parameters.
    #[inline]
    pub fn market(&self) -> &MarketParams<T> {
        &self.market
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig<T> {
        &self.config
    }

    /// Solves the unregulated equilibrium of the market.
    #[inline]
    pub fn equilibrium(&self) -> Equilibrium<T> {
        Equilibrium::solve(&self.market)
    }

    /// Evaluates one scenario into a complete welfare snapshot.
    ///
    /// Infallible by construction: the market and configuration were
    /// validated up front, and every derivation is closed-form. A
    /// non-finite result would be a derivation bug and is asserted
    /// against in debug builds.
    pub fn evaluate(&self, scenario: &Scenario<T>) -> WelfareSnapshot<T> {
        let equilibrium = self.equilibrium();
        let resolution = resolver::resolve(&self.market, scenario, &self.config, &equilibrium);
        let areas = surplus::integrate(&self.market, scenario, &equilibrium, &resolution);

        let trade_gain = if scenario.is_trade_policy() {
            Some(areas.total_welfare - equilibrium.total_surplus(&self.market))
        } else {
            None
        };

        let snapshot = WelfareSnapshot {
            consumer_surplus: areas.consumer_surplus,
            producer_surplus: areas.producer_surplus,
            government_revenue: resolution.government_transfer,
            total_welfare: areas.total_welfare,
            deadweight_loss: areas.deadweight_loss,
            trade_gain,
            terms_of_trade_gain: resolution.terms_of_trade_gain,
            production_distortion: resolution.production_distortion,
            consumption_distortion: resolution.consumption_distortion,
            quantity: resolution.transacted,
            quantity_demanded: areas.quantity_demanded,
            quantity_supplied: areas.quantity_supplied,
            consumer_price: resolution.consumer_price,
            producer_price: resolution.producer_price,
            binding: resolution.binding,
            anchors: resolution.anchors,
        };
        debug_assert!(snapshot.is_finite(), "non-finite welfare snapshot");
        snapshot
    }

    /// Evaluates the reference scenario a policy is compared against.
    ///
    /// Autarky for domestic policies and free trade itself; undistorted
    /// free trade at the same world price for tariff, quota, and export
    /// subsidy.
    pub fn baseline(&self, scenario: &Scenario<T>) -> WelfareSnapshot<T> {
        self.evaluate(&scenario.baseline())
    }
}

/// Computes one welfare snapshot with the default configuration.
///
/// Convenience wrapper over [`WelfareModel`] for one-shot callers.
///
/// # Examples
/// ```
/// use welfare_core::{MarketParams, Scenario};
/// use welfare_engine::compute_welfare;
///
/// let market = MarketParams::new(100.0_f64, 1.0, 20.0, 1.0).unwrap();
/// let snapshot = compute_welfare(&market, &Scenario::Tax { rate: 10.0 });
/// assert_eq!(snapshot.government_revenue, 350.0);
/// ```
pub fn compute_welfare<T: Float>(
    market: &MarketParams<T>,
    scenario: &Scenario<T>,
) -> WelfareSnapshot<T> {
    WelfareModel::new(*market).evaluate(scenario)
}
