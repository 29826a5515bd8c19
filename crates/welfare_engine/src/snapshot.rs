//! Result types for one welfare evaluation.
//!
//! This module provides:
//! - `ChartAnchors`: plotting coordinates derived alongside the numbers
//! - `WelfareSnapshot`: the complete, immutable result of one evaluation
//! - `WelfareDelta`: component-wise difference between two snapshots

use num_traits::Float;
use serde::Serialize;

use crate::equilibrium::Equilibrium;

/// Key coordinates for rendering the welfare diagram.
///
/// Derived together with the welfare numbers so presentation layers
/// never redo curve arithmetic. Optional fields are `None` when the
/// scenario has no use for them: the marginal-revenue line exists only
/// under monopoly, the world-price trio only under trade scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartAnchors<T: Float> {
    /// Unregulated equilibrium quantity `qE`.
    pub equilibrium_quantity: T,
    /// Unregulated equilibrium price `pE`.
    pub equilibrium_price: T,
    /// Quantity transacted under the scenario.
    pub base_quantity: T,
    /// Price faced by consumers.
    pub consumer_price: T,
    /// Price received by producers.
    pub producer_price: T,
    /// Marginal-revenue intercept (monopoly only).
    pub mr_intercept: Option<T>,
    /// Marginal-revenue slope (monopoly only).
    pub mr_slope: Option<T>,
    /// World price currently in effect (trade scenarios only).
    pub world_price: Option<T>,
    /// World price before any large-country shift (trade scenarios only).
    pub world_price_base: Option<T>,
    /// Post-subsidy world price (export subsidy only).
    pub world_price_new: Option<T>,
}

impl<T: Float> ChartAnchors<T> {
    /// Anchors for the unregulated equilibrium, the starting point every
    /// scenario refines.
    pub fn at_equilibrium(equilibrium: &Equilibrium<T>) -> Self {
        Self {
            equilibrium_quantity: equilibrium.quantity,
            equilibrium_price: equilibrium.price,
            base_quantity: equilibrium.quantity,
            consumer_price: equilibrium.price,
            producer_price: equilibrium.price,
            mr_intercept: None,
            mr_slope: None,
            world_price: None,
            world_price_base: None,
            world_price_new: None,
        }
    }
}

/// Complete result of one welfare evaluation.
///
/// Created fresh on every call and never mutated afterwards. Surplus
/// components are clamped at zero; `government_revenue` and
/// `terms_of_trade_gain` are signed (negative = expenditure / loss).
/// `total_welfare` is the sum of the unclamped components, so the
/// additive decomposition `CS + PS + revenue + terms-of-trade` holds
/// exactly whenever the components are themselves non-negative.
///
/// # Examples
/// ```
/// use welfare_core::{MarketParams, Scenario};
/// use welfare_engine::compute_welfare;
///
/// let market = MarketParams::new(100.0_f64, 1.0, 20.0, 1.0).unwrap();
/// let snapshot = compute_welfare(&market, &Scenario::Autarky);
/// assert_eq!(snapshot.consumer_surplus, 800.0);
/// assert_eq!(snapshot.producer_surplus, 800.0);
/// assert_eq!(snapshot.total_welfare, 1600.0);
/// assert!(!snapshot.binding);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WelfareSnapshot<T: Float> {
    /// Consumer surplus (clamped at zero).
    pub consumer_surplus: T,
    /// Producer surplus (clamped at zero).
    pub producer_surplus: T,
    /// Government transfer: positive = revenue collected, negative = expenditure.
    pub government_revenue: T,
    /// Total welfare: `CS + PS + revenue + terms-of-trade gain`.
    pub total_welfare: T,
    /// Welfare lost relative to the relevant efficiency benchmark.
    pub deadweight_loss: T,
    /// Welfare gained relative to autarky (trade scenarios only).
    pub trade_gain: Option<T>,
    /// Terms-of-trade gain (signed; non-zero only under `TradeScale::Large`).
    pub terms_of_trade_gain: T,
    /// Supply-side efficiency-loss triangle (trade interventions only).
    pub production_distortion: T,
    /// Demand-side efficiency-loss triangle (trade interventions only).
    pub consumption_distortion: T,
    /// Quantity transacted domestically.
    pub quantity: T,
    /// Quantity demanded at the consumer price.
    pub quantity_demanded: T,
    /// Quantity supplied at the producer price.
    pub quantity_supplied: T,
    /// Price faced by consumers.
    pub consumer_price: T,
    /// Price received by producers.
    pub producer_price: T,
    /// Whether the policy actually changed the market outcome.
    pub binding: bool,
    /// Plotting coordinates.
    pub anchors: ChartAnchors<T>,
}

impl<T: Float> WelfareSnapshot<T> {
    /// True when every numeric field is finite.
    ///
    /// A non-finite field is a derivation bug, not a runtime condition;
    /// the engine asserts this in debug builds after assembly.
    pub fn is_finite(&self) -> bool {
        let scalars = [
            self.consumer_surplus,
            self.producer_surplus,
            self.government_revenue,
            self.total_welfare,
            self.deadweight_loss,
            self.terms_of_trade_gain,
            self.production_distortion,
            self.consumption_distortion,
            self.quantity,
            self.quantity_demanded,
            self.quantity_supplied,
            self.consumer_price,
            self.producer_price,
        ];
        scalars.iter().all(|v| v.is_finite())
            && self.trade_gain.map_or(true, |v| v.is_finite())
            && [
                self.anchors.equilibrium_quantity,
                self.anchors.equilibrium_price,
                self.anchors.base_quantity,
                self.anchors.consumer_price,
                self.anchors.producer_price,
            ]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Component-wise difference against a baseline snapshot.
    ///
    /// The engine itself never compares snapshots; this is the caller's
    /// diff, typically current policy against [`welfare_core::Scenario::baseline`].
    pub fn net_change(&self, baseline: &WelfareSnapshot<T>) -> WelfareDelta<T> {
        WelfareDelta {
            consumer_surplus: self.consumer_surplus - baseline.consumer_surplus,
            producer_surplus: self.producer_surplus - baseline.producer_surplus,
            government_revenue: self.government_revenue - baseline.government_revenue,
            total_welfare: self.total_welfare - baseline.total_welfare,
            deadweight_loss: self.deadweight_loss - baseline.deadweight_loss,
        }
    }
}

/// Net change between two snapshots of the same market.
///
/// Positive values favour the current snapshot over the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WelfareDelta<T: Float> {
    /// Change in consumer surplus.
    pub consumer_surplus: T,
    /// Change in producer surplus.
    pub producer_surplus: T,
    /// Change in government revenue.
    pub government_revenue: T,
    /// Change in total welfare.
    pub total_welfare: T,
    /// Change in deadweight loss.
    pub deadweight_loss: T,
}
