//! Policy scenario definitions.
//!
//! This module provides the closed set of market interventions the
//! welfare engine can evaluate, modelled as a tagged enum with
//! per-variant payloads so scenario dispatch is compiler-checked
//! exhaustive.

use num_traits::Float;
use serde::Serialize;

/// Country size assumption for trade policies.
///
/// A small country takes the world price as given; a large country's
/// policy measurably moves the world price (terms-of-trade effect).
///
/// # Examples
/// ```
/// use welfare_core::scenario::TradeScale;
///
/// assert!(TradeScale::Large.is_large());
/// assert!(!TradeScale::Small.is_large());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TradeScale {
    /// Price taker: world price is exogenous.
    Small,
    /// Market power: policy shifts the world price.
    Large,
}

impl TradeScale {
    /// Returns true for the large-country assumption.
    #[inline]
    pub fn is_large(&self) -> bool {
        matches!(self, TradeScale::Large)
    }
}

/// One of the nine mutually exclusive policy scenarios.
///
/// Each variant carries exactly the parameters its derivation needs;
/// there is no union of unrelated fields. Monetary payloads share the
/// currency unit of the market intercepts.
///
/// # Variants
/// - `Autarky`: unregulated market equilibrium, the reference state
/// - `Tax`: per-unit tax driven between demand and supply price
/// - `PriceCeiling`: maximum legal price (binds below equilibrium)
/// - `PriceFloor`: minimum legal price (binds above equilibrium)
/// - `Monopoly`: single seller choosing quantity where MR = MC
/// - `FreeTrade`: open economy at an exogenous world price
/// - `ImportTariff`: per-unit tariff on imports
/// - `ImportQuota`: quantity cap on imports
/// - `ExportSubsidy`: per-unit subsidy on exports
///
/// # Examples
/// ```
/// use welfare_core::scenario::{Scenario, TradeScale};
///
/// let tariff = Scenario::ImportTariff {
///     rate: 10.0,
///     world_price: 40.0,
///     scale: TradeScale::Small,
/// };
/// assert!(tariff.is_trade_intervention());
/// assert_eq!(tariff.baseline(), Scenario::FreeTrade { world_price: 40.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Scenario<T: Float> {
    /// Unregulated market equilibrium.
    Autarky,

    /// Per-unit tax of `rate` collected by the government.
    Tax {
        /// Tax per unit transacted (non-negative for a tax proper).
        rate: T,
    },

    /// Maximum legal price `cap`.
    PriceCeiling {
        /// The control price; only binds when below equilibrium.
        cap: T,
    },

    /// Minimum legal price `floor`.
    PriceFloor {
        /// The control price; only binds when above equilibrium.
        floor: T,
    },

    /// Single seller setting marginal revenue equal to marginal cost.
    Monopoly,

    /// Open economy transacting at the world price.
    FreeTrade {
        /// Exogenous world price.
        world_price: T,
    },

    /// Per-unit tariff on imports.
    ImportTariff {
        /// Tariff per imported unit.
        rate: T,
        /// World price before the tariff.
        world_price: T,
        /// Country size assumption.
        scale: TradeScale,
    },

    /// Quantity cap on imports.
    ImportQuota {
        /// Maximum import volume.
        volume: T,
        /// World price before the quota.
        world_price: T,
    },

    /// Per-unit subsidy on exports.
    ExportSubsidy {
        /// Subsidy per exported unit.
        rate: T,
        /// World price before the subsidy.
        world_price: T,
        /// Country size assumption.
        scale: TradeScale,
    },
}

impl<T: Float> Scenario<T> {
    /// True for scenarios that transact at a world price
    /// (free trade, tariff, quota, export subsidy).
    ///
    /// These scenarios measure consumer and producer surplus against
    /// the quantities demanded and supplied at the domestic price
    /// rather than the transacted quantity.
    pub fn is_trade_policy(&self) -> bool {
        matches!(
            self,
            Scenario::FreeTrade { .. }
                | Scenario::ImportTariff { .. }
                | Scenario::ImportQuota { .. }
                | Scenario::ExportSubsidy { .. }
        )
    }

    /// True for trade-distorting interventions (tariff, quota, subsidy).
    ///
    /// Their efficiency benchmark is free-trade welfare, not autarky.
    pub fn is_trade_intervention(&self) -> bool {
        matches!(
            self,
            Scenario::ImportTariff { .. }
                | Scenario::ImportQuota { .. }
                | Scenario::ExportSubsidy { .. }
        )
    }

    /// Returns the world price for trade scenarios, `None` otherwise.
    pub fn world_price(&self) -> Option<T> {
        match *self {
            Scenario::FreeTrade { world_price }
            | Scenario::ImportTariff { world_price, .. }
            | Scenario::ImportQuota { world_price, .. }
            | Scenario::ExportSubsidy { world_price, .. } => Some(world_price),
            _ => None,
        }
    }

    /// The reference scenario a policy should be compared against.
    ///
    /// Domestic policies and free trade itself are measured against the
    /// closed-economy equilibrium; trade interventions are measured
    /// against undistorted free trade at the same world price.
    ///
    /// # Examples
    /// ```
    /// use welfare_core::scenario::Scenario;
    ///
    /// assert_eq!(Scenario::Tax { rate: 5.0 }.baseline(), Scenario::Autarky);
    /// assert_eq!(
    ///     Scenario::ImportQuota { volume: 15.0, world_price: 40.0 }.baseline(),
    ///     Scenario::FreeTrade { world_price: 40.0 },
    /// );
    /// ```
    pub fn baseline(&self) -> Scenario<T> {
        if self.is_trade_intervention() {
            Scenario::FreeTrade {
                // world_price is always present for trade interventions
                world_price: self.world_price().unwrap_or_else(T::zero),
            }
        } else {
            Scenario::Autarky
        }
    }

    /// Human-readable scenario name for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Autarky => "Market Equilibrium (Autarky)",
            Scenario::Tax { .. } => "Specific Tax (Per-unit)",
            Scenario::PriceCeiling { .. } => "Price Ceiling",
            Scenario::PriceFloor { .. } => "Price Floor",
            Scenario::Monopoly => "Monopoly",
            Scenario::FreeTrade { .. } => "Free Trade (Import/Export)",
            Scenario::ImportTariff { .. } => "Specific Import Tariff",
            Scenario::ImportQuota { .. } => "Import Quota",
            Scenario::ExportSubsidy { .. } => "Export Subsidy",
        }
    }
}
