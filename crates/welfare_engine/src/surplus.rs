//! Surplus integration.
//!
//! Triangle and trapezoid areas between the linear curves and the
//! resolved prices: consumer surplus, producer surplus, total welfare,
//! and deadweight loss against the scenario's efficiency benchmark.

use num_traits::Float;
use welfare_core::market::MarketParams;
use welfare_core::scenario::Scenario;

use crate::equilibrium::Equilibrium;
use crate::resolver::Resolution;

/// Integrated surplus areas for one resolved scenario.
///
/// `consumer_surplus` and `producer_surplus` are clamped at zero;
/// `total_welfare` is the sum of the unclamped components plus the
/// government transfer and terms-of-trade gain, mirroring the additive
/// decomposition `W = CS + PS + G + ToT`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurplusBreakdown<T: Float> {
    /// Consumer surplus (clamped at zero).
    pub consumer_surplus: T,
    /// Producer surplus (clamped at zero).
    pub producer_surplus: T,
    /// Total welfare from the unclamped decomposition.
    pub total_welfare: T,
    /// Welfare of the efficiency benchmark (autarky or free trade).
    pub reference_welfare: T,
    /// `max(0, reference_welfare − total_welfare)`.
    pub deadweight_loss: T,
    /// Quantity demanded at the consumer price.
    pub quantity_demanded: T,
    /// Quantity supplied at the producer price.
    pub quantity_supplied: T,
}

/// Welfare of an open economy trading freely at `world_price`.
///
/// Sum of the consumer triangle above and the producer triangle below
/// the world price: `0.5·(a − pW)·Qd(pW) + 0.5·(pW − c)·Qs(pW)`.
pub fn free_trade_welfare<T: Float>(market: &MarketParams<T>, world_price: T) -> T {
    let half = T::from(0.5).unwrap();
    let qd = market.quantity_demanded(world_price);
    let qs = market.quantity_supplied(world_price);
    half * (market.demand_intercept() - world_price) * qd
        + half * (world_price - market.supply_intercept()) * qs
}

/// Integrates surplus areas for a resolved scenario.
///
/// Trade scenarios measure the consumer and producer areas against the
/// quantities demanded and supplied at the domestic price; domestic
/// scenarios use the transacted quantity on both sides. Two scenarios
/// need special geometry:
///
/// - A binding price ceiling rations demand to the supplied quantity,
///   so consumer surplus is the triangle up to the willingness-to-pay
///   at that quantity plus the rectangle between willingness-to-pay and
///   the ceiling.
/// - Under monopoly the received price and marginal cost diverge, so
///   producer surplus is revenue minus the area under the supply curve.
pub fn integrate<T: Float>(
    market: &MarketParams<T>,
    scenario: &Scenario<T>,
    equilibrium: &Equilibrium<T>,
    resolution: &Resolution<T>,
) -> SurplusBreakdown<T> {
    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let a = market.demand_intercept();
    let c = market.supply_intercept();
    let pc = resolution.consumer_price;
    let pp = resolution.producer_price;

    let qd = if scenario.is_trade_policy() {
        market.quantity_demanded(pc)
    } else {
        resolution.transacted
    };
    let qs = if scenario.is_trade_policy() {
        market.quantity_supplied(pp)
    } else {
        resolution.transacted
    };

    let consumer_surplus = match *scenario {
        Scenario::PriceCeiling { cap } if cap < equilibrium.price => {
            // Rationed demand: triangle up to willingness-to-pay at the
            // supplied quantity, plus the rectangle down to the ceiling.
            let willing = market.demand_price(qd);
            half * (a - willing) * qd + (willing - pc) * qd
        }
        _ => half * (a - pc) * qd,
    };

    let producer_surplus = match *scenario {
        // Revenue minus total cost as the area under the supply curve.
        Scenario::Monopoly => {
            pc * resolution.transacted - half * (pp + c) * resolution.transacted
        }
        _ => half * (pp - c) * qs,
    };

    let total_welfare = consumer_surplus
        + producer_surplus
        + resolution.government_transfer
        + resolution.terms_of_trade_gain;

    // Efficiency benchmark: free-trade welfare whenever the scenario's
    // world price is in play, autarky surplus otherwise.
    let reference_welfare = match *scenario {
        Scenario::ExportSubsidy { world_price, .. } => free_trade_welfare(market, world_price),
        Scenario::FreeTrade { world_price }
        | Scenario::ImportTariff { world_price, .. }
        | Scenario::ImportQuota { world_price, .. }
            if world_price < equilibrium.price =>
        {
            free_trade_welfare(market, world_price)
        }
        Scenario::FreeTrade { world_price } if world_price > equilibrium.price => {
            free_trade_welfare(market, world_price)
        }
        _ => equilibrium.total_surplus(market),
    };

    SurplusBreakdown {
        consumer_surplus: consumer_surplus.max(zero),
        producer_surplus: producer_surplus.max(zero),
        total_welfare,
        reference_welfare,
        deadweight_loss: (reference_welfare - total_welfare).max(zero),
        quantity_demanded: qd,
        quantity_supplied: qs,
    }
}
