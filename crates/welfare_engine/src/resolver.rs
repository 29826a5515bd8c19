//! Scenario resolution.
//!
//! One exhaustive dispatch over the nine policy scenarios, each branch a
//! closed-form derivation of the scenario's clearing prices, transacted
//! quantity, government transfer, and terms-of-trade shift.
//!
//! Non-binding policies (a ceiling above equilibrium, a floor below it,
//! a tariff or quota whose world price is at or above equilibrium) fall
//! back to the equilibrium outcome with `binding = false` instead of
//! signalling an error: the policy exists but has no bite.

use num_traits::Float;
use welfare_core::market::MarketParams;
use welfare_core::scenario::Scenario;

use crate::config::EngineConfig;
use crate::equilibrium::Equilibrium;
use crate::snapshot::ChartAnchors;

/// Resolved market state under one policy scenario.
///
/// Intermediate product of the engine: prices and transfers from which
/// the surplus integrator computes areas. All quantities are floored at
/// zero; `government_transfer` and `terms_of_trade_gain` are signed.
///
/// Under the trade-restriction scenarios (tariff, quota, export subsidy)
/// `transacted` remains the equilibrium quantity: the domestic market no
/// longer clears at a single quantity, and the meaningful volumes are
/// the demanded and supplied quantities at the domestic price, which the
/// integrator derives from the resolved prices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<T: Float> {
    /// Quantity transacted domestically.
    pub transacted: T,
    /// Price faced by consumers.
    pub consumer_price: T,
    /// Price received by producers (marginal cost at quantity, under monopoly).
    pub producer_price: T,
    /// Signed government transfer: positive revenue, negative expenditure.
    pub government_transfer: T,
    /// Signed terms-of-trade gain (large-country scenarios only).
    pub terms_of_trade_gain: T,
    /// Supply-side efficiency-loss triangle (trade interventions only).
    pub production_distortion: T,
    /// Demand-side efficiency-loss triangle (trade interventions only).
    pub consumption_distortion: T,
    /// Whether the policy changed the outcome relative to its reference.
    pub binding: bool,
    /// Plotting coordinates.
    pub anchors: ChartAnchors<T>,
}

/// Resolves a scenario into prices, quantities, and transfers.
///
/// Pure function of its arguments; the equilibrium is passed in because
/// every branch needs it as the reference point.
pub fn resolve<T: Float>(
    market: &MarketParams<T>,
    scenario: &Scenario<T>,
    config: &EngineConfig<T>,
    equilibrium: &Equilibrium<T>,
) -> Resolution<T> {
    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let two = T::from(2.0).unwrap();

    let a = market.demand_intercept();
    let b = market.demand_slope();
    let c = market.supply_intercept();
    let d = market.supply_slope();
    let p_e = equilibrium.price;
    let q_e = equilibrium.quantity;

    let mut res = Resolution {
        transacted: q_e,
        consumer_price: p_e,
        producer_price: p_e,
        government_transfer: zero,
        terms_of_trade_gain: zero,
        production_distortion: zero,
        consumption_distortion: zero,
        binding: false,
        anchors: ChartAnchors::at_equilibrium(equilibrium),
    };

    match *scenario {
        Scenario::Autarky => {}

        Scenario::Tax { rate } => {
            // Demand price = supply price + tax: a - bQ = c + dQ + t.
            let q = ((a - c - rate) / (b + d)).max(zero);
            res.transacted = q;
            res.consumer_price = market.demand_price(q);
            res.producer_price = market.supply_price(q);
            res.government_transfer = rate * q;
            res.binding = rate > zero;
        }

        Scenario::PriceCeiling { cap } => {
            // Binds only below equilibrium; short side is supply.
            if cap < p_e {
                res.consumer_price = cap;
                res.producer_price = cap;
                res.transacted = market.quantity_supplied(cap);
                res.binding = true;
            }
        }

        Scenario::PriceFloor { floor } => {
            // Binds only above equilibrium; short side is demand.
            if floor > p_e {
                res.consumer_price = floor;
                res.producer_price = floor;
                res.transacted = market.quantity_demanded(floor);
                res.binding = true;
            }
        }

        Scenario::Monopoly => {
            // MR = MC: a - 2bQ = c + dQ.
            let q = ((a - c) / (two * b + d)).max(zero);
            res.transacted = q;
            res.consumer_price = market.demand_price(q);
            // Marginal cost at the monopoly quantity, kept for area geometry.
            res.producer_price = market.supply_price(q);
            res.binding = q < q_e;
            res.anchors.mr_intercept = Some(a);
            res.anchors.mr_slope = Some(two * b);
        }

        Scenario::FreeTrade { world_price } => {
            res.consumer_price = world_price;
            res.producer_price = world_price;
            let qd = market.quantity_demanded(world_price);
            let qs = market.quantity_supplied(world_price);
            // Import when qd > qs, export when qs > qd; the larger of the
            // two is the domestic volume actually moving at the world price.
            res.transacted = qd.max(qs);
            res.binding = world_price != p_e;
            res.anchors.world_price = Some(world_price);
            res.anchors.world_price_base = Some(world_price);
        }

        Scenario::ImportTariff {
            rate,
            world_price,
            scale,
        } => {
            res.anchors.world_price = Some(world_price);
            res.anchors.world_price_base = Some(world_price);
            // Only meaningful for an importing country.
            if world_price < p_e {
                let shift = if scale.is_large() {
                    rate * config.tariff_passthrough
                } else {
                    zero
                };
                let world_active = world_price - shift;
                let p_t = world_active + rate;

                res.consumer_price = p_t;
                res.producer_price = p_t;

                let qd = market.quantity_demanded(p_t);
                let qs = market.quantity_supplied(p_t);
                let imports = (qd - qs).max(zero);

                res.government_transfer = rate * imports;
                if scale.is_large() {
                    res.terms_of_trade_gain = shift * imports;
                }

                // Distortion triangles relative to the effective world price.
                let qd_world = market.quantity_demanded(world_active);
                let qs_world = market.quantity_supplied(world_active);
                let wedge = (p_t - world_active).abs();
                res.production_distortion = half * (qs - qs_world).abs() * wedge;
                res.consumption_distortion = half * (qd_world - qd).abs() * wedge;

                res.anchors.world_price = Some(world_active);
                res.binding = rate > zero;
            }
        }

        Scenario::ImportQuota {
            volume,
            world_price,
        } => {
            res.anchors.world_price = Some(world_price);
            res.anchors.world_price_base = Some(world_price);
            if world_price < p_e {
                // Price at which excess demand equals the quota volume.
                let p_quota = (d * a + b * c - b * d * volume) / (b + d);
                let effective = p_quota.max(world_price).min(p_e);

                res.consumer_price = effective;
                res.producer_price = effective;

                let qd = market.quantity_demanded(effective);
                let qs = market.quantity_supplied(effective);
                // Quota rent accrues to whoever holds the licences; it is
                // reported through the government transfer slot.
                res.government_transfer = (effective - world_price) * (qd - qs);

                let qd_world = market.quantity_demanded(world_price);
                let qs_world = market.quantity_supplied(world_price);
                let wedge = (effective - world_price).abs();
                res.production_distortion = half * (qs - qs_world).abs() * wedge;
                res.consumption_distortion = half * (qd_world - qd).abs() * wedge;

                res.binding = effective > world_price;
            }
        }

        Scenario::ExportSubsidy {
            rate,
            world_price,
            scale,
        } => {
            let drop = if scale.is_large() {
                rate * config.subsidy_passthrough
            } else {
                zero
            };
            let world_new = world_price - drop;
            let p_s = world_new + rate;

            res.consumer_price = p_s;
            res.producer_price = p_s;

            let qd = market.quantity_demanded(p_s);
            let qs = market.quantity_supplied(p_s);
            let exports = (qs - qd).max(zero);

            // Government pays the subsidy on every exported unit.
            res.government_transfer = -(rate * exports);
            // A large country depresses its own export price: a pure loss.
            res.terms_of_trade_gain = -((world_price - world_new) * exports);

            let qd_world = market.quantity_demanded(world_new);
            let qs_world = market.quantity_supplied(world_new);
            let wedge = (p_s - world_new).abs();
            res.consumption_distortion = half * (qd_world - qd).abs() * wedge;
            res.production_distortion = half * (qs - qs_world).abs() * wedge;

            res.binding = rate > zero;
            res.anchors.world_price = Some(world_price);
            res.anchors.world_price_base = Some(world_price);
            res.anchors.world_price_new = Some(world_new);
        }
    }

    res.anchors.base_quantity = res.transacted;
    res.anchors.consumer_price = res.consumer_price;
    res.anchors.producer_price = res.producer_price;
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use welfare_core::scenario::TradeScale;

    fn reference_market() -> MarketParams<f64> {
        MarketParams::new(100.0, 1.0, 20.0, 1.0).unwrap()
    }

    fn resolve_reference(scenario: &Scenario<f64>) -> Resolution<f64> {
        let market = reference_market();
        let eq = Equilibrium::solve(&market);
        resolve(&market, scenario, &EngineConfig::default(), &eq)
    }

    // ==========================================================
    // Autarky / Tax
    // ==========================================================

    #[test]
    fn test_autarky_is_equilibrium() {
        let res = resolve_reference(&Scenario::Autarky);
        assert_relative_eq!(res.transacted, 40.0);
        assert_relative_eq!(res.consumer_price, 60.0);
        assert_relative_eq!(res.producer_price, 60.0);
        assert_eq!(res.government_transfer, 0.0);
        assert!(!res.binding);
    }

    #[test]
    fn test_tax_wedge_and_revenue() {
        // t = 10: Q = (100 - 20 - 10)/2 = 35, Pc = 65, Pp = 55.
        let res = resolve_reference(&Scenario::Tax { rate: 10.0 });
        assert_relative_eq!(res.transacted, 35.0);
        assert_relative_eq!(res.consumer_price, 65.0);
        assert_relative_eq!(res.producer_price, 55.0);
        assert_relative_eq!(res.government_transfer, 350.0);
        assert!(res.binding);
        // The tax wedge equals the rate.
        assert_relative_eq!(res.consumer_price - res.producer_price, 10.0);
    }

    #[test]
    fn test_zero_tax_is_not_binding() {
        let res = resolve_reference(&Scenario::Tax { rate: 0.0 });
        assert_relative_eq!(res.transacted, 40.0);
        assert!(!res.binding);
    }

    #[test]
    fn test_prohibitive_tax_clamps_quantity() {
        let res = resolve_reference(&Scenario::Tax { rate: 200.0 });
        assert_eq!(res.transacted, 0.0);
        assert_eq!(res.government_transfer, 0.0);
    }

    // ==========================================================
    // Price controls
    // ==========================================================

    #[test]
    fn test_binding_ceiling_rations_supply() {
        // Cap 50 < Pe 60: Qs(50) = 30.
        let res = resolve_reference(&Scenario::PriceCeiling { cap: 50.0 });
        assert_relative_eq!(res.transacted, 30.0);
        assert_relative_eq!(res.consumer_price, 50.0);
        assert!(res.binding);
    }

    #[test]
    fn test_non_binding_ceiling_falls_back_to_equilibrium() {
        let res = resolve_reference(&Scenario::PriceCeiling { cap: 70.0 });
        assert_relative_eq!(res.transacted, 40.0);
        assert_relative_eq!(res.consumer_price, 60.0);
        assert!(!res.binding);
    }

    #[test]
    fn test_binding_floor_rations_demand() {
        // Floor 70 > Pe 60: Qd(70) = 30.
        let res = resolve_reference(&Scenario::PriceFloor { floor: 70.0 });
        assert_relative_eq!(res.transacted, 30.0);
        assert_relative_eq!(res.producer_price, 70.0);
        assert!(res.binding);
    }

    #[test]
    fn test_non_binding_floor_falls_back_to_equilibrium() {
        let res = resolve_reference(&Scenario::PriceFloor { floor: 50.0 });
        assert_relative_eq!(res.transacted, 40.0);
        assert!(!res.binding);
    }

    // ==========================================================
    // Monopoly
    // ==========================================================

    #[test]
    fn test_monopoly_restricts_output() {
        // Q = (100 - 20)/(2 + 1) = 26.67, Pm = 73.33, MC = 46.67.
        let res = resolve_reference(&Scenario::Monopoly);
        assert_relative_eq!(res.transacted, 80.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(res.consumer_price, 100.0 - 80.0 / 3.0, epsilon = 1e-10);
        assert_relative_eq!(res.producer_price, 20.0 + 80.0 / 3.0, epsilon = 1e-10);
        assert!(res.binding);
        assert_eq!(res.anchors.mr_intercept, Some(100.0));
        assert_eq!(res.anchors.mr_slope, Some(2.0));
    }

    // ==========================================================
    // Free trade
    // ==========================================================

    #[test]
    fn test_free_trade_import_case() {
        // Pw 40 < Pe 60: Qd = 60, Qs = 20, imports 40.
        let res = resolve_reference(&Scenario::FreeTrade { world_price: 40.0 });
        assert_relative_eq!(res.consumer_price, 40.0);
        assert_relative_eq!(res.transacted, 60.0);
        assert_eq!(res.anchors.world_price, Some(40.0));
        assert!(res.binding);
    }

    #[test]
    fn test_free_trade_export_case() {
        // Pw 70 > Pe 60: Qd = 30, Qs = 50, exports 20.
        let res = resolve_reference(&Scenario::FreeTrade { world_price: 70.0 });
        assert_relative_eq!(res.transacted, 50.0);
        assert_relative_eq!(res.producer_price, 70.0);
    }

    // ==========================================================
    // Import tariff
    // ==========================================================

    #[test]
    fn test_small_country_tariff() {
        // Pt = 40 + 10 = 50: Qd = 50, Qs = 30, imports 20, revenue 200.
        let res = resolve_reference(&Scenario::ImportTariff {
            rate: 10.0,
            world_price: 40.0,
            scale: TradeScale::Small,
        });
        assert_relative_eq!(res.consumer_price, 50.0);
        assert_relative_eq!(res.government_transfer, 200.0);
        assert_eq!(res.terms_of_trade_gain, 0.0);
        assert_eq!(res.anchors.world_price, Some(40.0));
        assert!(res.binding);
    }

    #[test]
    fn test_small_country_tariff_distortions() {
        // Wedge 10, Qs: 20 -> 30, Qd: 60 -> 50: both triangles 0.5*10*10 = 50.
        let res = resolve_reference(&Scenario::ImportTariff {
            rate: 10.0,
            world_price: 40.0,
            scale: TradeScale::Small,
        });
        assert_relative_eq!(res.production_distortion, 50.0);
        assert_relative_eq!(res.consumption_distortion, 50.0);
    }

    #[test]
    fn test_large_country_tariff_shifts_world_price() {
        // Shift = 0.3 * 10 = 3: P* = 37, Pt = 47, imports = 53 - 27 = 26.
        let res = resolve_reference(&Scenario::ImportTariff {
            rate: 10.0,
            world_price: 40.0,
            scale: TradeScale::Large,
        });
        assert_relative_eq!(res.consumer_price, 47.0);
        assert_relative_eq!(res.government_transfer, 260.0);
        assert_relative_eq!(res.terms_of_trade_gain, 3.0 * 26.0);
        assert_eq!(res.anchors.world_price, Some(37.0));
        assert_eq!(res.anchors.world_price_base, Some(40.0));
    }

    #[test]
    fn test_tariff_without_bite_falls_back() {
        // World price above equilibrium: an import tariff has no effect.
        let res = resolve_reference(&Scenario::ImportTariff {
            rate: 10.0,
            world_price: 80.0,
            scale: TradeScale::Small,
        });
        assert_relative_eq!(res.consumer_price, 60.0);
        assert_eq!(res.government_transfer, 0.0);
        assert!(!res.binding);
    }

    // ==========================================================
    // Import quota
    // ==========================================================

    #[test]
    fn test_quota_clears_at_quota_price() {
        // Excess demand equals 20 at P = 50: quota of 20 clears there.
        let res = resolve_reference(&Scenario::ImportQuota {
            volume: 20.0,
            world_price: 40.0,
        });
        assert_relative_eq!(res.consumer_price, 50.0);
        // Rent: (50 - 40) * (50 - 30) = 200.
        assert_relative_eq!(res.government_transfer, 200.0);
        assert!(res.binding);
    }

    #[test]
    fn test_generous_quota_clamps_to_world_price() {
        // Quota larger than free-trade imports (40): price stays at Pw.
        let res = resolve_reference(&Scenario::ImportQuota {
            volume: 60.0,
            world_price: 40.0,
        });
        assert_relative_eq!(res.consumer_price, 40.0);
        assert_eq!(res.government_transfer, 0.0);
        assert!(!res.binding);
    }

    #[test]
    fn test_zero_quota_clamps_to_equilibrium() {
        // Prohibitive quota: price rises no further than autarky.
        let res = resolve_reference(&Scenario::ImportQuota {
            volume: 0.0,
            world_price: 40.0,
        });
        assert_relative_eq!(res.consumer_price, 60.0);
        assert_relative_eq!(res.government_transfer, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_quota_without_bite_falls_back() {
        let res = resolve_reference(&Scenario::ImportQuota {
            volume: 20.0,
            world_price: 80.0,
        });
        assert_relative_eq!(res.consumer_price, 60.0);
        assert!(!res.binding);
    }

    // ==========================================================
    // Export subsidy
    // ==========================================================

    #[test]
    fn test_small_country_export_subsidy() {
        // Ps = 70 + 10 = 80: Qd = 20, Qs = 60, exports 40, outlay -400.
        let res = resolve_reference(&Scenario::ExportSubsidy {
            rate: 10.0,
            world_price: 70.0,
            scale: TradeScale::Small,
        });
        assert_relative_eq!(res.consumer_price, 80.0);
        assert_relative_eq!(res.government_transfer, -400.0);
        assert_eq!(res.terms_of_trade_gain, 0.0);
        assert!(res.binding);
    }

    #[test]
    fn test_large_country_export_subsidy_depresses_world_price() {
        // Drop = 0.4 * 10 = 4: P* = 66, Ps = 76, exports = 56 - 24 = 32.
        let res = resolve_reference(&Scenario::ExportSubsidy {
            rate: 10.0,
            world_price: 70.0,
            scale: TradeScale::Large,
        });
        assert_relative_eq!(res.consumer_price, 76.0);
        assert_relative_eq!(res.government_transfer, -320.0);
        // Terms-of-trade loss recorded as a negative gain.
        assert_relative_eq!(res.terms_of_trade_gain, -(4.0 * 32.0));
        assert_eq!(res.anchors.world_price_new, Some(66.0));
    }

    #[test]
    fn test_custom_passthrough_share() {
        let market = reference_market();
        let eq = Equilibrium::solve(&market);
        let config = EngineConfig::new().with_tariff_passthrough(0.5);
        let res = resolve(
            &market,
            &Scenario::ImportTariff {
                rate: 10.0,
                world_price: 40.0,
                scale: TradeScale::Large,
            },
            &config,
            &eq,
        );
        // Shift = 0.5 * 10 = 5: P* = 35, Pt = 45.
        assert_relative_eq!(res.consumer_price, 45.0);
        assert_eq!(res.anchors.world_price, Some(35.0));
    }

    // ==========================================================
    // Anchor consistency
    // ==========================================================

    #[test]
    fn test_anchors_mirror_resolution() {
        for scenario in [
            Scenario::Autarky,
            Scenario::Tax { rate: 10.0 },
            Scenario::PriceCeiling { cap: 50.0 },
            Scenario::Monopoly,
            Scenario::FreeTrade { world_price: 40.0 },
            Scenario::ImportQuota {
                volume: 20.0,
                world_price: 40.0,
            },
        ] {
            let res = resolve_reference(&scenario);
            assert_eq!(res.anchors.base_quantity, res.transacted);
            assert_eq!(res.anchors.consumer_price, res.consumer_price);
            assert_eq!(res.anchors.producer_price, res.producer_price);
        }
    }
}
