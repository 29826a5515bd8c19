//! Unregulated market equilibrium.
//!
//! Leaf dependency of every scenario derivation: the point where the
//! demand and supply curves cross, clamped to the positive quadrant.

use num_traits::Float;
use serde::Serialize;
use welfare_core::market::MarketParams;

/// Market-clearing point of the unregulated market.
///
/// Solving `a − b·Q = c + d·Q` gives `Q = (a − c)/(b + d)`; the quantity
/// is floored at zero so markets whose curves never cross in the
/// positive quadrant solve to a degenerate zero-trade equilibrium rather
/// than a negative quantity.
///
/// # Examples
/// ```
/// use welfare_core::MarketParams;
/// use welfare_engine::Equilibrium;
///
/// let market = MarketParams::new(100.0_f64, 1.0, 20.0, 1.0).unwrap();
/// let eq = Equilibrium::solve(&market);
/// assert_eq!(eq.quantity, 40.0);
/// assert_eq!(eq.price, 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Equilibrium<T: Float> {
    /// Market-clearing quantity `qE`.
    pub quantity: T,
    /// Market-clearing price `pE`.
    pub price: T,
}

impl<T: Float> Equilibrium<T> {
    /// Solves the unregulated equilibrium for a market.
    ///
    /// Infallible: degenerate markets clamp to zero quantity, in which
    /// case the price reported is the demand choke price.
    pub fn solve(market: &MarketParams<T>) -> Self {
        let quantity = ((market.demand_intercept() - market.supply_intercept())
            / (market.demand_slope() + market.supply_slope()))
        .max(T::zero());
        let price = market.demand_intercept() - market.demand_slope() * quantity;
        Self { quantity, price }
    }

    /// Total surplus at equilibrium: `0.5·(a − c)·qE`.
    ///
    /// This is the efficiency benchmark for every closed-economy
    /// scenario, and the base against which gains from trade are
    /// measured.
    #[inline]
    pub fn total_surplus(&self, market: &MarketParams<T>) -> T {
        let half = T::from(0.5).unwrap();
        half * (market.demand_intercept() - market.supply_intercept()) * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solve_reference_market() {
        let market = MarketParams::new(100.0_f64, 1.0, 20.0, 1.0).unwrap();
        let eq = Equilibrium::solve(&market);
        assert_relative_eq!(eq.quantity, 40.0);
        assert_relative_eq!(eq.price, 60.0);
    }

    #[test]
    fn test_solve_asymmetric_slopes() {
        // 100 - 2Q = 10 + Q  =>  Q = 30, P = 40
        let market = MarketParams::new(100.0_f64, 2.0, 10.0, 1.0).unwrap();
        let eq = Equilibrium::solve(&market);
        assert_relative_eq!(eq.quantity, 30.0);
        assert_relative_eq!(eq.price, 40.0);
    }

    #[test]
    fn test_solve_degenerate_market_clamps_to_zero() {
        // Supply intercept above the choke price: no trade.
        let market = MarketParams::new(20.0_f64, 1.0, 100.0, 1.0).unwrap();
        let eq = Equilibrium::solve(&market);
        assert_eq!(eq.quantity, 0.0);
        assert_eq!(eq.price, 20.0);
    }

    #[test]
    fn test_equilibrium_lies_on_both_curves() {
        let market = MarketParams::new(80.0_f64, 0.5, 5.0, 1.5).unwrap();
        let eq = Equilibrium::solve(&market);
        assert_relative_eq!(market.demand_price(eq.quantity), eq.price, epsilon = 1e-12);
        assert_relative_eq!(market.supply_price(eq.quantity), eq.price, epsilon = 1e-12);
    }

    #[test]
    fn test_total_surplus_reference_market() {
        let market = MarketParams::new(100.0_f64, 1.0, 20.0, 1.0).unwrap();
        let eq = Equilibrium::solve(&market);
        // 0.5 * (100 - 20) * 40 = 1600
        assert_relative_eq!(eq.total_surplus(&market), 1600.0);
    }

    #[test]
    fn test_total_surplus_degenerate_is_zero() {
        let market = MarketParams::new(20.0_f64, 1.0, 100.0, 1.0).unwrap();
        let eq = Equilibrium::solve(&market);
        assert_eq!(eq.total_surplus(&market), 0.0);
    }
}
