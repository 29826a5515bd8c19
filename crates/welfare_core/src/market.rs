//! Linear market parameters with validation.
//!
//! This module provides the coefficient bundle for one linear
//! supply/demand market together with curve evaluation helpers.

use num_traits::Float;
use serde::Serialize;

use crate::error::MarketError;

/// Coefficients of one linear supply/demand market.
///
/// Demand is `P = a − b·Q`, supply is `P = c + d·Q`, with the slopes
/// `b` and `d` strictly positive so both curves are monotonic and cross
/// at most once in the positive quadrant. The intercept ordering
/// `a > c` is *not* enforced: markets whose curves fail to cross in the
/// positive quadrant are degenerate but representable, and solve to a
/// zero equilibrium quantity rather than an error.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use welfare_core::market::MarketParams;
///
/// let market = MarketParams::new(100.0_f64, 1.0, 20.0, 1.0).unwrap();
/// assert_eq!(market.demand_intercept(), 100.0);
/// assert_eq!(market.demand_price(40.0), 60.0);
/// assert_eq!(market.supply_price(40.0), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarketParams<T: Float> {
    demand_intercept: T,
    demand_slope: T,
    supply_intercept: T,
    supply_slope: T,
}

impl<T: Float> MarketParams<T> {
    /// Creates new market parameters with validation.
    ///
    /// # Arguments
    /// * `demand_intercept` - Choke price `a` of the demand curve
    /// * `demand_slope` - Demand slope `b` (must be positive)
    /// * `supply_intercept` - Supply intercept `c`
    /// * `supply_slope` - Supply slope `d` (must be positive)
    ///
    /// # Errors
    /// - `MarketError::NonFiniteParameter` if any coefficient is NaN/infinite
    /// - `MarketError::InvalidDemandSlope` if `demand_slope <= 0`
    /// - `MarketError::InvalidSupplySlope` if `supply_slope <= 0`
    ///
    /// # Examples
    /// ```
    /// use welfare_core::market::MarketParams;
    ///
    /// // Valid parameters
    /// let market = MarketParams::new(100.0_f64, 1.0, 20.0, 1.0);
    /// assert!(market.is_ok());
    ///
    /// // Invalid demand slope
    /// let invalid = MarketParams::new(100.0_f64, 0.0, 20.0, 1.0);
    /// assert!(invalid.is_err());
    /// ```
    pub fn new(
        demand_intercept: T,
        demand_slope: T,
        supply_intercept: T,
        supply_slope: T,
    ) -> Result<Self, MarketError> {
        let zero = T::zero();

        for (name, value) in [
            ("demand_intercept", demand_intercept),
            ("demand_slope", demand_slope),
            ("supply_intercept", supply_intercept),
            ("supply_slope", supply_slope),
        ] {
            if !value.is_finite() {
                return Err(MarketError::NonFiniteParameter { name });
            }
        }

        if demand_slope <= zero {
            return Err(MarketError::InvalidDemandSlope {
                slope: demand_slope.to_f64().unwrap_or(f64::NAN),
            });
        }

        if supply_slope <= zero {
            return Err(MarketError::InvalidSupplySlope {
                slope: supply_slope.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            demand_intercept,
            demand_slope,
            supply_intercept,
            supply_slope,
        })
    }

    /// Returns the demand intercept `a` (choke price).
    #[inline]
    pub fn demand_intercept(&self) -> T {
        self.demand_intercept
    }

    /// Returns the demand slope `b`.
    #[inline]
    pub fn demand_slope(&self) -> T {
        self.demand_slope
    }

    /// Returns the supply intercept `c`.
    #[inline]
    pub fn supply_intercept(&self) -> T {
        self.supply_intercept
    }

    /// Returns the supply slope `d`.
    #[inline]
    pub fn supply_slope(&self) -> T {
        self.supply_slope
    }

    /// Quantity demanded at a given price: `max(0, (a − p)/b)`.
    ///
    /// Floored at zero so prices above the choke price demand nothing.
    #[inline]
    pub fn quantity_demanded(&self, price: T) -> T {
        ((self.demand_intercept - price) / self.demand_slope).max(T::zero())
    }

    /// Quantity supplied at a given price: `max(0, (p − c)/d)`.
    ///
    /// Floored at zero so prices below the supply intercept produce nothing.
    #[inline]
    pub fn quantity_supplied(&self, price: T) -> T {
        ((price - self.supply_intercept) / self.supply_slope).max(T::zero())
    }

    /// Willingness-to-pay at a given quantity: `max(0, a − b·q)`.
    #[inline]
    pub fn demand_price(&self, quantity: T) -> T {
        (self.demand_intercept - self.demand_slope * quantity).max(T::zero())
    }

    /// Marginal cost at a given quantity: `c + d·q` (unclamped).
    #[inline]
    pub fn supply_price(&self, quantity: T) -> T {
        self.supply_intercept + self.supply_slope * quantity
    }
}
