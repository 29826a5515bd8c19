//! # welfare_core: Market Primitives for Welfare Analysis
//!
//! Foundation layer of the welfare-analysis workspace, providing:
//! - Validated linear market parameters (`market::MarketParams`)
//! - The closed set of policy scenarios (`scenario::Scenario`)
//! - Error types (`error::MarketError`)
//!
//! ## Market model
//!
//! Every market is a pair of linear curves in the price/quantity plane:
//!
//! - Demand: `P = a − b·Q` (intercept `a`, slope `b > 0`)
//! - Supply: `P = c + d·Q` (intercept `c`, slope `d > 0`)
//!
//! All monetary values share the currency unit of the intercepts; all
//! quantities share the unit implied by the slopes. No unit conversion is
//! performed anywhere in the workspace.
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other welfare_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error types
//! - serde: Serialisation of value types
//!
//! ## Usage Examples
//!
//! ```rust
//! use welfare_core::market::MarketParams;
//! use welfare_core::scenario::Scenario;
//!
//! let market = MarketParams::new(100.0_f64, 1.0, 20.0, 1.0).unwrap();
//! assert_eq!(market.quantity_demanded(60.0), 40.0);
//! assert_eq!(market.quantity_supplied(60.0), 40.0);
//!
//! let policy = Scenario::Tax { rate: 10.0 };
//! assert!(!policy.is_trade_policy());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod market;
pub mod scenario;

pub use error::MarketError;
pub use market::MarketParams;
pub use scenario::{Scenario, TradeScale};
