//! # welfare_engine: Closed-Form Welfare Analysis
//!
//! Welfare-calculation engine for a single linear supply/demand market
//! under nine mutually exclusive policy scenarios.
//!
//! This crate provides:
//! - Equilibrium solver for the unregulated market (`equilibrium`)
//! - Scenario resolver deriving prices, quantities, and transfers (`resolver`)
//! - Surplus integrator computing CS/PS/DWL areas (`surplus`)
//! - Snapshot assembly into one immutable result record (`snapshot`)
//! - Engine configuration for large-country pass-through shares (`config`)
//!
//! ## Design Principles
//!
//! - **Pure and stateless**: one evaluation is one call; the engine keeps
//!   no state between calls and performs no I/O
//! - **Exhaustive scenario dispatch**: the nine scenarios are a closed
//!   enum matched in one place, so adding a scenario is a compile error
//!   until every derivation handles it
//! - **Non-binding is not an error**: a ceiling above equilibrium, a
//!   floor below it, or a trade policy whose world price does not bite
//!   returns the reference outcome with `binding = false`
//!
//! ## Usage Examples
//!
//! ```rust
//! use welfare_core::{MarketParams, Scenario};
//! use welfare_engine::WelfareModel;
//!
//! let market = MarketParams::new(100.0_f64, 1.0, 20.0, 1.0).unwrap();
//! let model = WelfareModel::new(market);
//!
//! let snapshot = model.evaluate(&Scenario::Autarky);
//! assert_eq!(snapshot.quantity, 40.0);
//! assert_eq!(snapshot.consumer_price, 60.0);
//! assert_eq!(snapshot.deadweight_loss, 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod equilibrium;
pub mod error;
pub mod model;
pub mod resolver;
pub mod snapshot;
pub mod surplus;

pub use config::EngineConfig;
pub use equilibrium::Equilibrium;
pub use error::EngineError;
pub use model::{compute_welfare, WelfareModel};
pub use snapshot::{ChartAnchors, WelfareDelta, WelfareSnapshot};
