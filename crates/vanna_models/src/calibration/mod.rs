//! Implied volatility calibration module.
//!
//! This module inverts the pricing model against observed market prices:
//! - [`ImpliedVolSolver`]: configurable solver wrapping Levenberg-Marquardt
//! - [`implied_volatility`]: one-shot inversion with default settings
//! - [`ImpliedVolError`]: typed failures with recoverability classification
//!
//! # Example
//!
//! ```
//! use vanna_models::calibration::implied_volatility;
//! use vanna_models::instruments::OptionSide;
//!
//! let sigma = implied_volatility(10.45, 100.0, 100.0, 1.0, 0.05, OptionSide::Call).unwrap();
//! assert!((sigma - 0.2).abs() < 1e-3);
//! ```

mod error;
mod implied_vol;

pub use error::ImpliedVolError;
pub use implied_vol::{implied_volatility, ImpliedVolSolver};
