//! # Vanna Models (L2: Pricing & Calibration)
//!
//! European option instruments, closed-form pricing, and implied
//! volatility calibration on top of [`vanna_core`].
//!
//! This crate provides:
//! - Instrument definitions (European calls and puts with mutable market inputs)
//! - Black-Scholes-Merton pricing with the full set of first-order Greeks
//! - Standard normal distribution helpers shared by the analytical formulas
//! - Implied volatility calibration via Levenberg-Marquardt
//!
//! ## Design Principles
//!
//! - **Validated construction**: market inputs are checked once, at the
//!   boundary, so pricing code never re-validates
//! - **Precomputed intermediates**: `d1`, `d2`, and discount factors are
//!   computed in constructors and shared across price and Greek formulas
//! - **Explicit errors** via `thiserror` at every fallible seam
//!
//! ## Usage Example
//!
//! ```
//! use vanna_models::instruments::{EuropeanOption, OptionSide};
//!
//! let option = EuropeanOption::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionSide::Call).unwrap();
//! let price = option.price();
//! assert!((price - 10.45).abs() < 0.01);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod calibration;
pub mod instruments;
