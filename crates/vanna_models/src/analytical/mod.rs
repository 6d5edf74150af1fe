//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Standard normal distribution helpers
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Formulas work with `f64` and `f32`
//! - **Validated parameters**: Construction fails fast on bad market inputs
//! - **Numerical Stability**: Polynomial CDF approximation accurate to 7.5e-8

pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use black_scholes::{call_price, put_price, BlackScholes, BlackScholesParams};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
