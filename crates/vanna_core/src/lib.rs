//! # vanna_core: Numerical Foundation for Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! vanna_core serves as the bottom layer of the two-layer architecture, providing:
//! - Damped least-squares optimisation (`math::solvers`)
//! - Error types: `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other vanna_* crates, with minimal external dependencies:
//! - thiserror: Structured error types
//! - serde: Serialisation support (optional)
//!
//! ## Stable Rust Toolchain
//!
//! Layer 1 can be built with stable Rust only (nightly not required).
//!
//! ## Usage Examples
//!
//! ```rust
//! use vanna_core::math::solvers::{LevenbergMarquardtSolver, LMConfig};
//!
//! // Find the root of x^2 - 2 by least squares
//! let solver = LevenbergMarquardtSolver::new(LMConfig::default());
//! let result = solver.solve(|x| x * x - 2.0, 1.0).unwrap();
//!
//! assert!(result.converged);
//! assert!((result.param - std::f64::consts::SQRT_2).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
