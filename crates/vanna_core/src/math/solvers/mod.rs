//! Optimisation solvers for numerical computation.
//!
//! This module provides least-squares optimisation designed for financial
//! applications such as implied volatility calculation and model parameter
//! fitting.
//!
//! ## Available Solvers
//!
//! - [`LevenbergMarquardtSolver`]: Damped least-squares for one-parameter
//!   calibration problems
//!
//! ## Configuration
//!
//! The solver is configured through [`LMConfig`]:
//! - `tolerance`: Convergence tolerance on the residual (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//! - damping controls: `initial_lambda`, `lambda_up`, `lambda_down` and the
//!   `min_lambda`/`max_lambda` clamps
//!
//! ## Examples
//!
//! ```
//! use vanna_core::math::solvers::{LevenbergMarquardtSolver, LMConfig};
//!
//! // Solve x² - 2 = 0 (find √2)
//! let solver = LevenbergMarquardtSolver::new(LMConfig::default());
//! let result = solver.solve(|x| x * x - 2.0, 1.0).unwrap();
//!
//! assert!(result.converged);
//! assert!((result.param - std::f64::consts::SQRT_2).abs() < 1e-6);
//! ```

mod levenberg_marquardt;

// Re-export public types at module level
pub use levenberg_marquardt::{LMConfig, LMResult, LevenbergMarquardtSolver};
