//! Numerical routines underpinning the pricing layer.
//!
//! This module provides:
//! - `solvers`: Least-squares optimisation for calibration problems

pub mod solvers;
