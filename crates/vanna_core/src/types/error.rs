//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolverError`: Errors from least-squares solver operations

use thiserror::Error;

/// Least-squares solver errors.
///
/// Provides structured error handling for solver operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `NonFiniteObjective`: Objective evaluated to NaN or infinity at the start point
/// - `NumericalInstability`: General numerical instability
///
/// # Examples
/// ```
/// use vanna_core::types::SolverError;
///
/// let err = SolverError::NonFiniteObjective { x: 0.5 };
/// assert_eq!(format!("{}", err), "Objective is not finite at x = 0.5");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Objective function returned NaN or infinity at the starting point.
    #[error("Objective is not finite at x = {x}")]
    NonFiniteObjective {
        /// Parameter value where the objective was evaluated.
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}
