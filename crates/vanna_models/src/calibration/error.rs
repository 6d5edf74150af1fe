//! Implied volatility calibration error types.

use thiserror::Error;

use vanna_core::types::SolverError;

/// Errors from implied volatility calibration.
///
/// Distinguishes input validation failures from solver breakdowns so that
/// callers can retry recoverable cases with different settings.
#[derive(Error, Debug, Clone)]
pub enum ImpliedVolError {
    /// The solver did not attain the market price.
    ///
    /// Raised when the iteration budget is exhausted, or when the residual
    /// minimum found is still further than `price_tolerance` from the
    /// target (e.g. a market price outside the model's attainable range).
    #[error(
        "Implied volatility search did not converge (iterations: {iterations}, residual: {residual:.6e})"
    )]
    NotConverged {
        /// Number of iterations performed.
        iterations: usize,
        /// Absolute price residual at the final volatility.
        residual: f64,
    },

    /// Market inputs failed validation before iterating.
    #[error("Invalid market data: {message}")]
    InvalidMarketData {
        /// Description of the validation failure.
        message: String,
    },

    /// Numerical breakdown inside the solver.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue.
        message: String,
    },
}

impl ImpliedVolError {
    /// Create a non-convergence error.
    pub fn not_converged(iterations: usize, residual: f64) -> Self {
        ImpliedVolError::NotConverged {
            iterations,
            residual,
        }
    }

    /// Create an invalid market data error.
    pub fn invalid_market_data(message: impl Into<String>) -> Self {
        ImpliedVolError::InvalidMarketData {
            message: message.into(),
        }
    }

    /// Create a numerical instability error.
    pub fn numerical_instability(message: impl Into<String>) -> Self {
        ImpliedVolError::NumericalInstability {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Recoverable errors might succeed with a different initial guess or
    /// solver settings. Invalid market data will fail regardless.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ImpliedVolError::NotConverged { .. } | ImpliedVolError::NumericalInstability { .. }
        )
    }
}

impl From<SolverError> for ImpliedVolError {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::NonFiniteObjective { x } => ImpliedVolError::NumericalInstability {
                message: format!("objective is not finite at sigma = {x}"),
            },
            SolverError::NumericalInstability(message) => {
                ImpliedVolError::NumericalInstability { message }
            }
        }
    }
}
