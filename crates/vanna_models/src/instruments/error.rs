//! Error types for instrument construction and mutation.

use thiserror::Error;

use crate::analytical::AnalyticalError;

/// Errors arising from invalid instrument parameters.
///
/// Every constructor and fallible setter on an instrument validates its
/// input and reports the offending field through one of these variants.
///
/// # Examples
///
/// ```
/// use vanna_models::instruments::{EuropeanOption, InstrumentError, OptionSide};
///
/// let result = EuropeanOption::new(-100.0, 100.0, 1.0, 0.05, 0.2, OptionSide::Call);
/// assert!(matches!(result, Err(InstrumentError::InvalidSpot { .. })));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstrumentError {
    /// Spot price must be positive.
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price.
        spot: f64,
    },

    /// Strike price must be positive.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike price.
        strike: f64,
    },

    /// Time to maturity must be positive.
    #[error("Invalid maturity: T = {maturity}")]
    InvalidMaturity {
        /// The invalid maturity in years.
        maturity: f64,
    },

    /// Volatility must be positive.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility.
        volatility: f64,
    },

    /// Option side string could not be parsed.
    #[error("Invalid option side: {side}")]
    InvalidSide {
        /// The unrecognised side string.
        side: String,
    },

    /// Other invalid parameter combination.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the problem.
        message: String,
    },
}

impl From<AnalyticalError> for InstrumentError {
    /// Maps pricing-layer validation errors onto instrument fields.
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidSpot { spot } => InstrumentError::InvalidSpot { spot },
            AnalyticalError::InvalidStrike { strike } => InstrumentError::InvalidStrike { strike },
            AnalyticalError::InvalidExpiry { expiry } => InstrumentError::InvalidMaturity {
                maturity: expiry,
            },
            AnalyticalError::InvalidVolatility { volatility } => {
                InstrumentError::InvalidVolatility { volatility }
            }
            AnalyticalError::NumericalInstability { message } => {
                InstrumentError::InvalidParameter { message }
            }
        }
    }
}
