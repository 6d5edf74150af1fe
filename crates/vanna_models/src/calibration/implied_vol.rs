//! Implied volatility calibration using the Levenberg-Marquardt solver.
//!
//! This module inverts the Black-Scholes-Merton pricing formula: given an
//! observed market price, it recovers the volatility at which the model
//! reproduces that price.
//!
//! # Example
//!
//! ```
//! use vanna_models::analytical::call_price;
//! use vanna_models::calibration::implied_volatility;
//! use vanna_models::instruments::OptionSide;
//!
//! // Price an option at 20% volatility, then recover the volatility
//! let target = call_price(100.0, 100.0, 0.05, 0.2, 1.0).unwrap();
//! let sigma = implied_volatility(target, 100.0, 100.0, 1.0, 0.05, OptionSide::Call).unwrap();
//! assert!((sigma - 0.2).abs() < 1e-6);
//! ```

use vanna_core::math::solvers::{LMConfig, LevenbergMarquardtSolver};

use crate::analytical::{BlackScholes, BlackScholesParams};
use crate::instruments::OptionSide;

use super::error::ImpliedVolError;

/// Implied volatility solver wrapping Levenberg-Marquardt.
///
/// Minimises the squared price residual
/// `r(sigma)² = (market_price - model_price(sigma))²` over the volatility.
/// A solve succeeds only when the solver converges **and** the final price
/// residual is within `price_tolerance`; a stalled search that never
/// attains the market price is reported as
/// [`ImpliedVolError::NotConverged`].
///
/// Trial volatilities are fed to the model without validation, so the
/// search space is unconstrained. A market price that is only attainable
/// at negative volatility converges and is returned as-is.
///
/// # Example
///
/// ```
/// use vanna_core::math::solvers::LMConfig;
/// use vanna_models::analytical::put_price;
/// use vanna_models::calibration::ImpliedVolSolver;
/// use vanna_models::instruments::OptionSide;
///
/// let target = put_price(110.0, 105.0, 0.03, 0.3, 0.5).unwrap();
///
/// let solver = ImpliedVolSolver::new(LMConfig::default()).with_initial_guess(0.2);
/// let sigma = solver
///     .solve(target, 110.0, 105.0, 0.5, 0.03, OptionSide::Put)
///     .unwrap();
/// assert!((sigma - 0.3).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct ImpliedVolSolver {
    config: LMConfig,
    initial_guess: f64,
    price_tolerance: f64,
}

impl Default for ImpliedVolSolver {
    fn default() -> Self {
        Self {
            config: LMConfig::default(),
            initial_guess: 0.1,
            price_tolerance: 1e-6,
        }
    }
}

impl ImpliedVolSolver {
    /// Create a new solver with the given LM configuration.
    pub fn new(config: LMConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Set the initial volatility guess.
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Set the acceptable price residual at the solution.
    pub fn with_price_tolerance(mut self, price_tolerance: f64) -> Self {
        self.price_tolerance = price_tolerance;
        self
    }

    /// Get the LM configuration.
    pub fn config(&self) -> &LMConfig {
        &self.config
    }

    /// Get the initial volatility guess.
    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    /// Get the acceptable price residual.
    pub fn price_tolerance(&self) -> f64 {
        self.price_tolerance
    }

    /// Solve for the implied volatility of a European option.
    ///
    /// # Arguments
    ///
    /// * `market_price` - Observed option price (must be finite)
    /// * `spot` - Spot price of the underlying (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `maturity` - Time to maturity in years (must be positive)
    /// * `rate` - Risk-free rate
    /// * `side` - Call or Put
    ///
    /// # Returns
    ///
    /// The volatility at which the model reproduces `market_price`.
    ///
    /// # Errors
    ///
    /// * [`ImpliedVolError::InvalidMarketData`] - inputs rejected before iterating
    /// * [`ImpliedVolError::NotConverged`] - the search did not attain the price
    /// * [`ImpliedVolError::NumericalInstability`] - non-finite objective at the start
    pub fn solve(
        &self,
        market_price: f64,
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        side: OptionSide,
    ) -> Result<f64, ImpliedVolError> {
        if !market_price.is_finite() {
            return Err(ImpliedVolError::invalid_market_data(format!(
                "market price must be finite, got {market_price}"
            )));
        }
        if spot <= 0.0 {
            return Err(ImpliedVolError::invalid_market_data(format!(
                "spot must be positive, got {spot}"
            )));
        }
        if strike <= 0.0 {
            return Err(ImpliedVolError::invalid_market_data(format!(
                "strike must be positive, got {strike}"
            )));
        }
        if maturity <= 0.0 {
            return Err(ImpliedVolError::invalid_market_data(format!(
                "maturity must be positive, got {maturity}"
            )));
        }

        // Trial volatilities bypass parameter validation: the iteration may
        // probe zero or negative sigma, where the model follows IEEE
        // semantics and NaN trials are rejected by the solver.
        let residual = move |sigma: f64| {
            let params = BlackScholesParams {
                spot,
                strike,
                rate,
                volatility: sigma,
                expiry: maturity,
            };
            market_price - BlackScholes::new(params).price(side)
        };

        let solver = LevenbergMarquardtSolver::new(self.config);
        let result = solver.solve(residual, self.initial_guess)?;

        let residual_abs = result.residual_abs();
        if result.converged && residual_abs <= self.price_tolerance {
            Ok(result.param)
        } else {
            Err(ImpliedVolError::not_converged(
                result.iterations,
                residual_abs,
            ))
        }
    }
}

/// Solve for implied volatility with default solver settings.
///
/// # Arguments
///
/// * `market_price` - Observed option price
/// * `spot` - Spot price of the underlying
/// * `strike` - Strike price
/// * `maturity` - Time to maturity in years
/// * `rate` - Risk-free rate
/// * `side` - Call or Put
///
/// # Errors
///
/// See [`ImpliedVolSolver::solve`].
///
/// # Examples
///
/// ```
/// use vanna_models::calibration::implied_volatility;
/// use vanna_models::instruments::OptionSide;
///
/// let sigma = implied_volatility(10.45, 100.0, 100.0, 1.0, 0.05, OptionSide::Call).unwrap();
/// assert!((sigma - 0.2).abs() < 1e-3);
/// ```
pub fn implied_volatility(
    market_price: f64,
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    side: OptionSide,
) -> Result<f64, ImpliedVolError> {
    ImpliedVolSolver::with_defaults().solve(market_price, spot, strike, maturity, rate, side)
}
