//! Black-Scholes-Merton model for European option pricing.
//!
//! This module provides the Black-Scholes-Merton closed-form solution for
//! pricing European options on a non-dividend-paying underlying, together
//! with the full set of first-order Greeks.
//!
//! # Mathematical Background
//!
//! The model prices European options with:
//! - S: spot price of the underlying
//! - K: strike price
//! - r: risk-free rate (continuous compounding)
//! - σ: volatility of the underlying
//! - T: time to expiry in years
//!
//! ## Call Option Price
//! C = S * N(d1) - K * e^(-r*T) * N(d2)
//!
//! ## Put Option Price
//! P = K * e^(-r*T) * N(-d2) - S * N(-d1)
//!
//! where:
//! d1 = [ln(S/K) + (r + σ²/2) * T] / (σ * √T)
//! d2 = d1 - σ * √T
//!
//! # Examples
//!
//! ```
//! use vanna_models::analytical::black_scholes::{BlackScholes, BlackScholesParams};
//! use vanna_models::instruments::OptionSide;
//!
//! let params = BlackScholesParams::new(
//!     100.0,  // spot
//!     100.0,  // strike
//!     0.05,   // risk-free rate (5%)
//!     0.2,    // volatility (20%)
//!     1.0,    // expiry (1 year)
//! ).unwrap();
//!
//! let model = BlackScholes::new(params);
//! let call_price = model.price(OptionSide::Call);
//! let put_price = model.price(OptionSide::Put);
//!
//! // Put-call parity check
//! let parity_diff = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
//! assert!(parity_diff.abs() < 1e-10);
//! ```

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionSide;
use num_traits::Float;

/// Parameters for the Black-Scholes-Merton model.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlackScholesParams<T: Float> {
    /// Spot price of the underlying.
    pub spot: T,
    /// Strike price.
    pub strike: T,
    /// Risk-free rate (continuous compounding).
    pub rate: T,
    /// Volatility of the underlying.
    pub volatility: T,
    /// Time to expiry in years.
    pub expiry: T,
}

impl<T: Float> BlackScholesParams<T> {
    /// Creates new Black-Scholes-Merton parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Risk-free rate (can be negative)
    /// * `volatility` - Volatility (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    ///
    /// # Errors
    ///
    /// Returns `AnalyticalError` if any parameter is invalid.
    pub fn new(
        spot: T,
        strike: T,
        rate: T,
        volatility: T,
        expiry: T,
    ) -> Result<Self, AnalyticalError> {
        if spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if strike <= T::zero() {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if volatility <= T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        if expiry <= T::zero() {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            volatility,
            expiry,
        })
    }

    /// Returns the forward price.
    ///
    /// F = S * exp(r * T)
    #[inline]
    pub fn forward(&self) -> T {
        self.spot * (self.rate * self.expiry).exp()
    }
}

/// Black-Scholes-Merton model for European option pricing.
///
/// Provides closed-form solutions for European options including
/// price and Greeks calculations.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    params: BlackScholesParams<T>,
    /// d1 term from the formula.
    d1: T,
    /// d2 term from the formula.
    d2: T,
    /// √T
    sqrt_t: T,
    /// e^(-r * T)
    discount: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes-Merton model instance.
    ///
    /// Pre-computes d1, d2, and the discount factor for efficiency.
    ///
    /// # Arguments
    ///
    /// * `params` - Model parameters
    pub fn new(params: BlackScholesParams<T>) -> Self {
        let sqrt_t = params.expiry.sqrt();
        let vol_sqrt_t = params.volatility * sqrt_t;

        // d1 = [ln(S/K) + (r + σ²/2) * T] / (σ * √T)
        let log_sk = (params.spot / params.strike).ln();
        let drift = params.rate + params.volatility * params.volatility / T::from(2.0).unwrap();
        let d1 = (log_sk + drift * params.expiry) / vol_sqrt_t;

        // d2 = d1 - σ * √T
        let d2 = d1 - vol_sqrt_t;

        // Discount factor
        let discount = (-params.rate * params.expiry).exp();

        Self {
            params,
            d1,
            d2,
            sqrt_t,
            discount,
        }
    }

    /// Returns a reference to the parameters.
    #[inline]
    pub fn params(&self) -> &BlackScholesParams<T> {
        &self.params
    }

    /// Returns d1.
    #[inline]
    pub fn d1(&self) -> T {
        self.d1
    }

    /// Returns d2.
    #[inline]
    pub fn d2(&self) -> T {
        self.d2
    }

    /// Computes the option price.
    ///
    /// # Arguments
    ///
    /// * `side` - Call or Put
    ///
    /// # Returns
    ///
    /// Option price.
    pub fn price(&self, side: OptionSide) -> T {
        match side {
            OptionSide::Call => {
                // C = S * N(d1) - K * e^(-r*T) * N(d2)
                let nd1 = norm_cdf(self.d1);
                let nd2 = norm_cdf(self.d2);
                self.params.spot * nd1 - self.params.strike * self.discount * nd2
            }
            OptionSide::Put => {
                // P = K * e^(-r*T) * N(-d2) - S * N(-d1)
                let nd1_neg = norm_cdf(-self.d1);
                let nd2_neg = norm_cdf(-self.d2);
                self.params.strike * self.discount * nd2_neg - self.params.spot * nd1_neg
            }
        }
    }

    /// Computes Delta.
    ///
    /// Delta measures the sensitivity of the option price to changes in spot.
    ///
    /// # Arguments
    ///
    /// * `side` - Call or Put
    ///
    /// # Returns
    ///
    /// Delta value, in (0, 1) for calls and (-1, 0) for puts.
    pub fn delta(&self, side: OptionSide) -> T {
        let nd1 = norm_cdf(self.d1);

        match side {
            OptionSide::Call => {
                // Δ_call = N(d1)
                nd1
            }
            OptionSide::Put => {
                // Δ_put = N(d1) - 1
                nd1 - T::one()
            }
        }
    }

    /// Computes Gamma.
    ///
    /// Gamma measures the rate of change of Delta with respect to spot.
    /// Same for both call and put options.
    ///
    /// Uses the volatility-scaled form Γ = φ(d1) / (S * σ² * √T), which is
    /// the textbook φ(d1) / (S * σ * √T) divided by σ.
    ///
    /// # Returns
    ///
    /// Gamma value.
    pub fn gamma(&self) -> T {
        let pdf_d1 = norm_pdf(self.d1);

        // Γ = φ(d1) / (S * σ² * √T)
        pdf_d1 / (self.params.spot * self.params.volatility * self.params.volatility * self.sqrt_t)
    }

    /// Computes Vega.
    ///
    /// Vega measures the sensitivity to volatility changes.
    /// Same for both call and put options.
    ///
    /// Uses the volatility-scaled form ν = S * σ * √T * φ(d1), which is the
    /// textbook S * √T * φ(d1) multiplied by σ.
    ///
    /// # Returns
    ///
    /// Vega value (per unit volatility change).
    pub fn vega(&self) -> T {
        let pdf_d1 = norm_pdf(self.d1);

        // ν = S * σ * √T * φ(d1)
        self.params.spot * self.params.volatility * self.sqrt_t * pdf_d1
    }

    /// Computes Theta.
    ///
    /// Theta measures the sensitivity to time decay.
    ///
    /// # Arguments
    ///
    /// * `side` - Call or Put
    ///
    /// # Returns
    ///
    /// Theta value (per year, no per-day rescaling).
    pub fn theta(&self, side: OptionSide) -> T {
        let pdf_d1 = norm_pdf(self.d1);
        let nd2 = norm_cdf(self.d2);

        let two = T::from(2.0).unwrap();
        let term1 =
            -(self.params.spot * pdf_d1 * self.params.volatility) / (two * self.sqrt_t);
        let rate_term = self.params.rate * self.params.strike * self.discount;

        match side {
            OptionSide::Call => {
                // Θ_call = -S * φ(d1) * σ / (2√T) - r * K * e^(-r*T) * N(d2)
                term1 - rate_term * nd2
            }
            OptionSide::Put => {
                // Θ_put = -S * φ(d1) * σ / (2√T) + r * K * e^(-r*T) * N(-d2)
                let nd2_neg = T::one() - nd2;
                term1 + rate_term * nd2_neg
            }
        }
    }

    /// Computes Rho.
    ///
    /// Rho measures the sensitivity to interest rate changes.
    ///
    /// # Arguments
    ///
    /// * `side` - Call or Put
    ///
    /// # Returns
    ///
    /// Rho value (per unit rate change).
    pub fn rho(&self, side: OptionSide) -> T {
        let nd2 = norm_cdf(self.d2);
        let strike_term = self.params.strike * self.params.expiry * self.discount;

        match side {
            OptionSide::Call => {
                // ρ_call = K * T * e^(-r*T) * N(d2)
                strike_term * nd2
            }
            OptionSide::Put => {
                // ρ_put = -K * T * e^(-r*T) * N(-d2)
                let nd2_neg = T::one() - nd2;
                -strike_term * nd2_neg
            }
        }
    }
}

/// Convenience function to price a European call option.
///
/// # Arguments
///
/// * `spot` - Spot price
/// * `strike` - Strike price
/// * `rate` - Risk-free rate
/// * `volatility` - Volatility
/// * `expiry` - Time to expiry in years
///
/// # Returns
///
/// Call option price.
pub fn call_price<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    expiry: T,
) -> Result<T, AnalyticalError> {
    let params = BlackScholesParams::new(spot, strike, rate, volatility, expiry)?;
    let model = BlackScholes::new(params);
    Ok(model.price(OptionSide::Call))
}

/// Convenience function to price a European put option.
///
/// # Arguments
///
/// * `spot` - Spot price
/// * `strike` - Strike price
/// * `rate` - Risk-free rate
/// * `volatility` - Volatility
/// * `expiry` - Time to expiry in years
///
/// # Returns
///
/// Put option price.
pub fn put_price<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    expiry: T,
) -> Result<T, AnalyticalError> {
    let params = BlackScholesParams::new(spot, strike, rate, volatility, expiry)?;
    let model = BlackScholes::new(params);
    Ok(model.price(OptionSide::Put))
}
