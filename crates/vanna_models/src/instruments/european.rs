//! European option contract.
//!
//! This module provides the `EuropeanOption` instrument combining validated
//! market parameters with an option side, delegating valuation to the
//! Black-Scholes-Merton model.

use std::fmt;

use crate::analytical::{BlackScholes, BlackScholesParams};

use super::error::InstrumentError;
use super::side::OptionSide;

/// European option instrument on a non-dividend-paying underlying.
///
/// Holds the full market parameter set (spot, strike, maturity, rate,
/// volatility) together with the option side. All valuation methods build
/// the Black-Scholes-Merton model on demand, so mutating a parameter via
/// the setters is immediately reflected in subsequent prices and Greeks.
///
/// With the `serde` feature, deserialization routes through
/// [`EuropeanOption::new`] and rejects out-of-domain parameters.
///
/// # Examples
///
/// ```
/// use vanna_models::instruments::{EuropeanOption, OptionSide};
///
/// let option = EuropeanOption::new(
///     100.0, // spot
///     100.0, // strike
///     1.0,   // maturity (years)
///     0.05,  // risk-free rate (5%)
///     0.2,   // volatility (20%)
///     OptionSide::Call,
/// )
/// .unwrap();
///
/// let price = option.price();
/// assert!((price - 10.45).abs() < 0.01);
///
/// // Greeks
/// let delta = option.delta();
/// assert!(delta > 0.0 && delta < 1.0);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawEuropeanOption"))]
pub struct EuropeanOption {
    params: BlackScholesParams<f64>,
    side: OptionSide,
}

/// Wire form of [`EuropeanOption`]; deserialization converts through
/// [`EuropeanOption::new`], so a deserialized contract passes the same
/// parameter validation as a constructed one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawEuropeanOption {
    params: BlackScholesParams<f64>,
    side: OptionSide,
}

#[cfg(feature = "serde")]
impl TryFrom<RawEuropeanOption> for EuropeanOption {
    type Error = InstrumentError;

    fn try_from(raw: RawEuropeanOption) -> Result<Self, Self::Error> {
        EuropeanOption::new(
            raw.params.spot,
            raw.params.strike,
            raw.params.expiry,
            raw.params.rate,
            raw.params.volatility,
            raw.side,
        )
    }
}

impl EuropeanOption {
    /// Creates a new European option.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot price of the underlying (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `maturity` - Time to maturity in years (must be positive)
    /// * `rate` - Risk-free rate, continuous compounding (can be negative)
    /// * `volatility` - Volatility of the underlying (must be positive)
    /// * `side` - Call or Put
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError` identifying the first invalid parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use vanna_models::instruments::{EuropeanOption, OptionSide};
    ///
    /// let put = EuropeanOption::new(110.0, 105.0, 0.5, 0.03, 0.3, OptionSide::Put).unwrap();
    /// assert!(put.side().is_put());
    /// ```
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        side: OptionSide,
    ) -> Result<Self, InstrumentError> {
        let params = BlackScholesParams::new(spot, strike, rate, volatility, maturity)?;
        Ok(Self { params, side })
    }

    /// Builds the pricing model from the current parameters.
    fn model(&self) -> BlackScholes<f64> {
        BlackScholes::new(self.params)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.params.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.params.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.params.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.params.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.params.volatility
    }

    /// Returns the option side.
    #[inline]
    pub fn side(&self) -> OptionSide {
        self.side
    }

    /// Sets the spot price.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidSpot` if `spot` is not positive.
    /// The option is left unchanged on error.
    pub fn set_spot(&mut self, spot: f64) -> Result<(), InstrumentError> {
        self.params = BlackScholesParams::new(
            spot,
            self.params.strike,
            self.params.rate,
            self.params.volatility,
            self.params.expiry,
        )?;
        Ok(())
    }

    /// Sets the strike price.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidStrike` if `strike` is not positive.
    /// The option is left unchanged on error.
    pub fn set_strike(&mut self, strike: f64) -> Result<(), InstrumentError> {
        self.params = BlackScholesParams::new(
            self.params.spot,
            strike,
            self.params.rate,
            self.params.volatility,
            self.params.expiry,
        )?;
        Ok(())
    }

    /// Sets the time to maturity in years.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidMaturity` if `maturity` is not
    /// positive. The option is left unchanged on error.
    pub fn set_maturity(&mut self, maturity: f64) -> Result<(), InstrumentError> {
        self.params = BlackScholesParams::new(
            self.params.spot,
            self.params.strike,
            self.params.rate,
            self.params.volatility,
            maturity,
        )?;
        Ok(())
    }

    /// Sets the volatility.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError::InvalidVolatility` if `volatility` is not
    /// positive. The option is left unchanged on error.
    pub fn set_volatility(&mut self, volatility: f64) -> Result<(), InstrumentError> {
        self.params = BlackScholesParams::new(
            self.params.spot,
            self.params.strike,
            self.params.rate,
            volatility,
            self.params.expiry,
        )?;
        Ok(())
    }

    /// Sets the risk-free rate. Any rate is accepted; negative rates are
    /// allowed.
    pub fn set_rate(&mut self, rate: f64) {
        self.params.rate = rate;
    }

    /// Sets the option side.
    pub fn set_side(&mut self, side: OptionSide) {
        self.side = side;
    }

    /// Computes the option price.
    pub fn price(&self) -> f64 {
        self.model().price(self.side)
    }

    /// Computes Delta, the sensitivity of the price to the spot.
    pub fn delta(&self) -> f64 {
        self.model().delta(self.side)
    }

    /// Computes Gamma, the rate of change of Delta with respect to the spot.
    pub fn gamma(&self) -> f64 {
        self.model().gamma()
    }

    /// Computes Vega, the sensitivity of the price to the volatility.
    pub fn vega(&self) -> f64 {
        self.model().vega()
    }

    /// Computes Theta, the time decay of the price (per year).
    pub fn theta(&self) -> f64 {
        self.model().theta(self.side)
    }

    /// Computes Rho, the sensitivity of the price to the rate.
    pub fn rho(&self) -> f64 {
        self.model().rho(self.side)
    }

    /// Returns the d1 term of the pricing formula.
    pub fn d1(&self) -> f64 {
        self.model().d1()
    }

    /// Returns the d2 term of the pricing formula.
    pub fn d2(&self) -> f64 {
        self.model().d2()
    }
}

impl fmt::Display for EuropeanOption {
    /// Formats a one-line contract summary.
    ///
    /// Rates and volatilities are shown in percent and the premium is
    /// rounded to cents. The premium column is labelled `C` for both sides.
    ///
    /// # Examples
    ///
    /// ```
    /// use vanna_models::instruments::{EuropeanOption, OptionSide};
    ///
    /// let option = EuropeanOption::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionSide::Call).unwrap();
    /// assert_eq!(
    ///     option.to_string(),
    ///     "European call option | S0 = $100 | K = $100 | T = 1 year | r = 5.0% | sigma = 20.0% | C = $10.45"
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.params.expiry == 1.0 {
            "year"
        } else {
            "years"
        };
        write!(
            f,
            "European {} option | S0 = ${} | K = ${} | T = {} {} | r = {:?}% | sigma = {:?}% | C = ${:.2}",
            self.side,
            self.params.spot,
            self.params.strike,
            self.params.expiry,
            unit,
            self.params.rate * 100.0,
            self.params.volatility * 100.0,
            self.price(),
        )
    }
}
