//! Standard normal distribution functions.
//!
//! This module provides the distribution helpers shared by the analytical
//! pricing formulas:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! All functions are generic over `T: Float` so the same code serves
//! `f64` and `f32` callers.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Polynomial CDF approximation for non-negative arguments.
///
/// Uses the Zelen and Severo approximation (Abramowitz and Stegun formula
/// 26.2.17) which provides maximum absolute error of 7.5e-8 for all x >= 0.
///
/// # Mathematical Definition
/// Φ(x) = 1 - φ(x) * k * (b1 + k(b2 + k(b3 + k(b4 + k*b5)))),  k = 1/(1 + p*x)
///
/// Caller must pass x >= 0; negative arguments are handled by reflection
/// in [`norm_cdf`].
#[inline]
fn cdf_approx<T: Float>(x: T) -> T {
    let one = T::one();

    // Abramowitz and Stegun constants (26.2.17)
    let b1 = T::from(0.319381530).unwrap();
    let b2 = T::from(-0.356563782).unwrap();
    let b3 = T::from(1.781477937).unwrap();
    let b4 = T::from(-1.821255978).unwrap();
    let b5 = T::from(1.330274429).unwrap();
    let p = T::from(0.2316419).unwrap();

    // k = 1 / (1 + p * x)
    let k = one / (one + p * x);

    // Horner's method for polynomial evaluation
    let poly = b1 + k * (b2 + k * (b3 + k * (b4 + k * b5)));

    one - norm_pdf(x) * k * poly
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using a polynomial approximation
/// of the upper tail.
///
/// # Mathematical Definition
/// Φ(x) = (1/√(2π)) ∫_-∞^x e^(-t²/2) dt
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Accuracy
/// Accurate to at least 7.5e-8 for all finite x values. Negative arguments
/// use the reflection Φ(-x) = 1 - Φ(x), so the symmetry identity holds
/// exactly in floating point.
///
/// # Examples
/// ```
/// use vanna_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0_f64);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();

    // Φ(-x) = 1 - Φ(x)
    if x < T::zero() {
        one - cdf_approx(-x)
    } else {
        cdf_approx(x)
    }
}

/// Standard normal probability density function.
///
/// Computes the density φ(x) = (1 / sqrt(2π)) * exp(-x² / 2).
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use vanna_models::analytical::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
///
/// let pdf_1 = norm_pdf(1.0_f64);
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((pdf_1 - 0.2419707245).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    // φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    // -x² / 2
    let exponent = -half * x * x;

    frac_1_sqrt_2pi * exponent.exp()
}
