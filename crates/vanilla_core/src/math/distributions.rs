//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are generic over `T: Float` so they serve `f64` engines and `f32`
//! callers alike.

use num_traits::Float;

/// 1 / sqrt(2)
const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun 7.1.26 coefficients.
const ERFC_P: f64 = 0.327_591_1;
const ERFC_A: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

#[inline]
fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Complementary error function for non-negative arguments.
///
/// Abramowitz and Stegun 7.1.26, maximum absolute error 1.5e-7.
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
#[inline]
fn erfc_non_negative<T: Float>(x: T) -> T {
    let t = T::one() / (T::one() + constant::<T>(ERFC_P) * x);

    // Horner's method
    let poly = ERFC_A
        .iter()
        .rev()
        .fold(T::zero(), |acc, &a| constant::<T>(a) + t * acc);

    t * poly * (-x * x).exp()
}

/// Complementary error function with exact reflection.
///
/// erfc(-x) = 2 - erfc(x), so `erfc(x) + erfc(-x) == 2` up to one rounding.
/// Branches on the sign bit so that -0.0 reflects as well.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let tail = erfc_non_negative(x.abs());
    if x.is_sign_negative() {
        constant::<T>(2.0) - tail
    } else {
        tail
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// Absolute error below 1e-7 for all finite x. Because the underlying erfc
/// is reflected exactly, Φ(x) + Φ(-x) = 1 to machine precision, which keeps
/// Black-Scholes put-call parity tight.
///
/// # Examples
/// ```
/// use vanilla_core::math::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    constant::<T>(0.5) * erfc(-x * constant::<T>(FRAC_1_SQRT_2))
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use vanilla_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    constant::<T>(FRAC_1_SQRT_2PI) * (-constant::<T>(0.5) * x * x).exp()
}
