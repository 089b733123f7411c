//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Every failure a pricing request can produce
//! - `ErrorKind`: The payload-free tag of a `PricingError`
//!
//! Errors are always returned as values; a pricing call either yields a
//! number or exactly one of these errors, never a partial result.

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Each variant carries the offending value so the front-end can render a
/// precise message without re-inspecting the request.
///
/// # Variants
/// - `InvalidMaturity`: Time to maturity not strictly positive (or not finite)
/// - `InvalidVolatility`: Volatility not strictly positive (or not finite)
/// - `InvalidSpot`: Spot price not strictly positive (or not finite)
/// - `InvalidStrike`: Strike not strictly positive (or not finite)
/// - `InvalidRate`: Risk-free rate not finite
/// - `InvalidOptionType`: Option kind other than call or put
/// - `InvalidModel`: Unrecognised model selector
/// - `InvalidConfig`: Non-positive or out-of-range step/simulation count
/// - `Cancelled`: Caller aborted the computation
///
/// # Examples
/// ```
/// use vanilla_core::types::{ErrorKind, PricingError};
///
/// let err = PricingError::InvalidMaturity { maturity: 0.0 };
/// assert_eq!(err.kind(), ErrorKind::InvalidMaturity);
/// assert_eq!(format!("{}", err), "Invalid maturity: T = 0 (must be > 0)");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Time to maturity is not strictly positive.
    #[error("Invalid maturity: T = {maturity} (must be > 0)")]
    InvalidMaturity {
        /// The rejected maturity in years
        maturity: f64,
    },

    /// Volatility is not strictly positive.
    #[error("Invalid volatility: σ = {volatility} (must be > 0)")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Spot price is not strictly positive.
    #[error("Invalid spot price: S = {spot} (must be > 0)")]
    InvalidSpot {
        /// The rejected spot price
        spot: f64,
    },

    /// Strike is not strictly positive.
    #[error("Invalid strike: K = {strike} (must be > 0)")]
    InvalidStrike {
        /// The rejected strike
        strike: f64,
    },

    /// Risk-free rate is NaN or infinite.
    #[error("Invalid risk-free rate: r = {rate} (must be finite)")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Option kind is neither call nor put.
    #[error("Invalid option type: '{value}' (expected 'call' or 'put')")]
    InvalidOptionType {
        /// The rejected option type string
        value: String,
    },

    /// Model selector is not recognised.
    #[error(
        "Invalid model: '{value}' (expected 'black_scholes', 'monte_carlo' or 'binomial_tree')"
    )]
    InvalidModel {
        /// The rejected model selector
        value: String,
    },

    /// Model configuration is out of range.
    #[error("Invalid config '{field}': {reason}")]
    InvalidConfig {
        /// Name of the offending configuration field
        field: &'static str,
        /// Description of the violated constraint
        reason: String,
    },

    /// The computation was aborted through a cancellation token.
    #[error("Pricing cancelled before completion")]
    Cancelled,
}

impl PricingError {
    /// Returns the payload-free kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::InvalidMaturity { .. } => ErrorKind::InvalidMaturity,
            PricingError::InvalidVolatility { .. } => ErrorKind::InvalidVolatility,
            PricingError::InvalidSpot { .. } => ErrorKind::InvalidSpot,
            PricingError::InvalidStrike { .. } => ErrorKind::InvalidStrike,
            PricingError::InvalidRate { .. } => ErrorKind::InvalidRate,
            PricingError::InvalidOptionType { .. } => ErrorKind::InvalidOptionType,
            PricingError::InvalidModel { .. } => ErrorKind::InvalidModel,
            PricingError::InvalidConfig { .. } => ErrorKind::InvalidConfig,
            PricingError::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Returns whether the error was caused by the request contents
    /// (as opposed to a caller-initiated abort).
    #[inline]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, PricingError::Cancelled)
    }
}

/// Tag identifying the category of a [`PricingError`].
///
/// Front-ends use this for programmatic handling (exit codes, HTTP status
/// mapping) while displaying the error's message to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// T ≤ 0
    InvalidMaturity,
    /// σ ≤ 0
    InvalidVolatility,
    /// S ≤ 0
    InvalidSpot,
    /// K ≤ 0
    InvalidStrike,
    /// r not finite
    InvalidRate,
    /// Option kind not in {call, put}
    InvalidOptionType,
    /// Unknown model selector
    InvalidModel,
    /// Non-positive count
    InvalidConfig,
    /// Caller-requested abort
    Cancelled,
}

impl ErrorKind {
    /// Returns the identifier used in serialised error payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidMaturity => "InvalidMaturity",
            ErrorKind::InvalidVolatility => "InvalidVolatility",
            ErrorKind::InvalidSpot => "InvalidSpot",
            ErrorKind::InvalidStrike => "InvalidStrike",
            ErrorKind::InvalidRate => "InvalidRate",
            ErrorKind::InvalidOptionType => "InvalidOptionType",
            ErrorKind::InvalidModel => "InvalidModel",
            ErrorKind::InvalidConfig => "InvalidConfig",
            ErrorKind::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_maturity_display() {
        let err = PricingError::InvalidMaturity { maturity: -1.0 };
        assert_eq!(format!("{}", err), "Invalid maturity: T = -1 (must be > 0)");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = PricingError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(
            format!("{}", err),
            "Invalid volatility: σ = -0.2 (must be > 0)"
        );
    }

    #[test]
    fn test_invalid_option_type_display() {
        let err = PricingError::InvalidOptionType {
            value: "straddle".to_string(),
        };
        assert!(err.to_string().contains("'straddle'"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = PricingError::InvalidConfig {
            field: "steps",
            reason: "must be positive, got 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid config 'steps': must be positive, got 0"
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            PricingError::InvalidSpot { spot: 0.0 }.kind(),
            ErrorKind::InvalidSpot
        );
        assert_eq!(
            PricingError::InvalidModel {
                value: "heston".to_string()
            }
            .kind(),
            ErrorKind::InvalidModel
        );
        assert_eq!(PricingError::Cancelled.kind(), ErrorKind::Cancelled);
    }

    #[test]
    fn test_is_invalid_input() {
        let err = PricingError::InvalidRate { rate: f64::NAN };
        assert!(err.is_invalid_input());
        assert!(!PricingError::Cancelled.is_invalid_input());
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::InvalidConfig.to_string(), "InvalidConfig");
        assert_eq!(ErrorKind::Cancelled.as_str(), "Cancelled");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::Cancelled;
        let _: &dyn std::error::Error = &err;
    }
}
