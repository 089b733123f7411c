//! European vanilla option contract.
//!
//! An [`OptionContract`] bundles the six scalar inputs every engine needs.
//! It can only be built through [`OptionContract::new`], which enforces the
//! contract invariants, so engines never see unvalidated inputs.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Kind of European vanilla option.
///
/// # Examples
/// ```
/// use vanilla_core::types::OptionKind;
///
/// let call: OptionKind = "Call".parse().unwrap();
/// assert_eq!(call, OptionKind::Call);
/// assert_eq!(call.payoff(110.0, 100.0), 10.0);
///
/// assert!("straddle".parse::<OptionKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Call option: max(S_T - K, 0)
    Call,
    /// Put option: max(K - S_T, 0)
    Put,
}

impl OptionKind {
    /// Evaluates the terminal payoff for the given asset price and strike.
    #[inline]
    pub fn payoff(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns the lowercase identifier (`"call"` or `"put"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionKind::Call => "call",
            OptionKind::Put => "put",
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionKind::Call),
            "put" => Ok(OptionKind::Put),
            _ => Err(PricingError::InvalidOptionType {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable European option contract.
///
/// # Invariants
/// - `maturity > 0` and finite
/// - `volatility > 0` and finite
/// - `spot > 0` and finite
/// - `strike > 0` and finite
/// - `rate` finite (any sign)
///
/// # Examples
/// ```
/// use vanilla_core::types::{OptionContract, OptionKind};
///
/// let contract = OptionContract::new(100.0, 95.0, 0.5, -0.01, 0.3, OptionKind::Put).unwrap();
/// assert_eq!(contract.strike(), 95.0);
/// assert_eq!(contract.rate(), -0.01);
///
/// // Non-positive volatility is rejected
/// assert!(OptionContract::new(100.0, 95.0, 0.5, 0.01, -0.2, OptionKind::Put).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionContract {
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    kind: OptionKind,
}

impl OptionContract {
    /// Creates a validated contract.
    ///
    /// Checks run in a fixed order and the first violation is returned:
    /// maturity, volatility, spot, strike, rate.
    ///
    /// # Errors
    /// - `PricingError::InvalidMaturity` if maturity <= 0 or not finite
    /// - `PricingError::InvalidVolatility` if volatility <= 0 or not finite
    /// - `PricingError::InvalidSpot` if spot <= 0 or not finite
    /// - `PricingError::InvalidStrike` if strike <= 0 or not finite
    /// - `PricingError::InvalidRate` if rate is not finite
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        kind: OptionKind,
    ) -> Result<Self, PricingError> {
        if !is_strictly_positive(maturity) {
            return Err(PricingError::InvalidMaturity { maturity });
        }
        if !is_strictly_positive(volatility) {
            return Err(PricingError::InvalidVolatility { volatility });
        }
        if !is_strictly_positive(spot) {
            return Err(PricingError::InvalidSpot { spot });
        }
        if !is_strictly_positive(strike) {
            return Err(PricingError::InvalidStrike { strike });
        }
        if !rate.is_finite() {
            return Err(PricingError::InvalidRate { rate });
        }

        Ok(Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            kind,
        })
    }

    /// Returns the spot price (S).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years (T).
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Returns the continuously compounded risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the annualised volatility (σ).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the option kind.
    #[inline]
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Returns the discount factor e^(-rT) to maturity.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Returns the payoff of this contract for a terminal asset price.
    #[inline]
    pub fn payoff(&self, terminal: f64) -> f64 {
        self.kind.payoff(terminal, self.strike)
    }

    /// Returns a copy of this contract with a different kind.
    #[inline]
    pub fn with_kind(self, kind: OptionKind) -> Self {
        Self { kind, ..self }
    }
}

#[inline]
fn is_strictly_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}
