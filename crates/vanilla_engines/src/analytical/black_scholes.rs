//! Black-Scholes pricing model for European options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use tracing::debug;
use vanilla_core::math::norm_cdf;
use vanilla_core::traits::PricingEngine;
use vanilla_core::types::{CancellationToken, OptionContract, OptionKind, PricingError};

/// Black-Scholes model for European option pricing.
///
/// Holds the market state (spot, rate, volatility); strike and expiry are
/// passed per valuation.
///
/// # Examples
/// ```
/// use vanilla_engines::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free interest rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model.
    ///
    /// # Errors
    /// - `PricingError::InvalidSpot` if spot <= 0 or not finite
    /// - `PricingError::InvalidVolatility` if volatility <= 0 or not finite
    /// - `PricingError::InvalidRate` if rate is not finite
    ///
    /// # Examples
    /// ```
    /// use vanilla_engines::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(-100.0, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, PricingError> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(PricingError::InvalidSpot { spot });
        }
        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(PricingError::InvalidVolatility { volatility });
        }
        if !rate.is_finite() {
            return Err(PricingError::InvalidRate { rate });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Builds the model from a validated contract's market inputs.
    #[inline]
    pub fn from_contract(contract: &OptionContract) -> Self {
        Self {
            spot: contract.spot(),
            rate: contract.rate(),
            volatility: contract.volatility(),
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    ///
    /// `expiry` must be strictly positive.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.rate + 0.5 * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call price.
    ///
    /// # Examples
    /// ```
    /// use vanilla_engines::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// assert!((bs.price_call(100.0, 1.0) - 10.4506).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        self.spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes the European put price.
    ///
    /// # Examples
    /// ```
    /// use vanilla_engines::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
    /// assert!((bs.price_put(100.0, 1.0) - 5.5735).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let discount = (-self.rate * expiry).exp();

        strike * discount * norm_cdf(-d2) - self.spot * norm_cdf(-d1)
    }

    /// Prices a call or put.
    #[inline]
    pub fn price_option(&self, strike: f64, expiry: f64, kind: OptionKind) -> f64 {
        match kind {
            OptionKind::Call => self.price_call(strike, expiry),
            OptionKind::Put => self.price_put(strike, expiry),
        }
    }

    /// Prices a validated contract using its own spot, rate and volatility.
    ///
    /// # Examples
    /// ```
    /// use vanilla_core::types::{OptionContract, OptionKind};
    /// use vanilla_engines::analytical::BlackScholes;
    ///
    /// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
    /// assert!((BlackScholes::price(&contract) - 10.4506).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price(contract: &OptionContract) -> f64 {
        let model = Self::from_contract(contract);
        model.price_option(contract.strike(), contract.maturity(), contract.kind())
    }
}

/// Closed-form engine. Deterministic, O(1), ignores cancellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholesEngine;

impl PricingEngine for BlackScholesEngine {
    fn price_with_cancel(
        &self,
        contract: &OptionContract,
        _cancel: &CancellationToken,
    ) -> Result<f64, PricingError> {
        let model = BlackScholes::from_contract(contract);
        let price = BlackScholes::price(contract);
        debug!(
            kind = %contract.kind(),
            d1 = model.d1(contract.strike(), contract.maturity()),
            price,
            "Black-Scholes valuation"
        );
        Ok(price)
    }
}
