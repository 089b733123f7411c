//! Validating dispatcher: the single entry point front-ends call.
//!
//! [`Pricer`] checks every input once, picks the engine named by [`Model`]
//! and returns its value unchanged. Dispatch is a plain `match`; engines are
//! constructed per call and carry no state between calls.

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use vanilla_core::traits::PricingEngine;
use vanilla_core::types::{CancellationToken, OptionContract, OptionKind, PricingError};

use crate::analytical::BlackScholesEngine;
use crate::lattice::{BinomialTree, DEFAULT_STEPS, MAX_STEPS};
use crate::validation::validate_count;
use crate::mc::{MonteCarloConfig, MonteCarloPricer, DEFAULT_SIMULATIONS, MAX_SIMULATIONS};

/// Valuation method.
///
/// # Examples
/// ```
/// use vanilla_engines::pricer::Model;
///
/// assert_eq!("black-scholes".parse::<Model>().unwrap(), Model::BlackScholes);
/// assert_eq!("MC".parse::<Model>().unwrap(), Model::MonteCarlo);
/// assert_eq!("crr".parse::<Model>().unwrap(), Model::BinomialTree);
/// assert!("heston".parse::<Model>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Model {
    /// Closed-form Black-Scholes
    #[cfg_attr(feature = "serde", serde(alias = "black-scholes"))]
    BlackScholes,
    /// Risk-neutral Monte Carlo simulation
    #[cfg_attr(feature = "serde", serde(alias = "monte-carlo"))]
    MonteCarlo,
    /// Cox-Ross-Rubinstein binomial tree
    #[cfg_attr(feature = "serde", serde(alias = "binomial-tree"))]
    BinomialTree,
}

impl Model {
    /// Every model, in display order.
    pub const ALL: [Model; 3] = [Model::BlackScholes, Model::MonteCarlo, Model::BinomialTree];

    /// Returns the canonical identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::BlackScholes => "black_scholes",
            Model::MonteCarlo => "monte_carlo",
            Model::BinomialTree => "binomial_tree",
        }
    }

    /// Returns a human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Model::BlackScholes => "Black-Scholes",
            Model::MonteCarlo => "Monte Carlo",
            Model::BinomialTree => "Binomial Tree",
        }
    }
}

impl FromStr for Model {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "black_scholes" | "black-scholes" | "blackscholes" | "bs" => Ok(Model::BlackScholes),
            "monte_carlo" | "monte-carlo" | "montecarlo" | "mc" => Ok(Model::MonteCarlo),
            "binomial_tree" | "binomial-tree" | "binomial" | "crr" => Ok(Model::BinomialTree),
            _ => Err(PricingError::InvalidModel {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional per-model settings.
///
/// Unset counts fall back to [`DEFAULT_STEPS`] and [`DEFAULT_SIMULATIONS`].
/// Settings a model does not use are still validated when supplied.
///
/// # Examples
/// ```
/// use vanilla_engines::pricer::ModelConfig;
///
/// let config = ModelConfig::default().with_steps(400).with_seed(42);
/// assert_eq!(config.effective_steps(), 400);
/// assert_eq!(config.effective_simulations(), 100_000);
/// assert!(ModelConfig::default().with_steps(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelConfig {
    /// Binomial tree steps (n)
    pub steps: Option<usize>,
    /// Monte Carlo sample count (N)
    pub num_simulations: Option<usize>,
    /// Monte Carlo seed; `None` gives non-reproducible draws
    pub seed: Option<u64>,
    /// Monte Carlo antithetic variates
    pub antithetic: bool,
}

impl ModelConfig {
    /// Sets the tree step count.
    #[inline]
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Sets the Monte Carlo sample count.
    #[inline]
    pub fn with_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = Some(num_simulations);
        self
    }

    /// Sets the Monte Carlo seed.
    #[inline]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables antithetic variates.
    #[inline]
    pub fn with_antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Returns the step count after applying the default.
    #[inline]
    pub fn effective_steps(&self) -> usize {
        self.steps.unwrap_or(DEFAULT_STEPS)
    }

    /// Returns the sample count after applying the default.
    #[inline]
    pub fn effective_simulations(&self) -> usize {
        self.num_simulations.unwrap_or(DEFAULT_SIMULATIONS)
    }

    /// Checks every supplied count.
    ///
    /// # Errors
    /// `PricingError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), PricingError> {
        if let Some(steps) = self.steps {
            validate_count("steps", steps, MAX_STEPS)?;
        }
        if let Some(n) = self.num_simulations {
            validate_count("num_simulations", n, MAX_SIMULATIONS)?;
        }
        Ok(())
    }

    /// Builds the Monte Carlo configuration.
    pub fn monte_carlo(&self) -> Result<MonteCarloConfig, PricingError> {
        MonteCarloConfig::builder()
            .num_simulations(self.effective_simulations())
            .maybe_seed(self.seed)
            .antithetic(self.antithetic)
            .build()
    }

    /// Builds the binomial tree.
    pub fn binomial_tree(&self) -> Result<BinomialTree, PricingError> {
        BinomialTree::new(self.effective_steps())
    }
}

/// Flat, string-typed pricing request as collected by front-ends.
///
/// `Default` reproduces the HTTP API defaults: Black-Scholes call with
/// S = 100, K = 100, T = 1, r = 0.05, σ = 0.2.
///
/// Counts are signed so a front-end can pass through whatever the user
/// typed; non-positive values are rejected with `InvalidConfig`.
///
/// # Examples
/// ```
/// use vanilla_engines::pricer::{PriceRequest, Pricer};
///
/// let request = PriceRequest { option_type: "put".to_string(), ..PriceRequest::default() };
/// let price = Pricer::new().price_request(&request).unwrap();
/// assert!((price - 5.5735).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PriceRequest {
    /// Model selector
    pub model: String,
    /// Spot price (S)
    pub spot: f64,
    /// Strike (K)
    pub strike: f64,
    /// Time to maturity in years (T)
    pub maturity: f64,
    /// Risk-free rate (r)
    pub rate: f64,
    /// Volatility (σ)
    pub volatility: f64,
    /// `"call"` or `"put"`
    pub option_type: String,
    /// Binomial tree steps
    pub steps: Option<i64>,
    /// Monte Carlo sample count
    pub num_simulations: Option<i64>,
    /// Monte Carlo seed
    pub seed: Option<u64>,
    /// Monte Carlo antithetic variates
    pub antithetic: bool,
}

impl Default for PriceRequest {
    fn default() -> Self {
        Self {
            model: "black-scholes".to_string(),
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            option_type: "call".to_string(),
            steps: None,
            num_simulations: None,
            seed: None,
            antithetic: false,
        }
    }
}

impl PriceRequest {
    /// Parses and validates the request in the order
    /// contract, option type, model, config.
    pub fn parse(&self) -> Result<(Model, OptionContract, ModelConfig), PricingError> {
        let contract = OptionContract::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            OptionKind::Call,
        )?
        .with_kind(self.option_type.parse()?);
        let model = self.model.parse()?;

        let config = ModelConfig {
            steps: positive_count("steps", self.steps)?,
            num_simulations: positive_count("num_simulations", self.num_simulations)?,
            seed: self.seed,
            antithetic: self.antithetic,
        };
        config.validate()?;

        Ok((model, contract, config))
    }
}

fn positive_count(field: &'static str, value: Option<i64>) -> Result<Option<usize>, PricingError> {
    match value {
        None => Ok(None),
        Some(v) if v <= 0 => Err(PricingError::InvalidConfig {
            field,
            reason: format!("must be positive, got {v}"),
        }),
        Some(v) => usize::try_from(v)
            .map(Some)
            .map_err(|_| PricingError::InvalidConfig {
                field,
                reason: format!("out of range, got {v}"),
            }),
    }
}

/// Validating dispatcher over the three engines.
///
/// # Examples
/// ```
/// use vanilla_core::types::{ErrorKind, OptionContract, OptionKind};
/// use vanilla_engines::pricer::{Model, ModelConfig, Pricer};
///
/// let pricer = Pricer::new();
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
///
/// let tree = pricer
///     .price(Model::BinomialTree, &contract, &ModelConfig::default())
///     .unwrap();
/// assert!((tree - 10.45).abs() < 0.1);
///
/// let err = pricer
///     .price(Model::MonteCarlo, &contract, &ModelConfig::default().with_simulations(0))
///     .unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidConfig);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Pricer;

impl Pricer {
    /// Creates a pricer.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Prices `contract` with `model`.
    pub fn price(
        &self,
        model: Model,
        contract: &OptionContract,
        config: &ModelConfig,
    ) -> Result<f64, PricingError> {
        self.price_with_cancel(model, contract, config, &CancellationToken::never())
    }

    /// Prices `contract` with `model`, aborting with `Cancelled` once
    /// `cancel` fires.
    pub fn price_with_cancel(
        &self,
        model: Model,
        contract: &OptionContract,
        config: &ModelConfig,
        cancel: &CancellationToken,
    ) -> Result<f64, PricingError> {
        config.validate()?;
        debug!(
            model = %model,
            spot = contract.spot(),
            strike = contract.strike(),
            maturity = contract.maturity(),
            rate = contract.rate(),
            volatility = contract.volatility(),
            kind = %contract.kind(),
            "Dispatching pricing request"
        );

        match model {
            Model::BlackScholes => BlackScholesEngine.price_with_cancel(contract, cancel),
            Model::MonteCarlo => {
                MonteCarloPricer::new(config.monte_carlo()?).price_with_cancel(contract, cancel)
            }
            Model::BinomialTree => config.binomial_tree()?.price_with_cancel(contract, cancel),
        }
    }

    /// Parses, validates and prices a string-typed request.
    pub fn price_request(&self, request: &PriceRequest) -> Result<f64, PricingError> {
        let (model, contract, config) = request.parse()?;
        self.price(model, &contract, &config)
    }

    /// Prices `contract` with every model.
    pub fn price_all(
        &self,
        contract: &OptionContract,
        config: &ModelConfig,
    ) -> [(Model, Result<f64, PricingError>); 3] {
        Model::ALL.map(|model| (model, self.price(model, contract, config)))
    }
}
