//! Monte Carlo simulation configuration.

use vanilla_core::types::PricingError;

use crate::validation::validate_count;

/// Number of samples used when none is specified.
pub const DEFAULT_SIMULATIONS: usize = 100_000;

/// Maximum number of samples allowed.
pub const MAX_SIMULATIONS: usize = 100_000_000;

/// Monte Carlo simulation configuration.
///
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use vanilla_engines::mc::{MonteCarloConfig, DEFAULT_SIMULATIONS};
///
/// let config = MonteCarloConfig::builder().seed(42).build().unwrap();
/// assert_eq!(config.num_simulations(), DEFAULT_SIMULATIONS);
/// assert_eq!(config.seed(), Some(42));
/// assert!(!config.antithetic());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Total number of payoff samples (N).
    num_simulations: usize,
    /// Optional seed; `None` draws a fresh seed per call.
    seed: Option<u64>,
    /// Pair every draw z with -z.
    antithetic: bool,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_SIMULATIONS,
            seed: None,
            antithetic: false,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of payoff samples.
    #[inline]
    pub fn num_simulations(&self) -> usize {
        self.num_simulations
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether antithetic variates are enabled.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidConfig` if `num_simulations` is 0 or
    /// greater than [`MAX_SIMULATIONS`].
    pub fn validate(&self) -> Result<(), PricingError> {
        validate_count("num_simulations", self.num_simulations, MAX_SIMULATIONS)
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields fall back to their defaults; validation happens at build time.
///
/// # Examples
///
/// ```rust
/// use vanilla_engines::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .num_simulations(50_000)
///     .antithetic(true)
///     .build()
///     .expect("valid config");
/// assert!(config.antithetic());
///
/// assert!(MonteCarloConfig::builder().num_simulations(0).build().is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    num_simulations: Option<usize>,
    seed: Option<u64>,
    antithetic: bool,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of payoff samples, in [1, 100_000_000].
    #[inline]
    pub fn num_simulations(mut self, num_simulations: usize) -> Self {
        self.num_simulations = Some(num_simulations);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the optional seed directly.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidConfig` if the sample count is out of range.
    pub fn build(self) -> Result<MonteCarloConfig, PricingError> {
        let config = MonteCarloConfig {
            num_simulations: self.num_simulations.unwrap_or(DEFAULT_SIMULATIONS),
            seed: self.seed,
            antithetic: self.antithetic,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vanilla_core::types::ErrorKind;

    #[test]
    fn test_config_builder_defaults() {
        let config = MonteCarloConfig::builder().build().unwrap();
        assert_eq!(config, MonteCarloConfig::default());
        assert_eq!(config.num_simulations(), 100_000);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder_with_seed() {
        let config = MonteCarloConfig::builder()
            .num_simulations(1000)
            .seed(42)
            .build()
            .unwrap();
        assert_eq!(config.num_simulations(), 1000);
        assert_eq!(config.seed(), Some(42));
    }

    #[test]
    fn test_config_maybe_seed() {
        let config = MonteCarloConfig::builder()
            .seed(1)
            .maybe_seed(None)
            .build()
            .unwrap();
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_invalid_zero_simulations() {
        let err = MonteCarloConfig::builder()
            .num_simulations(0)
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfig);
        assert!(err.to_string().contains("num_simulations"));
    }

    #[test]
    fn test_config_invalid_too_many_simulations() {
        let result = MonteCarloConfig::builder()
            .num_simulations(MAX_SIMULATIONS + 1)
            .build();
        assert!(matches!(
            result,
            Err(PricingError::InvalidConfig {
                field: "num_simulations",
                ..
            })
        ));
    }

    #[test]
    fn test_config_upper_bound_inclusive() {
        assert!(MonteCarloConfig::builder()
            .num_simulations(MAX_SIMULATIONS)
            .build()
            .is_ok());
    }
}
