//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Seed resolution (explicit or freshly drawn)
//! 2. Chunked sample generation, one [`PricerRng`] stream per chunk
//! 3. Parallel payoff accumulation on rayon
//! 4. Ordered reduction, discounting and standard error

use rayon::prelude::*;
use tracing::debug;
use vanilla_core::traits::PricingEngine;
use vanilla_core::types::{CancellationToken, OptionContract, PricingError};

use super::config::MonteCarloConfig;
use crate::rng::PricerRng;

/// Number of payoff samples per chunk (and per RNG stream).
pub const CHUNK_SIZE: usize = 16_384;

/// Monte Carlo price estimate with its sampling statistics.
///
/// # Examples
///
/// ```rust
/// use vanilla_engines::mc::MonteCarloEstimate;
///
/// let estimate = MonteCarloEstimate { price: 10.5, std_error: 0.05, n_paths: 100_000, seed: 42 };
/// assert!((estimate.confidence_95() - 0.098).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonteCarloEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the discounted mean.
    ///
    /// Computed as if payoffs were independent, which overstates the error
    /// when antithetic variates are enabled.
    pub std_error: f64,
    /// Number of payoff samples.
    pub n_paths: usize,
    /// Seed actually used (drawn from entropy if none was configured).
    pub seed: u64,
}

impl MonteCarloEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Running sums of one chunk.
#[derive(Clone, Copy, Debug, Default)]
struct ChunkSums {
    sum: f64,
    sum_sq: f64,
}

/// Terminal-price sampler for one contract.
#[derive(Clone, Copy, Debug)]
struct TerminalSampler {
    spot: f64,
    drift: f64,
    diffusion: f64,
}

impl TerminalSampler {
    fn new(contract: &OptionContract) -> Self {
        let vol = contract.volatility();
        let t = contract.maturity();
        Self {
            spot: contract.spot(),
            drift: (contract.rate() - 0.5 * vol * vol) * t,
            diffusion: vol * t.sqrt(),
        }
    }

    #[inline]
    fn terminal(&self, z: f64) -> f64 {
        self.spot * (self.drift + self.diffusion * z).exp()
    }
}

/// Monte Carlo pricing engine for European options.
///
/// Stateless apart from its configuration; every call builds fresh RNG
/// streams, so a pricer can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use vanilla_core::traits::PricingEngine;
/// use vanilla_core::types::{OptionContract, OptionKind};
/// use vanilla_engines::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder().num_simulations(20_000).seed(7).build().unwrap();
/// let pricer = MonteCarloPricer::new(config);
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Put).unwrap();
///
/// let first = pricer.price(&contract).unwrap();
/// let second = pricer.price(&contract).unwrap();
/// assert_eq!(first.to_bits(), second.to_bits());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer with a validated configuration.
    #[inline]
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Estimates the price together with its standard error.
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidConfig` if the configuration is out of range
    /// - `PricingError::Cancelled` if `cancel` fires before all chunks ran
    pub fn estimate(
        &self,
        contract: &OptionContract,
        cancel: &CancellationToken,
    ) -> Result<MonteCarloEstimate, PricingError> {
        self.config.validate()?;

        let n_paths = self.config.num_simulations();
        let seed = self.config.seed().unwrap_or_else(rand::random);
        let antithetic = self.config.antithetic();
        let sampler = TerminalSampler::new(contract);
        let n_chunks = n_paths.div_ceil(CHUNK_SIZE);

        debug!(
            n_paths,
            n_chunks,
            seed,
            antithetic,
            kind = %contract.kind(),
            "Monte Carlo simulation started"
        );

        // Collected in chunk order, so the reduction below is deterministic
        let chunks: Vec<ChunkSums> = (0..n_chunks)
            .into_par_iter()
            .map(|chunk| {
                cancel.check()?;
                let start = chunk * CHUNK_SIZE;
                let count = CHUNK_SIZE.min(n_paths - start);
                let mut rng = PricerRng::for_stream(seed, chunk as u64);
                Ok(if antithetic {
                    antithetic_chunk(contract, &sampler, &mut rng, count)
                } else {
                    plain_chunk(contract, &sampler, &mut rng, count)
                })
            })
            .collect::<Result<_, PricingError>>()?;

        let (sum, sum_sq) = chunks
            .iter()
            .fold((0.0, 0.0), |(s, sq), c| (s + c.sum, sq + c.sum_sq));

        let n = n_paths as f64;
        let mean = sum / n;
        let variance = if n_paths > 1 {
            ((sum_sq - n * mean * mean) / (n - 1.0)).max(0.0)
        } else {
            0.0
        };
        let discount = contract.discount_factor();

        let estimate = MonteCarloEstimate {
            price: discount * mean,
            std_error: discount * (variance / n).sqrt(),
            n_paths,
            seed,
        };

        debug!(
            price = estimate.price,
            std_error = estimate.std_error,
            "Monte Carlo simulation finished"
        );
        Ok(estimate)
    }
}

impl PricingEngine for MonteCarloPricer {
    fn price_with_cancel(
        &self,
        contract: &OptionContract,
        cancel: &CancellationToken,
    ) -> Result<f64, PricingError> {
        self.estimate(contract, cancel)
            .map(|estimate| estimate.price)
    }
}

fn plain_chunk(
    contract: &OptionContract,
    sampler: &TerminalSampler,
    rng: &mut PricerRng,
    count: usize,
) -> ChunkSums {
    let mut sums = ChunkSums::default();
    for _ in 0..count {
        let payoff = contract.payoff(sampler.terminal(rng.gen_normal()));
        sums.sum += payoff;
        sums.sum_sq += payoff * payoff;
    }
    sums
}

/// Each draw z yields payoffs for z and -z; an odd `count` uses only z for
/// the last draw.
fn antithetic_chunk(
    contract: &OptionContract,
    sampler: &TerminalSampler,
    rng: &mut PricerRng,
    count: usize,
) -> ChunkSums {
    let mut sums = ChunkSums::default();
    let mut remaining = count;
    while remaining > 0 {
        let z = rng.gen_normal();
        let payoff = contract.payoff(sampler.terminal(z));
        sums.sum += payoff;
        sums.sum_sq += payoff * payoff;
        remaining -= 1;

        if remaining > 0 {
            let mirrored = contract.payoff(sampler.terminal(-z));
            sums.sum += mirrored;
            sums.sum_sq += mirrored * mirrored;
            remaining -= 1;
        }
    }
    sums
}
