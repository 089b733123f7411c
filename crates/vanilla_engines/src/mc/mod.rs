//! Monte Carlo valuation under risk-neutral geometric Brownian motion.
//!
//! European payoffs depend only on the terminal price, so each sample is a
//! single exact draw:
//!
//! S_T = S·exp((r - σ²/2)·T + σ·√T·Z), Z ~ N(0, 1)
//!
//! Samples are split into fixed-size chunks, each with its own
//! [`PricerRng`](crate::rng::PricerRng) stream, and the chunks are evaluated
//! on rayon. Per-chunk sums are reduced in chunk order so a seeded run is
//! bit-identical regardless of thread count.
//!
//! # Usage
//!
//! ```rust
//! use vanilla_engines::mc::{MonteCarloConfig, MonteCarloPricer};
//! use vanilla_core::types::{CancellationToken, OptionContract, OptionKind};
//!
//! let config = MonteCarloConfig::builder()
//!     .num_simulations(50_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
//!
//! let estimate = MonteCarloPricer::new(config)
//!     .estimate(&contract, &CancellationToken::never())
//!     .unwrap();
//! assert!((estimate.price - 10.45).abs() < 4.0 * estimate.std_error + 0.05);
//! ```

mod config;
mod pricer;

pub use config::{
    MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_SIMULATIONS, MAX_SIMULATIONS,
};
pub use pricer::{MonteCarloEstimate, MonteCarloPricer, CHUNK_SIZE};
