//! # vanilla_engines: Valuation Engines for European Options
//!
//! ## Layer 2 (Engines) Role
//!
//! vanilla_engines builds on `vanilla_core` and provides:
//! - Closed-form Black-Scholes valuation (`analytical`)
//! - Parallel, reproducible Monte Carlo simulation (`mc`)
//! - Cox-Ross-Rubinstein binomial lattice (`lattice`)
//! - Seedable random number streams (`rng`)
//! - The validating dispatcher that front-ends call (`pricer`)
//!
//! ## Usage Example
//!
//! ```rust
//! use vanilla_engines::pricer::{Model, ModelConfig, Pricer};
//! use vanilla_core::types::{OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
//! let pricer = Pricer::new();
//!
//! let bs = pricer.price(Model::BlackScholes, &contract, &ModelConfig::default()).unwrap();
//! assert!((bs - 10.4506).abs() < 1e-3);
//!
//! let config = ModelConfig::default().with_simulations(20_000).with_seed(7);
//! let mc = pricer.price(Model::MonteCarlo, &contract, &config).unwrap();
//! assert!((mc - bs).abs() < 1.0);
//! ```
//!
//! ## Concurrency
//!
//! Engines are stateless; concurrent calls need no synchronisation. Monte
//! Carlo chunks and wide lattice levels run on the global rayon pool.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for `Model`, `ModelConfig` and `PriceRequest`

#![deny(missing_docs)]

pub mod analytical;
pub mod lattice;
pub mod mc;
pub mod pricer;
pub mod rng;
mod validation;

pub use pricer::{Model, ModelConfig, PriceRequest, Pricer};
