//! # Random Number Generation
//!
//! Seedable standard-normal sources for the Monte Carlo engine.
//!
//! ## Design
//!
//! - **Reproducibility**: every generator is built from an explicit seed
//! - **Independent streams**: [`PricerRng::for_stream`] derives one
//!   generator per Monte Carlo chunk, so results do not depend on how
//!   rayon schedules chunks across threads
//! - **No global state**: generators are constructed per call and never
//!   shared between threads
//!
//! ## Usage Example
//!
//! ```rust
//! use vanilla_engines::rng::PricerRng;
//!
//! let mut rng = PricerRng::for_stream(12345, 3);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//!
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
