//! Recombining lattice valuation.
//!
//! - [`BinomialTree`]: Cox-Ross-Rubinstein tree with rayon-parallel wide levels

mod binomial;

pub use binomial::{BinomialTree, DEFAULT_STEPS, MAX_STEPS, PARALLEL_LEVEL_WIDTH};
