//! Cox-Ross-Rubinstein binomial tree for European options.
//!
//! ## Parameterisation
//!
//! - Δt = T / n
//! - u = e^(σ√Δt), d = 1/u
//! - p = (e^(rΔt) - d) / (u - d)
//!
//! Terminal prices S·u^j·d^(n-j) are evaluated as S·e^(σ√Δt·(2j - n)),
//! which never under- or overflows through intermediate powers. Backward
//! induction runs level by level; nodes within a level are independent.
//!
//! ## Buffers
//!
//! One value buffer of n + 1 nodes. Levels narrower than
//! [`PARALLEL_LEVEL_WIDTH`] are rolled back in place. Wider levels are
//! computed into a scratch buffer on rayon and the buffers are swapped.
//! Both paths evaluate the same node expression, so the result does not
//! depend on which path ran.

use rayon::prelude::*;
use tracing::{debug, warn};
use vanilla_core::traits::PricingEngine;
use vanilla_core::types::{CancellationToken, OptionContract, PricingError};

use crate::validation::validate_count;

/// Number of steps used when none is specified.
pub const DEFAULT_STEPS: usize = 200;

/// Maximum number of steps allowed.
pub const MAX_STEPS: usize = 100_000;

/// Minimum level width (in nodes) that is rolled back in parallel.
pub const PARALLEL_LEVEL_WIDTH: usize = 4_096;

/// Cox-Ross-Rubinstein binomial tree engine.
///
/// # Examples
/// ```
/// use vanilla_core::traits::PricingEngine;
/// use vanilla_core::types::{OptionContract, OptionKind};
/// use vanilla_engines::lattice::BinomialTree;
///
/// let tree = BinomialTree::new(500).unwrap();
/// let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
/// let price = tree.price(&contract).unwrap();
/// assert!((price - 10.4506).abs() < 0.05);
///
/// assert!(BinomialTree::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialTree {
    steps: usize,
    parallel_width: usize,
}

impl Default for BinomialTree {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            parallel_width: PARALLEL_LEVEL_WIDTH,
        }
    }
}

impl BinomialTree {
    /// Creates a tree with `steps` time steps.
    ///
    /// # Errors
    /// `PricingError::InvalidConfig` if `steps` is 0 or exceeds [`MAX_STEPS`].
    pub fn new(steps: usize) -> Result<Self, PricingError> {
        validate_count("steps", steps, MAX_STEPS)?;
        Ok(Self {
            steps,
            ..Self::default()
        })
    }

    /// Overrides the level width from which levels are rolled back in
    /// parallel. `usize::MAX` forces the sequential path; 1 forces the
    /// parallel path for every level.
    #[inline]
    pub fn with_parallel_width(mut self, width: usize) -> Self {
        self.parallel_width = width.max(1);
        self
    }

    /// Returns the number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Rolls the lattice back from maturity to the root.
    fn roll_back(
        &self,
        contract: &OptionContract,
        cancel: &CancellationToken,
    ) -> Result<f64, PricingError> {
        let n = self.steps;
        let dt = contract.maturity() / n as f64;
        let vol_sqrt_dt = contract.volatility() * dt.sqrt();
        let u = vol_sqrt_dt.exp();
        let d = 1.0 / u;
        let growth = (contract.rate() * dt).exp();
        let p = (growth - d) / (u - d);

        if !(0.0..=1.0).contains(&p) {
            warn!(
                p,
                steps = n,
                "Risk-neutral probability outside [0, 1]; lattice may admit arbitrage"
            );
        }
        debug!(steps = n, u, d, p, kind = %contract.kind(), "Binomial roll-back started");

        let disc = (-contract.rate() * dt).exp();
        let disc_p = disc * p;
        let disc_q = disc * (1.0 - p);
        let node = |down: f64, up: f64| disc_p.mul_add(up, disc_q * down);

        let spot = contract.spot();
        let mut values: Vec<f64> = (0..=n)
            .map(|j| {
                let exponent = vol_sqrt_dt * (2.0 * j as f64 - n as f64);
                contract.payoff(spot * exponent.exp())
            })
            .collect();
        let mut scratch: Vec<f64> = Vec::new();

        for level in (0..n).rev() {
            cancel.check()?;
            let width = level + 1;

            if width >= self.parallel_width {
                if scratch.len() < values.len() {
                    scratch.resize(values.len(), 0.0);
                }
                let previous = &values;
                scratch[..width]
                    .par_iter_mut()
                    .enumerate()
                    .for_each(|(j, v)| *v = node(previous[j], previous[j + 1]));
                std::mem::swap(&mut values, &mut scratch);
            } else {
                for j in 0..width {
                    values[j] = node(values[j], values[j + 1]);
                }
            }
        }

        Ok(values[0])
    }
}

impl PricingEngine for BinomialTree {
    fn price_with_cancel(
        &self,
        contract: &OptionContract,
        cancel: &CancellationToken,
    ) -> Result<f64, PricingError> {
        validate_count("steps", self.steps, MAX_STEPS)?;
        self.roll_back(contract, cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytical::BlackScholes;
    use approx::assert_relative_eq;
    use vanilla_core::types::{ErrorKind, OptionKind};

    fn contract(kind: OptionKind) -> OptionContract {
        OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, kind).unwrap()
    }

    #[test]
    fn test_default_steps() {
        assert_eq!(BinomialTree::default().steps(), DEFAULT_STEPS);
    }

    #[test]
    fn test_invalid_step_counts() {
        assert_eq!(
            BinomialTree::new(0).unwrap_err().kind(),
            ErrorKind::InvalidConfig
        );
        assert!(BinomialTree::new(MAX_STEPS + 1).is_err());
        assert!(BinomialTree::new(MAX_STEPS).is_ok());
    }

    #[test]
    fn test_one_step_tree_by_hand() {
        let c = contract(OptionKind::Call);
        let u = 0.2_f64.exp();
        let d = 1.0 / u;
        let p = (0.05_f64.exp() - d) / (u - d);
        let expected = (-0.05_f64).exp() * p * (100.0 * u - 100.0);

        let price = BinomialTree::new(1).unwrap().price(&c).unwrap();
        assert_relative_eq!(price, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_close_to_black_scholes() {
        let bs = BlackScholes::new(100.0, 0.05, 0.2).unwrap();
        let tree = BinomialTree::new(200).unwrap();
        for kind in [OptionKind::Call, OptionKind::Put] {
            let price = tree.price(&contract(kind)).unwrap();
            let reference = bs.price_option(100.0, 1.0, kind);
            let error = (price - reference).abs();
            assert!(error < 0.05, "{kind}: {price} vs {reference}");
        }
    }

    #[test]
    fn test_put_call_parity_holds_on_lattice() {
        // The CRR tree is risk-neutral by construction, so parity is exact up to rounding
        let tree = BinomialTree::new(300).unwrap();
        let call = tree.price(&contract(OptionKind::Call)).unwrap();
        let put = tree.price(&contract(OptionKind::Put)).unwrap();
        let forward = 100.0 - 100.0 * (-0.05_f64).exp();
        assert_relative_eq!(call - put, forward, epsilon = 1e-9);
    }

    #[test]
    fn test_parallel_and_sequential_paths_agree() {
        let tree = BinomialTree::new(600).unwrap();
        for kind in [OptionKind::Call, OptionKind::Put] {
            let c = contract(kind);
            let sequential = tree.with_parallel_width(usize::MAX).price(&c).unwrap();
            let parallel = tree.with_parallel_width(1).price(&c).unwrap();
            let mixed = tree.with_parallel_width(300).price(&c).unwrap();
            assert_eq!(sequential.to_bits(), parallel.to_bits());
            assert_eq!(sequential.to_bits(), mixed.to_bits());
        }
    }

    #[test]
    fn test_degenerate_probability_still_prices() {
        // σ√Δt small relative to rΔt pushes p above 1
        let c = OptionContract::new(100.0, 100.0, 1.0, 0.5, 0.01, OptionKind::Call).unwrap();
        let price = BinomialTree::new(10).unwrap().price(&c).unwrap();
        assert!(price.is_finite());
    }

    #[test]
    fn test_cancelled_token_returns_error() {
        let token = CancellationToken::new();
        token.cancel();
        let result = BinomialTree::new(50)
            .unwrap()
            .price_with_cancel(&contract(OptionKind::Put), &token);
        assert_eq!(result, Err(PricingError::Cancelled));
    }
}
