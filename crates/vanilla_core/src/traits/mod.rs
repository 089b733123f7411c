//! Engine abstraction shared by every valuation method.
//!
//! Engines are selected through enum-based static dispatch in
//! `vanilla_engines::pricer`; there is no `Box<dyn PricingEngine>` registry.

use crate::types::{CancellationToken, OptionContract, PricingError};

/// A valuation method for European vanilla options.
///
/// # Contract
/// - `contract` is already validated, so implementations may assume
///   `T > 0` and `σ > 0`.
/// - Implementations carry no state between calls.
/// - Long-running implementations poll `cancel` and return
///   `PricingError::Cancelled` once it fires. Closed-form engines may ignore it.
///
/// # Examples
/// ```
/// use vanilla_core::traits::PricingEngine;
/// use vanilla_core::types::{CancellationToken, OptionContract, OptionKind, PricingError};
///
/// struct Intrinsic;
///
/// impl PricingEngine for Intrinsic {
///     fn price_with_cancel(
///         &self,
///         contract: &OptionContract,
///         _cancel: &CancellationToken,
///     ) -> Result<f64, PricingError> {
///         Ok(contract.payoff(contract.spot()))
///     }
/// }
///
/// let contract = OptionContract::new(110.0, 100.0, 1.0, 0.0, 0.2, OptionKind::Call).unwrap();
/// assert_eq!(Intrinsic.price(&contract).unwrap(), 10.0);
/// ```
pub trait PricingEngine {
    /// Prices `contract`, polling `cancel` at the engine's checkpoints.
    fn price_with_cancel(
        &self,
        contract: &OptionContract,
        cancel: &CancellationToken,
    ) -> Result<f64, PricingError>;

    /// Prices `contract` without a cancellation source.
    fn price(&self, contract: &OptionContract) -> Result<f64, PricingError> {
        self.price_with_cancel(contract, &CancellationToken::never())
    }
}
