//! Core contract, error and cancellation types.
//!
//! This module provides:
//! - `contract`: The immutable [`OptionContract`] value type and [`OptionKind`]
//! - `error`: [`PricingError`] and its [`ErrorKind`] tag
//! - `cancel`: [`CancellationToken`] for aborting long-running engines
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod cancel;
pub mod contract;
pub mod error;

// Re-export commonly used types at module level
pub use cancel::CancellationToken;
pub use contract::{OptionContract, OptionKind};
pub use error::{ErrorKind, PricingError};
