//! # vanilla_core: Foundation Layer for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! vanilla_core is the bottom layer of the workspace, providing:
//! - The validated option contract and its kind (`types::contract`)
//! - Structured pricing errors with a closed set of kinds (`types::error`)
//! - Cooperative cancellation with optional deadlines (`types::cancel`)
//! - Standard normal CDF/PDF (`math::distributions`)
//! - The `PricingEngine` trait implemented by every engine (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external
//! dependencies:
//! - num-traits: Generic floating-point functions
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use vanilla_core::math::distributions::norm_cdf;
//! use vanilla_core::types::{ErrorKind, OptionContract, OptionKind};
//!
//! let contract = OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap();
//! assert_eq!(contract.kind(), OptionKind::Call);
//!
//! let err = OptionContract::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionKind::Put).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidMaturity);
//!
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `OptionKind` and `ErrorKind`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
