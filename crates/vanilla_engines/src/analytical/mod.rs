//! Closed-form valuation.
//!
//! - [`BlackScholes`]: the lognormal model with explicit d1/d2 and call/put
//!   prices
//! - [`BlackScholesEngine`]: the [`PricingEngine`](vanilla_core::traits::PricingEngine)
//!   adapter the dispatcher uses

mod black_scholes;

pub use black_scholes::{BlackScholes, BlackScholesEngine};
