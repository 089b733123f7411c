//! Cooperative cancellation for long-running pricing calls.
//!
//! Engines poll a [`CancellationToken`] at coarse checkpoints (per Monte
//! Carlo chunk, per lattice level). A token fires either when [`cancel`] is
//! called on any of its clones or when its deadline passes.
//!
//! [`cancel`]: CancellationToken::cancel

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::error::PricingError;

/// Shared cancellation flag with an optional deadline.
///
/// Cloning is cheap; all clones observe the same flag.
///
/// # Examples
/// ```
/// use vanilla_core::types::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
/// assert!(token.check().is_ok());
///
/// handle.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    /// Creates a token that fires only when cancelled explicitly.
    pub fn new() -> Self {
        Self {
            flag: Some(Arc::new(AtomicBool::new(false))),
            deadline: None,
        }
    }

    /// Creates a token that can never fire.
    #[inline]
    pub fn never() -> Self {
        Self {
            flag: None,
            deadline: None,
        }
    }

    /// Creates a token that fires at `deadline` or when cancelled.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::new()
        }
    }

    /// Creates a token that fires after `timeout` or when cancelled.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Returns the deadline, if any.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Requests cancellation. Has no effect on a `never()` token.
    pub fn cancel(&self) {
        if let Some(flag) = &self.flag {
            flag.store(true, Ordering::Release);
        }
    }

    /// Returns whether the token has fired.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        let flagged = self
            .flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Acquire));
        flagged || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Returns `Err(PricingError::Cancelled)` if the token has fired.
    #[inline]
    pub fn check(&self) -> Result<(), PricingError> {
        if self.is_cancelled() {
            Err(PricingError::Cancelled)
        } else {
            Ok(())
        }
    }
}
