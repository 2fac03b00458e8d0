//! Cooperative cancellation.
//!
//! Tokens are polled once per outer DP iteration (once per column, or per
//! element for Hamming), never mid-inner-loop, so the worst-case latency
//! between requesting cancellation and the call unwinding is one column's
//! worth of work. All DP state is call-local, so nothing leaks on the way
//! out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::DistanceError;

/// A cloneable flag that a caller can raise to abort an in-flight
/// computation.
///
/// [`CancellationToken::none`] (also the `Default`) can never be cancelled
/// and costs nothing to poll.
///
/// # Examples
///
/// ```
/// use seqdist::CancellationToken;
///
/// let token = CancellationToken::new();
/// assert!(!token.is_cancelled());
/// token.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    flag: Option<Arc<AtomicBool>>,
}

impl CancellationToken {
    /// A token that can later be cancelled via [`cancel`](Self::cancel),
    /// from this handle or any clone of it.
    pub fn new() -> CancellationToken {
        CancellationToken {
            flag: Some(Arc::new(AtomicBool::new(false))),
        }
    }

    /// A token that is never cancelled.
    pub fn none() -> CancellationToken {
        CancellationToken { flag: None }
    }

    /// Requests cancellation. A no-op on [`none`](Self::none) tokens.
    pub fn cancel(&self) {
        if let Some(flag) = &self.flag {
            flag.store(true, Ordering::Relaxed);
        }
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }

    /// Checkpoint used by the engines.
    pub(crate) fn bail_if_cancelled(&self) -> Result<(), DistanceError> {
        if self.is_cancelled() {
            Err(DistanceError::Cancelled)
        } else {
            Ok(())
        }
    }
}
