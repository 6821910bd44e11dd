//! Rate-limited occurrence signal
//!
//! Counts occurrences of a situation of interest and invokes an operation
//! every Nth time the situation occurs. The usual use is throttling a
//! diagnostic so a sustained overload condition stays visible without
//! flooding the log.

use crate::config::{ConfigError, ConfigResult};
use std::sync::atomic::{AtomicU64, Ordering};

/// Invokes a callback on every Nth call to [`signal`](EveryNth::signal)
///
/// The counter advance is a single atomic read-modify-write that wraps to
/// zero when it reaches `nth`, so exactly one caller per cycle observes the
/// wrap and runs the callback, regardless of interleaving. With `nth = 1`
/// every call invokes the callback.
#[derive(Debug)]
pub struct EveryNth {
    count: AtomicU64,
    nth: u64,
}

impl EveryNth {
    /// Create a signal firing once per `nth` occurrences
    pub fn new(nth: u64) -> ConfigResult<Self> {
        if nth == 0 {
            return Err(ConfigError::ValidationError(
                "nth must be a positive value".to_string(),
            ));
        }

        Ok(Self {
            count: AtomicU64::new(0),
            nth,
        })
    }

    /// Record one occurrence, invoking `op` if this is the Nth
    ///
    /// The callback runs synchronously on the calling thread. The first
    /// occurrence of each cycle is the invoking one, so a fresh signal
    /// fires immediately and then once per `nth` further occurrences.
    pub fn signal(&self, op: impl FnOnce()) {
        // Only one caller can advance the counter off zero per cycle; that
        // caller owns the invocation.
        let previous = self
            .count
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                Some(if count + 1 == self.nth { 0 } else { count + 1 })
            })
            .unwrap_or_else(|previous| previous);

        if previous == 0 {
            op();
        }
    }
}
