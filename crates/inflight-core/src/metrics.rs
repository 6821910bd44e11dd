//! Correlation health metrics
//!
//! Atomic counters for monitoring correlator behavior. Counters use
//! relaxed ordering; they are observability data, not synchronization.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters kept by a correlator
#[derive(Debug, Default)]
pub struct CorrelatorMetrics {
    /// Starts stored for later completion
    pub starts_admitted: AtomicU64,
    /// Starts dropped because the store was full
    pub starts_rejected: AtomicU64,
    /// Overflow diagnostics actually emitted (post-throttling)
    pub overflow_signals: AtomicU64,
    /// Completions that found their stored context
    pub completions_matched: AtomicU64,
    /// Completions resolved with the fallback context
    pub completions_fallback: AtomicU64,
}

impl CorrelatorMetrics {
    /// Take a point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            starts_admitted: self.starts_admitted.load(Ordering::Relaxed),
            starts_rejected: self.starts_rejected.load(Ordering::Relaxed),
            overflow_signals: self.overflow_signals.load(Ordering::Relaxed),
            completions_matched: self.completions_matched.load(Ordering::Relaxed),
            completions_fallback: self.completions_fallback.load(Ordering::Relaxed),
        }
    }

    /// Export metrics as JSON
    pub fn to_json(&self) -> serde_json::Value {
        let snapshot = self.snapshot();
        serde_json::json!({
            "starts": {
                "admitted": snapshot.starts_admitted,
                "rejected": snapshot.starts_rejected,
            },
            "overflow_signals": snapshot.overflow_signals,
            "completions": {
                "matched": snapshot.completions_matched,
                "fallback": snapshot.completions_fallback,
            },
        })
    }
}

/// Point-in-time counter values
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricsSnapshot {
    pub starts_admitted: u64,
    pub starts_rejected: u64,
    pub overflow_signals: u64,
    pub completions_matched: u64,
    pub completions_fallback: u64,
}
