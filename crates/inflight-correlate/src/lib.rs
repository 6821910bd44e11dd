//! Event correlation - pairing starts with completions
//!
//! Wires the bounded store and the rate-limited signal from
//! `inflight-core` into the contract consumed by an event-source
//! integration: keep context when an operation starts, resolve it when the
//! operation completes, and degrade with a fallback value plus a throttled
//! warning when the store is full.

pub use inflight_core::{
    ConfigError, ConfigResult, CorrelationConfig, CorrelatorMetrics, EveryNth, InflightStore,
    MetricsSnapshot,
};

use std::sync::atomic::Ordering;
use tracing::warn;

/// Correlates operation starts with their completions
///
/// One correlator is owned per event-source integration instance. All
/// methods are non-blocking and safe to call from any thread; the
/// correlator owns no threads and never schedules work.
#[derive(Debug)]
pub struct Correlator {
    store: InflightStore,
    overflow_signal: Option<EveryNth>,
    fallback_context: String,
    metrics: CorrelatorMetrics,
}

impl Correlator {
    /// Build a correlator, validating the configuration once
    ///
    /// The overflow signal is only constructed when
    /// `overflow_signal_interval` is at least 1; otherwise overflow
    /// notifications are dropped silently (still counted in metrics).
    pub fn new(config: CorrelationConfig) -> ConfigResult<Self> {
        config.validate()?;

        let overflow_signal = if config.overflow_signal_enabled() {
            Some(EveryNth::new(config.overflow_signal_interval as u64)?)
        } else {
            None
        };

        Ok(Self {
            store: InflightStore::new(config.max_in_flight)?,
            overflow_signal,
            fallback_context: config.fallback_context,
            metrics: CorrelatorMetrics::default(),
        })
    }

    /// Record an operation start and keep its context for completion
    ///
    /// When the store is full the context is dropped. Every Nth drop emits
    /// a warning so sustained overflow stays visible without flooding the
    /// log.
    pub fn on_start(&self, id: i64, context: impl Into<String>) {
        if self.store.admit(id, context) {
            self.metrics.starts_admitted.fetch_add(1, Ordering::Relaxed);
            return;
        }

        self.metrics.starts_rejected.fetch_add(1, Ordering::Relaxed);
        if let Some(signal) = &self.overflow_signal {
            signal.signal(|| {
                self.metrics.overflow_signals.fetch_add(1, Ordering::Relaxed);
                warn!(
                    in_flight = self.store.len(),
                    max_in_flight = self.store.capacity(),
                    "in-flight store is full - operation context dropped"
                );
            });
        }
    }

    /// Resolve the context for a completed operation
    ///
    /// Used for successful and failed completions alike. Returns the
    /// configured fallback when no context was stored for `id`, which
    /// covers starts rejected for capacity and ids completed twice.
    pub fn on_complete(&self, id: i64) -> String {
        match self.store.take(id) {
            Some(context) => {
                self.metrics
                    .completions_matched
                    .fetch_add(1, Ordering::Relaxed);
                context
            }
            None => {
                self.metrics
                    .completions_fallback
                    .fetch_add(1, Ordering::Relaxed);
                self.fallback_context.clone()
            }
        }
    }

    /// Number of operations currently awaiting completion
    pub fn in_flight(&self) -> usize {
        self.store.len()
    }

    /// Correlation health counters
    pub fn metrics(&self) -> &CorrelatorMetrics {
        &self.metrics
    }
}
