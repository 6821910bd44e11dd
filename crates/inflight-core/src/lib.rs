//! Inflight Core - correlation primitives
//!
//! This crate provides the foundational pieces for correlating "operation
//! started" events with their completions when both share only a transient
//! numeric identifier:
//!
//! - **Store**: bounded, admission-controlled map from id to context
//! - **Signal**: lock-free every-Nth occurrence callback
//! - **Config**: immutable correlation settings, validated at construction
//! - **Metrics**: atomic counters for correlation health

pub mod config;
pub mod metrics;
pub mod signal;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, ConfigResult, CorrelationConfig};
pub use metrics::{CorrelatorMetrics, MetricsSnapshot};
pub use signal::EveryNth;
pub use store::InflightStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
