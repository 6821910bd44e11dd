//! Bounded in-flight correlation store
//!
//! Maps the transient numeric identifier of an "operation started" event to
//! the context its completion event will need. The store is admission
//! controlled: once `max_in_flight` entries are held, new starts are
//! rejected instead of growing without bound. There is no time-based
//! expiry, so a start whose completion never arrives occupies its slot
//! until the process restarts.

use crate::config::{ConfigError, ConfigResult};
use dashmap::DashMap;

/// Admission-controlled map from correlation id to context
///
/// All operations are non-blocking and O(1) expected time. Inserts and
/// removals for a single key are atomic, but the size check in
/// [`admit`](InflightStore::admit) is a separate read from the insert, so
/// admissions racing at the capacity boundary can overshoot the limit by at
/// most one entry per racing thread. The overshoot is transient and
/// corrects itself as entries are taken.
#[derive(Debug)]
pub struct InflightStore {
    entries: DashMap<i64, String>,
    max_in_flight: usize,
}

impl InflightStore {
    /// Create a store holding at most `max_in_flight` entries
    pub fn new(max_in_flight: usize) -> ConfigResult<Self> {
        if max_in_flight == 0 {
            return Err(ConfigError::ValidationError(
                "max_in_flight must be a positive value".to_string(),
            ));
        }

        Ok(Self {
            entries: DashMap::new(),
            max_in_flight,
        })
    }

    /// Store `context` under `id` if there is capacity
    ///
    /// Returns `false` when the store is full; rejection is a normal
    /// outcome under load, not an error. Admitting an id that is still in
    /// flight overwrites its context (last write wins).
    pub fn admit(&self, id: i64, context: impl Into<String>) -> bool {
        if self.entries.len() >= self.max_in_flight {
            return false;
        }

        self.entries.insert(id, context.into());
        true
    }

    /// Remove and return the context stored under `id`
    ///
    /// Returns `None` when the id was never admitted or was already taken.
    pub fn take(&self, id: i64) -> Option<String> {
        self.entries.remove(&id).map(|(_, context)| context)
    }

    /// Current number of in-flight entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured capacity
    pub fn capacity(&self) -> usize {
        self.max_in_flight
    }
}
