// src/application/commands/audit/dedup.rs
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::policy;

/// Session-scoped suppression cache mapping a composite event key to the
/// timestamp of the last accepted event for that key.
///
/// An explicit instance owned by the recorder, never a process-wide
/// singleton; tests construct isolated caches. Eviction of entries older
/// than the 60-second horizon is opportunistic and runs on every check.
#[derive(Debug, Default)]
pub struct DedupCache {
    entries: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl DedupCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Composite key over the fields that identify "the same event".
    /// Absent parts collapse to the empty string so that two events
    /// differing only in, say, `resource_name` stay independent.
    pub fn key(
        actor_id: Option<i64>,
        action: &str,
        module: &str,
        section: Option<&str>,
        resource_name: Option<&str>,
    ) -> String {
        format!(
            "{}:{action}:{module}:{}:{}",
            actor_id.map(|id| id.to_string()).unwrap_or_default(),
            section.unwrap_or_default(),
            resource_name.unwrap_or_default(),
        )
    }

    /// Returns `true` when an unexpired entry exists for `key`. When it does
    /// not, the current timestamp is recorded as a side effect, so the next
    /// call inside `window` suppresses.
    pub fn should_suppress(&self, key: &str, window: Duration, now: DateTime<Utc>) -> bool {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let horizon = policy::eviction_horizon();
        entries.retain(|_, seen| now.signed_duration_since(*seen) < horizon);

        match entries.get(key) {
            Some(seen) if now.signed_duration_since(*seen) < window => true,
            _ => {
                entries.insert(key.to_owned(), now);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
