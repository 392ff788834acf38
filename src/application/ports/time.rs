// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Time source for the recorder; swapped for a manual clock in tests so
/// suppression windows can be crossed without sleeping.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
