// src/application/commands/audit/policy.rs
//
// Per-action suppression windows. High-frequency actions (navigation,
// settings views) get longer windows; everything else uses the default.
// This table is the single source of truth for deduplication timing.
use chrono::Duration;

/// Window during which a repeated identical event is suppressed.
pub fn suppression_window(action: &str) -> Duration {
    match action {
        "page_view" => Duration::seconds(10),
        "settings_view" => Duration::seconds(15),
        _ => Duration::seconds(5),
    }
}

/// Entries idle longer than this are dropped from the cache on every check.
pub fn eviction_horizon() -> Duration {
    Duration::seconds(60)
}
