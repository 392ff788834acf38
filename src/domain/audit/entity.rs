// src/domain/audit/entity.rs
use chrono::{DateTime, Utc};

/// One recorded activity: who did what, to which resource, with what
/// before/after values. Immutable once assembled; persisted at most once.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    pub id: Option<i64>,
    pub actor_id: Option<i64>,
    /// Display name of the actor; `"Unknown"` for anonymous/pre-auth events.
    pub actor_name: String,
    /// Role tag of the actor; `"Unknown"` when no session is present.
    pub actor_role: String,
    pub action: String,
    pub module: String,
    pub section: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub resource_name: Option<String>,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
    pub success: bool,
    pub error_message: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub ip_address: String,
    pub user_agent: String,
    pub recorded_at: Option<DateTime<Utc>>,
}
