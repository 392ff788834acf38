// src/application/commands/audit/service.rs
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::application::dto::{ActorContext, ClientInfo};
use crate::application::ports::time::Clock;
use crate::domain::audit::{AuditEvent, AuditEventRepository};

use super::dedup::DedupCache;
use super::policy;

const UNKNOWN: &str = "Unknown";

/// Caller-supplied portion of an event. `action` and `module` are required;
/// everything else is optional context.
#[derive(Debug, Clone, Default)]
pub struct RecordAuditEvent {
    pub action: String,
    pub module: String,
    pub section: Option<String>,
    pub resource_type: Option<String>,
    pub resource_id: Option<String>,
    pub resource_name: Option<String>,
    pub old_values: Option<Value>,
    pub new_values: Option<Value>,
    pub success: bool,
    pub error_message: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl RecordAuditEvent {
    pub fn new(action: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            module: module.into(),
            success: true,
            ..Self::default()
        }
    }
}

/// Outcome of one recording attempt. Suppression is a deliberate no-op and
/// a persistence failure is a soft result; neither is an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditOutcome {
    Recorded,
    Suppressed,
    Failed { message: String },
}

impl AuditOutcome {
    pub fn was_persisted(&self) -> bool {
        matches!(self, AuditOutcome::Recorded)
    }

    pub fn was_suppressed(&self) -> bool {
        matches!(self, AuditOutcome::Suppressed)
    }
}

/// Builds structured activity records, deduplicates them against the
/// per-action policy windows, and forwards survivors to the repository.
///
/// Fail-open: a failed or suppressed recording must never break the
/// business action it describes, so `log_action` is infallible by type.
pub struct AuditRecorder {
    repo: Arc<dyn AuditEventRepository>,
    clock: Arc<dyn Clock>,
    dedup: DedupCache,
}

impl AuditRecorder {
    pub fn new(repo: Arc<dyn AuditEventRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repo,
            clock,
            dedup: DedupCache::new(),
        }
    }

    /// Number of live suppression entries, after the most recent sweep.
    pub fn dedup_entries(&self) -> usize {
        self.dedup.len()
    }

    pub async fn log_action(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        draft: RecordAuditEvent,
    ) -> AuditOutcome {
        let now = self.clock.now();
        let actor_id = actor.and_then(|a| a.id).map(i64::from);

        let key = DedupCache::key(
            actor_id,
            &draft.action,
            &draft.module,
            draft.section.as_deref(),
            draft.resource_name.as_deref(),
        );
        let window = policy::suppression_window(&draft.action);

        if self.dedup.should_suppress(&key, window, now) {
            debug!(action = %draft.action, module = %draft.module, "duplicate audit event suppressed");
            return AuditOutcome::Suppressed;
        }

        let event = assemble(actor, client, draft, now);
        match self.repo.insert(event).await {
            Ok(_) => AuditOutcome::Recorded,
            Err(err) => {
                warn!(error = %err, "failed to persist audit event");
                AuditOutcome::Failed {
                    message: err.to_string(),
                }
            }
        }
    }
}

fn assemble(
    actor: Option<&ActorContext>,
    client: &ClientInfo,
    draft: RecordAuditEvent,
    now: chrono::DateTime<chrono::Utc>,
) -> AuditEvent {
    let actor_id = actor.and_then(|a| a.id).map(i64::from);
    let actor_name = actor
        .and_then(|a| a.display_name.clone().or_else(|| a.email.clone()))
        .unwrap_or_else(|| UNKNOWN.to_string());
    let actor_role = actor
        .and_then(|a| a.role)
        .map(|r| r.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let mut metadata = draft.metadata.unwrap_or_default();
    if let Some(id) = actor_id {
        metadata.insert("actor_id".into(), Value::from(id));
    }
    metadata.insert("actor_name".into(), Value::from(actor_name.clone()));
    metadata.insert("actor_role".into(), Value::from(actor_role.clone()));
    metadata.insert("timestamp".into(), Value::from(now.to_rfc3339()));

    AuditEvent {
        id: None,
        actor_id,
        actor_name,
        actor_role,
        action: draft.action,
        module: draft.module,
        section: draft.section,
        resource_type: draft.resource_type,
        resource_id: draft.resource_id,
        resource_name: draft.resource_name,
        old_values: draft.old_values,
        new_values: draft.new_values,
        success: draft.success,
        error_message: draft.error_message,
        metadata: Some(Value::Object(metadata)),
        ip_address: client.ip_address.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        user_agent: client.user_agent.clone().unwrap_or_else(|| UNKNOWN.to_string()),
        recorded_at: Some(now),
    }
}
