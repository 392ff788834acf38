// src/application/commands/audit/actions.rs
//
// Convenience operations over `log_action`. Each one is a thin field
// mapper; all deduplication goes through the single policy table.
use serde_json::Value;

use crate::application::dto::{ActorContext, ClientInfo};

use super::service::{AuditOutcome, AuditRecorder, RecordAuditEvent};

impl AuditRecorder {
    pub async fn log_login(&self, actor: Option<&ActorContext>, client: &ClientInfo) -> AuditOutcome {
        self.log_action(actor, client, RecordAuditEvent::new("user_login", "auth"))
            .await
    }

    pub async fn log_logout(&self, actor: Option<&ActorContext>, client: &ClientInfo) -> AuditOutcome {
        self.log_action(actor, client, RecordAuditEvent::new("user_logout", "auth"))
            .await
    }

    pub async fn log_failed_login(
        &self,
        client: &ClientInfo,
        attempted_email: &str,
        error: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("account".into()),
            resource_name: Some(attempted_email.to_string()),
            success: false,
            error_message: Some(error.to_string()),
            ..RecordAuditEvent::new("user_login_failed", "auth")
        };
        self.log_action(None, client, draft).await
    }

    pub async fn log_page_view(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        page: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            section: Some(page.to_string()),
            resource_name: Some(page.to_string()),
            ..RecordAuditEvent::new("page_view", "navigation")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_settings_view(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        section: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            section: Some(section.to_string()),
            ..RecordAuditEvent::new("settings_view", "settings")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_settings_update(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        section: &str,
        old_values: Value,
        new_values: Value,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            section: Some(section.to_string()),
            old_values: Some(old_values),
            new_values: Some(new_values),
            ..RecordAuditEvent::new("settings_update", "settings")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_appointment_created(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        appointment_id: &str,
        label: &str,
        details: Value,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("appointment".into()),
            resource_id: Some(appointment_id.to_string()),
            resource_name: Some(label.to_string()),
            new_values: Some(details),
            ..RecordAuditEvent::new("appointment_create", "appointments")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_appointment_updated(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        appointment_id: &str,
        label: &str,
        old_values: Value,
        new_values: Value,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("appointment".into()),
            resource_id: Some(appointment_id.to_string()),
            resource_name: Some(label.to_string()),
            old_values: Some(old_values),
            new_values: Some(new_values),
            ..RecordAuditEvent::new("appointment_update", "appointments")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_appointment_cancelled(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        appointment_id: &str,
        label: &str,
        reason: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("appointment".into()),
            resource_id: Some(appointment_id.to_string()),
            resource_name: Some(label.to_string()),
            new_values: Some(serde_json::json!({ "reason": reason })),
            ..RecordAuditEvent::new("appointment_cancel", "appointments")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_appointment_completed(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        appointment_id: &str,
        label: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("appointment".into()),
            resource_id: Some(appointment_id.to_string()),
            resource_name: Some(label.to_string()),
            ..RecordAuditEvent::new("appointment_complete", "appointments")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_payment_recorded(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        payment_id: &str,
        label: &str,
        details: Value,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("payment".into()),
            resource_id: Some(payment_id.to_string()),
            resource_name: Some(label.to_string()),
            new_values: Some(details),
            ..RecordAuditEvent::new("payment_create", "billing")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_payment_updated(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        payment_id: &str,
        label: &str,
        old_values: Value,
        new_values: Value,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("payment".into()),
            resource_id: Some(payment_id.to_string()),
            resource_name: Some(label.to_string()),
            old_values: Some(old_values),
            new_values: Some(new_values),
            ..RecordAuditEvent::new("payment_update", "billing")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_payment_refunded(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        payment_id: &str,
        label: &str,
        reason: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("payment".into()),
            resource_id: Some(payment_id.to_string()),
            resource_name: Some(label.to_string()),
            new_values: Some(serde_json::json!({ "reason": reason })),
            ..RecordAuditEvent::new("payment_refund", "billing")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_record_viewed(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        record_id: &str,
        label: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("medical_record".into()),
            resource_id: Some(record_id.to_string()),
            resource_name: Some(label.to_string()),
            ..RecordAuditEvent::new("record_view", "records")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_record_updated(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        record_id: &str,
        label: &str,
        old_values: Value,
        new_values: Value,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("medical_record".into()),
            resource_id: Some(record_id.to_string()),
            resource_name: Some(label.to_string()),
            old_values: Some(old_values),
            new_values: Some(new_values),
            ..RecordAuditEvent::new("record_update", "records")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_queue_added(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        entry_id: &str,
        label: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("queue_entry".into()),
            resource_id: Some(entry_id.to_string()),
            resource_name: Some(label.to_string()),
            ..RecordAuditEvent::new("queue_add", "queue")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_queue_advanced(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        entry_id: &str,
        label: &str,
        from_stage: &str,
        to_stage: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("queue_entry".into()),
            resource_id: Some(entry_id.to_string()),
            resource_name: Some(label.to_string()),
            old_values: Some(serde_json::json!({ "stage": from_stage })),
            new_values: Some(serde_json::json!({ "stage": to_stage })),
            ..RecordAuditEvent::new("queue_advance", "queue")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_queue_removed(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        entry_id: &str,
        label: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("queue_entry".into()),
            resource_id: Some(entry_id.to_string()),
            resource_name: Some(label.to_string()),
            ..RecordAuditEvent::new("queue_remove", "queue")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_user_created(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        user_id: &str,
        label: &str,
        details: Value,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("user".into()),
            resource_id: Some(user_id.to_string()),
            resource_name: Some(label.to_string()),
            new_values: Some(details),
            ..RecordAuditEvent::new("user_create", "users")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_user_updated(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        user_id: &str,
        label: &str,
        old_values: Value,
        new_values: Value,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("user".into()),
            resource_id: Some(user_id.to_string()),
            resource_name: Some(label.to_string()),
            old_values: Some(old_values),
            new_values: Some(new_values),
            ..RecordAuditEvent::new("user_update", "users")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_user_deactivated(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        user_id: &str,
        label: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("user".into()),
            resource_id: Some(user_id.to_string()),
            resource_name: Some(label.to_string()),
            ..RecordAuditEvent::new("user_deactivate", "users")
        };
        self.log_action(actor, client, draft).await
    }

    pub async fn log_report_requested(
        &self,
        actor: Option<&ActorContext>,
        client: &ClientInfo,
        title: &str,
    ) -> AuditOutcome {
        let draft = RecordAuditEvent {
            resource_type: Some("report".into()),
            resource_name: Some(title.to_string()),
            ..RecordAuditEvent::new("report_request", "reports")
        };
        self.log_action(actor, client, draft).await
    }
}
