use crate::domain::audit::{AuditEvent, AuditStats, ReportHandle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditEventDto {
    pub id: i64,
    pub actor_id: Option<i64>,
    pub actor_name: String,
    pub actor_role: String,
    pub action: String,
    pub module: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_values: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_values: Option<serde_json::Value>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub ip_address: String,
    pub user_agent: String,
    #[serde(default, with = "serde_time::option")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl From<AuditEvent> for AuditEventDto {
    fn from(e: AuditEvent) -> Self {
        Self {
            id: e.id.unwrap_or_default(),
            actor_id: e.actor_id,
            actor_name: e.actor_name,
            actor_role: e.actor_role,
            action: e.action,
            module: e.module,
            section: e.section,
            resource_type: e.resource_type,
            resource_id: e.resource_id,
            resource_name: e.resource_name,
            old_values: e.old_values,
            new_values: e.new_values,
            success: e.success,
            error_message: e.error_message,
            metadata: e.metadata,
            ip_address: e.ip_address,
            user_agent: e.user_agent,
            recorded_at: e.recorded_at,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct AuditStatsDto {
    pub total: i64,
    pub successful: i64,
    pub failed: i64,
    pub unique_actors: i64,
}

impl From<AuditStats> for AuditStatsDto {
    fn from(s: AuditStats) -> Self {
        Self {
            total: s.total,
            successful: s.successful,
            failed: s.failed,
            unique_actors: s.unique_actors,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditReportHandleDto {
    pub job_id: Uuid,
    pub status: String,
}

impl From<ReportHandle> for AuditReportHandleDto {
    fn from(h: ReportHandle) -> Self {
        Self {
            job_id: h.job_id,
            status: h.status.as_str().to_string(),
        }
    }
}
