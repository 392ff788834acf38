// src/domain/audit/filter.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};

/// Optional predicates applied server-side by the repository. Free-text
/// search is deliberately absent here: it is applied by the query service
/// over the already-fetched page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditFilter {
    pub actor_id: Option<i64>,
    pub actor_role: Option<String>,
    pub action: Option<String>,
    pub module: Option<String>,
    pub resource_type: Option<String>,
    pub success: Option<bool>,
    /// Inclusive lower bound on `recorded_at`.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `recorded_at`.
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditStats {
    pub total: i64,
    pub successful: i64,
    pub failed: i64,
    pub unique_actors: i64,
}

#[derive(Debug, Clone)]
pub struct ReportParams {
    pub title: String,
    pub requested_by: Option<i64>,
    pub filter: AuditFilter,
}

impl ReportParams {
    pub fn new(title: impl Into<String>) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::Validation("report title cannot be empty".into()));
        }
        Ok(Self {
            title,
            requested_by: None,
            filter: AuditFilter::default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
}

impl ReportStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
        }
    }
}

/// Handle returned by `request_report`. Generation runs asynchronously in
/// the store; completion is not tracked by this service.
#[derive(Debug, Clone)]
pub struct ReportHandle {
    pub job_id: Uuid,
    pub status: ReportStatus,
}
