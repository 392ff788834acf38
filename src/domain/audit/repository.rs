use crate::domain::audit::entity::AuditEvent;
use crate::domain::audit::filter::{AuditFilter, AuditStats, ReportHandle, ReportParams};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuditEventRepository: Send + Sync {
    /// Single-row append. Returns the id assigned by the store.
    async fn insert(&self, event: AuditEvent) -> DomainResult<i64>;

    /// Filtered page of events, newest first.
    async fn query(
        &self,
        filter: &AuditFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<AuditEvent>>;

    async fn aggregate_stats(&self, filter: &AuditFilter) -> DomainResult<AuditStats>;

    /// Queue an asynchronous report job and return its handle.
    async fn request_report(&self, params: ReportParams) -> DomainResult<ReportHandle>;
}
