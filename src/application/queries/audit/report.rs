use super::{AuditQueryService, common};
use crate::{
    application::{
        dto::{ActorContext, AuditReportHandleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::audit::{AuditFilter, ReportParams},
};

pub struct RequestAuditReportCommand {
    pub title: String,
    pub filter: AuditFilter,
}

impl AuditQueryService {
    /// Queue a report job in the store. Only the handle comes back; the
    /// console does not track completion.
    pub async fn request_report(
        &self,
        actor: Option<&ActorContext>,
        command: RequestAuditReportCommand,
    ) -> ApplicationResult<AuditReportHandleDto> {
        common::ensure_audit_access(actor)?;

        let mut params = ReportParams::new(command.title).map_err(ApplicationError::from)?;
        params.requested_by = actor.and_then(|a| a.id).map(i64::from);
        params.filter = command.filter;

        let handle = self
            .repo
            .request_report(params)
            .await
            .map_err(ApplicationError::from)?;
        Ok(handle.into())
    }
}
