use super::{AuditQueryService, common};
use crate::{
    application::{
        dto::{ActorContext, AuditStatsDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::audit::AuditFilter,
};

impl AuditQueryService {
    pub async fn stats(
        &self,
        actor: Option<&ActorContext>,
        filter: AuditFilter,
    ) -> ApplicationResult<AuditStatsDto> {
        common::ensure_audit_access(actor)?;
        let stats = self
            .repo
            .aggregate_stats(&filter)
            .await
            .map_err(ApplicationError::from)?;
        Ok(stats.into())
    }
}
