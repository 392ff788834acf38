use super::{AuditQueryService, common};
use crate::{
    application::{
        dto::{ActorContext, AuditEventDto, OffsetPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::audit::{AuditEvent, AuditFilter},
};

pub struct ListAuditEventsQuery {
    pub filter: AuditFilter,
    /// Free-text needle matched client-side over the fetched page, not
    /// pushed down to the store.
    pub search: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl AuditQueryService {
    pub async fn list_events(
        &self,
        actor: Option<&ActorContext>,
        query: ListAuditEventsQuery,
    ) -> ApplicationResult<OffsetPage<AuditEventDto>> {
        common::ensure_audit_access(actor)?;
        let limit = common::normalize_limit(query.limit);

        let items = self
            .repo
            .query(&query.filter, limit, query.offset)
            .await
            .map_err(ApplicationError::from)?;
        let items = apply_search(items, query.search.as_deref());

        let dtos: Vec<_> = items.into_iter().map(Into::<AuditEventDto>::into).collect();
        Ok(OffsetPage::new(dtos, limit, query.offset))
    }
}

pub(super) fn apply_search(events: Vec<AuditEvent>, needle: Option<&str>) -> Vec<AuditEvent> {
    let Some(needle) = needle.map(str::trim).filter(|n| !n.is_empty()) else {
        return events;
    };
    let needle = needle.to_lowercase();

    events
        .into_iter()
        .filter(|e| {
            [
                Some(e.action.as_str()),
                Some(e.module.as_str()),
                Some(e.actor_name.as_str()),
                e.section.as_deref(),
                e.resource_type.as_deref(),
                e.resource_name.as_deref(),
                e.error_message.as_deref(),
            ]
            .iter()
            .flatten()
            .any(|h| h.to_lowercase().contains(&needle))
        })
        .collect()
}
