use std::borrow::Cow;

use super::{AuditQueryService, common, list};
use crate::{
    application::{
        dto::ActorContext,
        error::{ApplicationError, ApplicationResult},
    },
    domain::audit::{AuditEvent, AuditFilter},
};

const CSV_HEADER: &str = "Timestamp,User,Role,Action,Module,Resource,Success,IP Address";

/// Export reads a larger page than the console listing.
const MAX_EXPORT_ROWS: u32 = 1000;

pub struct ExportAuditCsvQuery {
    pub filter: AuditFilter,
    pub search: Option<String>,
}

impl AuditQueryService {
    /// Render the filtered events as CSV, newest first. Fields containing
    /// delimiters, quotes, or line breaks are quoted per RFC 4180.
    pub async fn export_csv(
        &self,
        actor: Option<&ActorContext>,
        query: ExportAuditCsvQuery,
    ) -> ApplicationResult<String> {
        common::ensure_audit_access(actor)?;

        let items = self
            .repo
            .query(&query.filter, MAX_EXPORT_ROWS, 0)
            .await
            .map_err(ApplicationError::from)?;
        let items = list::apply_search(items, query.search.as_deref());

        let mut out = String::from(CSV_HEADER);
        out.push_str("\r\n");
        for event in &items {
            out.push_str(&render_row(event));
            out.push_str("\r\n");
        }
        Ok(out)
    }
}

fn render_row(event: &AuditEvent) -> String {
    let timestamp = event
        .recorded_at
        .map(|t| t.to_rfc3339())
        .unwrap_or_default();
    let resource = event
        .resource_name
        .as_deref()
        .or(event.resource_type.as_deref())
        .unwrap_or_default();
    let success = if event.success { "Yes" } else { "No" };

    [
        csv_field(&timestamp),
        csv_field(&event.actor_name),
        csv_field(&event.actor_role),
        csv_field(&event.action),
        csv_field(&event.module),
        csv_field(resource),
        csv_field(success),
        csv_field(&event.ip_address),
    ]
    .join(",")
}

/// Quote a field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled.
fn csv_field(raw: &str) -> Cow<'_, str> {
    if raw.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", raw.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(raw)
    }
}
