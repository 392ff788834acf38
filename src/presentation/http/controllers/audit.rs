use crate::application::commands::audit::{AuditOutcome, RecordAuditEvent};
use crate::application::dto::{AuditEventDto, AuditReportHandleDto, AuditStatsDto, OffsetPage};
use crate::application::error::ApplicationError;
use crate::application::queries::audit::{
    ExportAuditCsvQuery, ListAuditEventsQuery, RequestAuditReportCommand,
};
use crate::domain::audit::AuditFilter;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ClientDetails, MaybeActor};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordEventBody {
    pub action: String,
    pub module: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub resource_name: Option<String>,
    #[serde(default)]
    pub old_values: Option<serde_json::Value>,
    #[serde(default)]
    pub new_values: Option<serde_json::Value>,
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

fn default_success() -> bool {
    true
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordEventResponse {
    pub success: bool,
    pub skipped: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<AuditOutcome> for RecordEventResponse {
    fn from(outcome: AuditOutcome) -> Self {
        match outcome {
            AuditOutcome::Recorded => Self {
                success: true,
                skipped: false,
                error: None,
            },
            AuditOutcome::Suppressed => Self {
                success: true,
                skipped: true,
                error: None,
            },
            AuditOutcome::Failed { message } => Self {
                success: false,
                skipped: false,
                error: Some(message),
            },
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListAuditParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub actor_id: Option<i64>,
    #[serde(default)]
    pub actor_role: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub search: Option<String>,
}

fn default_limit() -> u32 {
    20
}

impl ListAuditParams {
    fn filter(&self) -> AuditFilter {
        AuditFilter {
            actor_id: self.actor_id,
            actor_role: self.actor_role.clone(),
            action: self.action.clone(),
            module: self.module.clone(),
            resource_type: self.resource_type.clone(),
            success: self.success,
            from: self.from,
            to: self.to,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RequestReportBody {
    pub title: String,
    #[serde(default)]
    pub actor_id: Option<i64>,
    #[serde(default)]
    pub actor_role: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,
}

/// Ingest one semantic action. Always answers 200: a failed recording is
/// reported in the body, never as a request failure.
#[utoipa::path(
    post,
    path = "/api/v1/audit/events",
    request_body = RecordEventBody,
    responses(
        (status = 200, description = "Recording outcome (recorded, suppressed, or failed).", body = RecordEventResponse),
        (status = 400, description = "Missing action or module tag.")
    ),
    tag = "Audit"
)]
pub async fn record_event(
    Extension(state): Extension<HttpState>,
    MaybeActor(actor): MaybeActor,
    ClientDetails(client): ClientDetails,
    Json(body): Json<RecordEventBody>,
) -> HttpResult<Json<RecordEventResponse>> {
    if body.action.trim().is_empty() || body.module.trim().is_empty() {
        return Err(HttpError::from_error(ApplicationError::validation(
            "action and module are required",
        )));
    }

    let draft = RecordAuditEvent {
        action: body.action,
        module: body.module,
        section: body.section,
        resource_type: body.resource_type,
        resource_id: body.resource_id,
        resource_name: body.resource_name,
        old_values: body.old_values,
        new_values: body.new_values,
        success: body.success,
        error_message: body.error_message,
        metadata: body.metadata.and_then(|v| v.as_object().cloned()),
    };

    let recorder = state.services.audit_recorder();
    let outcome = recorder.log_action(actor.as_ref(), &client, draft).await;
    Ok(Json(outcome.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/audit/events",
    params(ListAuditParams),
    responses(
        (status = 200, description = "Filtered page of audit events, newest first.", body = OffsetPage<AuditEventDto>),
        (status = 401, description = "No session headers present."),
        (status = 403, description = "Caller is not an administrator.")
    ),
    tag = "Audit"
)]
pub async fn list_events(
    Extension(state): Extension<HttpState>,
    MaybeActor(actor): MaybeActor,
    Query(params): Query<ListAuditParams>,
) -> HttpResult<Json<OffsetPage<AuditEventDto>>> {
    let query = ListAuditEventsQuery {
        filter: params.filter(),
        search: params.search.clone(),
        limit: params.limit,
        offset: params.offset,
    };
    let page = state
        .services
        .audit_queries()
        .list_events(actor.as_ref(), query)
        .await
        .into_http()?;
    Ok(Json(page))
}

#[utoipa::path(
    get,
    path = "/api/v1/audit/stats",
    params(ListAuditParams),
    responses(
        (status = 200, description = "Aggregate counts for the filtered events.", body = AuditStatsDto),
        (status = 401, description = "No session headers present."),
        (status = 403, description = "Caller is not an administrator.")
    ),
    tag = "Audit"
)]
pub async fn stats(
    Extension(state): Extension<HttpState>,
    MaybeActor(actor): MaybeActor,
    Query(params): Query<ListAuditParams>,
) -> HttpResult<Json<AuditStatsDto>> {
    let stats = state
        .services
        .audit_queries()
        .stats(actor.as_ref(), params.filter())
        .await
        .into_http()?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/v1/audit/export",
    params(ListAuditParams),
    responses(
        (status = 200, description = "CSV rendition of the filtered events.", body = String, content_type = "text/csv"),
        (status = 401, description = "No session headers present."),
        (status = 403, description = "Caller is not an administrator.")
    ),
    tag = "Audit"
)]
pub async fn export_csv(
    Extension(state): Extension<HttpState>,
    MaybeActor(actor): MaybeActor,
    Query(params): Query<ListAuditParams>,
) -> HttpResult<Response> {
    let query = ExportAuditCsvQuery {
        filter: params.filter(),
        search: params.search.clone(),
    };
    let csv = state
        .services
        .audit_queries()
        .export_csv(actor.as_ref(), query)
        .await
        .into_http()?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"audit-events.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/v1/audit/reports",
    request_body = RequestReportBody,
    responses(
        (status = 202, description = "Report job queued.", body = AuditReportHandleDto),
        (status = 401, description = "No session headers present."),
        (status = 403, description = "Caller is not an administrator.")
    ),
    tag = "Audit"
)]
pub async fn request_report(
    Extension(state): Extension<HttpState>,
    MaybeActor(actor): MaybeActor,
    Json(body): Json<RequestReportBody>,
) -> HttpResult<(StatusCode, Json<AuditReportHandleDto>)> {
    let command = RequestAuditReportCommand {
        title: body.title,
        filter: AuditFilter {
            actor_id: body.actor_id,
            actor_role: body.actor_role,
            action: body.action,
            module: body.module,
            resource_type: body.resource_type,
            success: body.success,
            from: body.from,
            to: body.to,
        },
    };
    let handle = state
        .services
        .audit_queries()
        .request_report(actor.as_ref(), command)
        .await
        .into_http()?;
    Ok((StatusCode::ACCEPTED, Json(handle)))
}
