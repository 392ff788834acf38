// src/presentation/http/openapi.rs
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::dto::{AuditEventDto, AuditReportHandleDto, AuditStatsDto, OffsetPage};
use crate::presentation::http::controllers::audit::{
    RecordEventBody, RecordEventResponse, RequestReportBody,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "clinicore",
        description = "Audit-trail core of the clinic management system."
    ),
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::audit::record_event,
        crate::presentation::http::controllers::audit::list_events,
        crate::presentation::http::controllers::audit::stats,
        crate::presentation::http::controllers::audit::export_csv,
        crate::presentation::http::controllers::audit::request_report,
    ),
    components(schemas(
        StatusResponse,
        AuditEventDto,
        AuditStatsDto,
        AuditReportHandleDto,
        OffsetPage<AuditEventDto>,
        RecordEventBody,
        RecordEventResponse,
        RequestReportBody,
    )),
    tags(
        (name = "Audit", description = "Event ingestion and the admin console surface."),
        (name = "System", description = "Service health.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
