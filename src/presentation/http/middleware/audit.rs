// src/presentation/http/middleware/audit.rs
use crate::application::commands::audit::RecordAuditEvent;
use crate::presentation::http::extractors::{ClientDetails, MaybeActor};
use crate::presentation::http::state::HttpState;
use axum::{
    extract::{Extension, Request},
    http::Method,
    middleware::Next,
    response::Response,
};

/// Records an `http_request` event for every write-like request. The
/// recorder call runs in a detached task, so the response is never delayed
/// by the store; this is the only detachment point in the service.
pub async fn audit_middleware(
    MaybeActor(actor): MaybeActor,
    ClientDetails(client): ClientDetails,
    Extension(state): Extension<HttpState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let status = response.status();

    let is_write = matches!(
        method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    );
    // the ingest endpoint already records its own event
    if is_write && path != "/api/v1/audit/events" {
        let recorder = state.services.audit_recorder();
        let draft = RecordAuditEvent {
            section: Some(path.clone()),
            resource_type: Some("http_request".into()),
            resource_name: Some(format!("{method} {path}")),
            success: !status.is_server_error() && !status.is_client_error(),
            error_message: (status.is_server_error() || status.is_client_error())
                .then(|| status.to_string()),
            ..RecordAuditEvent::new("http_request", "http")
        };

        tokio::spawn(async move {
            recorder.log_action(actor.as_ref(), &client, draft).await;
        });
    }

    response
}
