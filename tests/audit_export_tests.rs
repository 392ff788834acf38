use std::sync::Arc;

use clinicore::application::queries::audit::{AuditQueryService, ExportAuditCsvQuery};
use clinicore::domain::audit::{AuditEventRepository, AuditFilter};

mod support;
use support::mocks::{RecordingAuditRepository, admin_actor, sample_event};

fn service(repo: &Arc<RecordingAuditRepository>) -> AuditQueryService {
    AuditQueryService::new(Arc::clone(repo) as Arc<dyn AuditEventRepository>)
}

fn export_all() -> ExportAuditCsvQuery {
    ExportAuditCsvQuery {
        filter: AuditFilter::default(),
        search: None,
    }
}

#[tokio::test]
async fn export_starts_with_the_console_header() {
    let repo = Arc::new(RecordingAuditRepository::new());
    repo.seed(vec![sample_event("user_login", "auth", Some(1), true)]);
    let svc = service(&repo);

    let csv = svc.export_csv(Some(&admin_actor()), export_all()).await.unwrap();
    let first_line = csv.lines().next().unwrap();
    assert_eq!(
        first_line,
        "Timestamp,User,Role,Action,Module,Resource,Success,IP Address"
    );
}

#[tokio::test]
async fn fields_with_commas_are_quoted() {
    let repo = Arc::new(RecordingAuditRepository::new());
    let mut event = sample_event("record_view", "records", Some(1), true);
    event.actor_name = "Reyes, Maria".into();
    event.resource_name = Some("chart \"A\"".into());
    repo.seed(vec![event]);
    let svc = service(&repo);

    let csv = svc.export_csv(Some(&admin_actor()), export_all()).await.unwrap();
    let row = csv.lines().nth(1).unwrap();
    assert!(row.contains("\"Reyes, Maria\""));
    assert!(row.contains("\"chart \"\"A\"\"\""));
}

#[tokio::test]
async fn success_renders_as_yes_or_no() {
    let repo = Arc::new(RecordingAuditRepository::new());
    repo.seed(vec![
        sample_event("user_login", "auth", Some(1), true),
        sample_event("user_login_failed", "auth", None, false),
    ]);
    let svc = service(&repo);

    let csv = svc.export_csv(Some(&admin_actor()), export_all()).await.unwrap();
    let rows: Vec<&str> = csv.lines().skip(1).collect();
    assert!(rows.iter().any(|r| r.contains(",Yes,")));
    assert!(rows.iter().any(|r| r.contains(",No,")));
}

#[tokio::test]
async fn search_narrows_the_export() {
    let repo = Arc::new(RecordingAuditRepository::new());
    repo.seed(vec![
        sample_event("appointment_create", "appointments", Some(1), true),
        sample_event("payment_create", "billing", Some(1), true),
    ]);
    let svc = service(&repo);

    let query = ExportAuditCsvQuery {
        filter: AuditFilter::default(),
        search: Some("billing".into()),
    };
    let csv = svc.export_csv(Some(&admin_actor()), query).await.unwrap();

    // header plus exactly one matching row
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("payment_create"));
}
