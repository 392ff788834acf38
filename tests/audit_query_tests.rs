use std::sync::Arc;

use clinicore::application::error::ApplicationError;
use clinicore::application::queries::audit::{
    AuditQueryService, ListAuditEventsQuery, RequestAuditReportCommand,
};
use clinicore::domain::audit::{AuditEventRepository, AuditFilter};

mod support;
use support::mocks::{RecordingAuditRepository, admin_actor, doctor_actor, sample_event};

fn service(repo: &Arc<RecordingAuditRepository>) -> AuditQueryService {
    AuditQueryService::new(Arc::clone(repo) as Arc<dyn AuditEventRepository>)
}

fn list_query(limit: u32) -> ListAuditEventsQuery {
    ListAuditEventsQuery {
        filter: AuditFilter::default(),
        search: None,
        limit,
        offset: 0,
    }
}

#[tokio::test]
async fn listing_requires_a_session() {
    let repo = Arc::new(RecordingAuditRepository::new());
    let svc = service(&repo);

    let err = svc.list_events(None, list_query(10)).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Unauthorized(_)));
}

#[tokio::test]
async fn listing_is_admin_only() {
    let repo = Arc::new(RecordingAuditRepository::new());
    let svc = service(&repo);

    let err = svc
        .list_events(Some(&doctor_actor()), list_query(10))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn zero_limit_falls_back_to_default() {
    let repo = Arc::new(RecordingAuditRepository::new());
    let svc = service(&repo);
    let admin = admin_actor();

    svc.list_events(Some(&admin), list_query(0)).await.unwrap();
    svc.list_events(Some(&admin), list_query(500)).await.unwrap();

    let queries = repo.queries.lock().unwrap();
    assert_eq!(queries[0].1, 20, "zero limit should use the default");
    assert_eq!(queries[1].1, 100, "oversized limit should be capped");
}

#[tokio::test]
async fn free_text_search_filters_the_fetched_page() {
    let repo = Arc::new(RecordingAuditRepository::new());
    repo.seed(vec![
        sample_event("appointment_create", "appointments", Some(1), true),
        sample_event("payment_create", "billing", Some(1), true),
        sample_event("appointment_cancel", "appointments", Some(2), true),
    ]);
    let svc = service(&repo);

    let query = ListAuditEventsQuery {
        search: Some("appointment".into()),
        ..list_query(50)
    };
    let page = svc.list_events(Some(&admin_actor()), query).await.unwrap();

    assert_eq!(page.count, 2);
    assert!(page.items.iter().all(|e| e.action.contains("appointment")));
}

#[tokio::test]
async fn server_side_filter_is_forwarded_to_the_repository() {
    let repo = Arc::new(RecordingAuditRepository::new());
    repo.seed(vec![
        sample_event("appointment_create", "appointments", Some(1), true),
        sample_event("payment_create", "billing", Some(2), false),
    ]);
    let svc = service(&repo);

    let query = ListAuditEventsQuery {
        filter: AuditFilter {
            module: Some("billing".into()),
            ..AuditFilter::default()
        },
        ..list_query(50)
    };
    let page = svc.list_events(Some(&admin_actor()), query).await.unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.items[0].module, "billing");

    let queries = repo.queries.lock().unwrap();
    assert_eq!(queries[0].0.module.as_deref(), Some("billing"));
}

#[tokio::test]
async fn stats_aggregate_the_filtered_events() {
    let repo = Arc::new(RecordingAuditRepository::new());
    repo.seed(vec![
        sample_event("user_login", "auth", Some(1), true),
        sample_event("user_login", "auth", Some(2), true),
        sample_event("user_login_failed", "auth", None, false),
        sample_event("user_login", "auth", Some(1), true),
    ]);
    let svc = service(&repo);

    let stats = svc
        .stats(Some(&admin_actor()), AuditFilter::default())
        .await
        .unwrap();

    assert_eq!(stats.total, 4);
    assert_eq!(stats.successful, 3);
    assert_eq!(stats.failed, 1);
    assert_eq!(stats.unique_actors, 2);
}

#[tokio::test]
async fn report_requests_carry_the_requesting_admin() {
    let repo = Arc::new(RecordingAuditRepository::new());
    let svc = service(&repo);

    let handle = svc
        .request_report(
            Some(&admin_actor()),
            RequestAuditReportCommand {
                title: "Monthly billing trail".into(),
                filter: AuditFilter {
                    module: Some("billing".into()),
                    ..AuditFilter::default()
                },
            },
        )
        .await
        .unwrap();

    assert_eq!(handle.status, "pending");

    let reports = repo.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].title, "Monthly billing trail");
    assert_eq!(reports[0].requested_by, Some(1));
    assert_eq!(reports[0].filter.module.as_deref(), Some("billing"));
}

#[tokio::test]
async fn blank_report_titles_are_rejected() {
    let repo = Arc::new(RecordingAuditRepository::new());
    let svc = service(&repo);

    let err = svc
        .request_report(
            Some(&admin_actor()),
            RequestAuditReportCommand {
                title: "   ".into(),
                filter: AuditFilter::default(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Domain(_)));
}
