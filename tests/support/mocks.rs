// tests/support/mocks.rs
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use clinicore::application::dto::{ActorContext, ClientInfo};
use clinicore::application::ports::time::Clock;
use clinicore::domain::audit::{
    AuditEvent, AuditEventRepository, AuditFilter, AuditStats, ReportHandle, ReportParams,
    ReportStatus,
};
use clinicore::domain::errors::{DomainError, DomainResult};
use clinicore::domain::staff::{ActorId, Role};

/// In-memory repository that records every call for assertions.
#[derive(Default)]
pub struct RecordingAuditRepository {
    pub events: Mutex<Vec<AuditEvent>>,
    pub queries: Mutex<Vec<(AuditFilter, u32, u32)>>,
    pub reports: Mutex<Vec<ReportParams>>,
    fail_inserts: AtomicBool,
}

impl RecordingAuditRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn inserted(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn seed(&self, events: Vec<AuditEvent>) {
        self.events.lock().unwrap().extend(events);
    }
}

fn matches_filter(event: &AuditEvent, filter: &AuditFilter) -> bool {
    if let Some(actor_id) = filter.actor_id {
        if event.actor_id != Some(actor_id) {
            return false;
        }
    }
    if let Some(role) = &filter.actor_role {
        if &event.actor_role != role {
            return false;
        }
    }
    if let Some(action) = &filter.action {
        if &event.action != action {
            return false;
        }
    }
    if let Some(module) = &filter.module {
        if &event.module != module {
            return false;
        }
    }
    if let Some(resource_type) = &filter.resource_type {
        if event.resource_type.as_ref() != Some(resource_type) {
            return false;
        }
    }
    if let Some(success) = filter.success {
        if event.success != success {
            return false;
        }
    }
    true
}

#[async_trait]
impl AuditEventRepository for RecordingAuditRepository {
    async fn insert(&self, event: AuditEvent) -> DomainResult<i64> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("simulated store outage".into()));
        }
        let mut events = self.events.lock().unwrap();
        let id = events.len() as i64 + 1;
        let mut event = event;
        event.id = Some(id);
        events.push(event);
        Ok(id)
    }

    async fn query(
        &self,
        filter: &AuditFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<AuditEvent>> {
        self.queries
            .lock()
            .unwrap()
            .push((filter.clone(), limit, offset));
        let events = self.events.lock().unwrap();
        Ok(events
            .iter()
            .filter(|e| matches_filter(e, filter))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn aggregate_stats(&self, filter: &AuditFilter) -> DomainResult<AuditStats> {
        let events = self.events.lock().unwrap();
        let matching: Vec<_> = events.iter().filter(|e| matches_filter(e, filter)).collect();
        let successful = matching.iter().filter(|e| e.success).count() as i64;
        let mut actors: Vec<i64> = matching.iter().filter_map(|e| e.actor_id).collect();
        actors.sort_unstable();
        actors.dedup();
        Ok(AuditStats {
            total: matching.len() as i64,
            successful,
            failed: matching.len() as i64 - successful,
            unique_actors: actors.len() as i64,
        })
    }

    async fn request_report(&self, params: ReportParams) -> DomainResult<ReportHandle> {
        self.reports.lock().unwrap().push(params);
        Ok(ReportHandle {
            job_id: Uuid::new_v4(),
            status: ReportStatus::Pending,
        })
    }
}

/// Clock whose hands only move when the test says so.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

pub fn admin_actor() -> ActorContext {
    ActorContext {
        id: Some(ActorId::new(1).unwrap()),
        email: Some("admin@clinic.test".into()),
        display_name: Some("Alice Admin".into()),
        role: Some(Role::Admin),
    }
}

pub fn doctor_actor() -> ActorContext {
    ActorContext {
        id: Some(ActorId::new(2).unwrap()),
        email: Some("doctor@clinic.test".into()),
        display_name: Some("Dr. Bones".into()),
        role: Some(Role::Doctor),
    }
}

pub fn client() -> ClientInfo {
    ClientInfo {
        ip_address: Some("127.0.0.1".into()),
        user_agent: Some("clinicore-test".into()),
    }
}

pub fn sample_event(action: &str, module: &str, actor_id: Option<i64>, success: bool) -> AuditEvent {
    AuditEvent {
        id: None,
        actor_id,
        actor_name: "Alice Admin".into(),
        actor_role: "admin".into(),
        action: action.into(),
        module: module.into(),
        section: None,
        resource_type: None,
        resource_id: None,
        resource_name: None,
        old_values: None,
        new_values: None,
        success,
        error_message: None,
        metadata: None,
        ip_address: "127.0.0.1".into(),
        user_agent: "clinicore-test".into(),
        recorded_at: Some(base_time()),
    }
}
