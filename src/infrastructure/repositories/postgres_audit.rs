use super::map_sqlx;
use crate::domain::audit::{
    AuditEvent, AuditEventRepository, AuditFilter, AuditStats, ReportHandle, ReportParams,
    ReportStatus,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresAuditEventRepository {
    pool: PgPool,
}

impl PostgresAuditEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AuditEventRow {
    id: i64,
    actor_id: Option<i64>,
    actor_name: String,
    actor_role: String,
    action: String,
    module: String,
    section: Option<String>,
    resource_type: Option<String>,
    resource_id: Option<String>,
    resource_name: Option<String>,
    old_values: Option<serde_json::Value>,
    new_values: Option<serde_json::Value>,
    success: bool,
    error_message: Option<String>,
    metadata: Option<serde_json::Value>,
    ip_address: String,
    user_agent: String,
    recorded_at: DateTime<Utc>,
}

impl From<AuditEventRow> for AuditEvent {
    fn from(r: AuditEventRow) -> Self {
        Self {
            id: Some(r.id),
            actor_id: r.actor_id,
            actor_name: r.actor_name,
            actor_role: r.actor_role,
            action: r.action,
            module: r.module,
            section: r.section,
            resource_type: r.resource_type,
            resource_id: r.resource_id,
            resource_name: r.resource_name,
            old_values: r.old_values,
            new_values: r.new_values,
            success: r.success,
            error_message: r.error_message,
            metadata: r.metadata,
            ip_address: r.ip_address,
            user_agent: r.user_agent,
            recorded_at: Some(r.recorded_at),
        }
    }
}

const SELECT_COLUMNS: &str = "SELECT id, actor_id, actor_name, actor_role, action, module, \
     section, resource_type, resource_id, resource_name, old_values, new_values, success, \
     error_message, metadata, ip_address, user_agent, recorded_at FROM audit_events";

fn push_filters(qb: &mut QueryBuilder<'_, Postgres>, filter: &AuditFilter) {
    if let Some(actor_id) = filter.actor_id {
        qb.push(" AND actor_id = ").push_bind(actor_id);
    }
    if let Some(role) = &filter.actor_role {
        qb.push(" AND actor_role = ").push_bind(role.clone());
    }
    if let Some(action) = &filter.action {
        qb.push(" AND action = ").push_bind(action.clone());
    }
    if let Some(module) = &filter.module {
        qb.push(" AND module = ").push_bind(module.clone());
    }
    if let Some(resource_type) = &filter.resource_type {
        qb.push(" AND resource_type = ").push_bind(resource_type.clone());
    }
    if let Some(success) = filter.success {
        qb.push(" AND success = ").push_bind(success);
    }
    if let Some(from) = filter.from {
        qb.push(" AND recorded_at >= ").push_bind(from);
    }
    if let Some(to) = filter.to {
        qb.push(" AND recorded_at <= ").push_bind(to);
    }
}

#[async_trait]
impl AuditEventRepository for PostgresAuditEventRepository {
    async fn insert(&self, event: AuditEvent) -> DomainResult<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO audit_events (
                actor_id, actor_name, actor_role, action, module, section,
                resource_type, resource_id, resource_name, old_values, new_values,
                success, error_message, metadata, ip_address, user_agent, recorded_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                    COALESCE($17, now()))
            RETURNING id
            "#,
        )
        .bind(event.actor_id)
        .bind(event.actor_name)
        .bind(event.actor_role)
        .bind(event.action)
        .bind(event.module)
        .bind(event.section)
        .bind(event.resource_type)
        .bind(event.resource_id)
        .bind(event.resource_name)
        .bind(event.old_values)
        .bind(event.new_values)
        .bind(event.success)
        .bind(event.error_message)
        .bind(event.metadata)
        .bind(event.ip_address)
        .bind(event.user_agent)
        .bind(event.recorded_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(id)
    }

    async fn query(
        &self,
        filter: &AuditFilter,
        limit: u32,
        offset: u32,
    ) -> DomainResult<Vec<AuditEvent>> {
        let mut qb = QueryBuilder::<Postgres>::new(SELECT_COLUMNS);
        qb.push(" WHERE 1 = 1");
        push_filters(&mut qb, filter);
        qb.push(" ORDER BY recorded_at DESC, id DESC LIMIT ")
            .push_bind(i64::from(limit))
            .push(" OFFSET ")
            .push_bind(i64::from(offset));

        let rows: Vec<AuditEventRow> = qb
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn aggregate_stats(&self, filter: &AuditFilter) -> DomainResult<AuditStats> {
        let mut qb = QueryBuilder::<Postgres>::new(
            "SELECT count(*) AS total, \
             count(*) FILTER (WHERE success) AS successful, \
             count(*) FILTER (WHERE NOT success) AS failed, \
             count(DISTINCT actor_id) AS unique_actors \
             FROM audit_events WHERE 1 = 1",
        );
        push_filters(&mut qb, filter);

        let (total, successful, failed, unique_actors): (i64, i64, i64, i64) = qb
            .build_query_as()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(AuditStats {
            total,
            successful,
            failed,
            unique_actors,
        })
    }

    async fn request_report(&self, params: ReportParams) -> DomainResult<ReportHandle> {
        let job_id = Uuid::new_v4();
        let filter = serde_json::to_value(&params.filter)
            .map_err(|e| DomainError::Persistence(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO audit_reports (id, title, requested_by, filter, status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(job_id)
        .bind(params.title)
        .bind(params.requested_by)
        .bind(filter)
        .bind(ReportStatus::Pending.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(ReportHandle {
            job_id,
            status: ReportStatus::Pending,
        })
    }
}
