// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::audit::AuditRecorder, ports::time::Clock, queries::audit::AuditQueryService,
    },
    domain::audit::AuditEventRepository,
};

pub struct ApplicationServices {
    audit_recorder: Arc<AuditRecorder>,
    audit_queries: Arc<AuditQueryService>,
}

impl ApplicationServices {
    pub fn new(audit_repo: Arc<dyn AuditEventRepository>, clock: Arc<dyn Clock>) -> Self {
        let audit_recorder = Arc::new(AuditRecorder::new(Arc::clone(&audit_repo), clock));
        let audit_queries = Arc::new(AuditQueryService::new(audit_repo));

        Self {
            audit_recorder,
            audit_queries,
        }
    }

    pub fn audit_recorder(&self) -> Arc<AuditRecorder> {
        Arc::clone(&self.audit_recorder)
    }

    pub fn audit_queries(&self) -> Arc<AuditQueryService> {
        Arc::clone(&self.audit_queries)
    }
}
