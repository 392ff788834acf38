use std::sync::Arc;

use crate::domain::audit::AuditEventRepository;

pub struct AuditQueryService {
    pub(super) repo: Arc<dyn AuditEventRepository>,
}

impl AuditQueryService {
    pub fn new(repo: Arc<dyn AuditEventRepository>) -> Self {
        Self { repo }
    }
}
