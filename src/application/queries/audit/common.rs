use crate::application::{
    dto::ActorContext,
    error::{ApplicationError, ApplicationResult},
};

pub(super) fn ensure_audit_access(actor: Option<&ActorContext>) -> ApplicationResult<()> {
    let Some(actor) = actor else {
        return Err(ApplicationError::unauthorized("audit console requires a session"));
    };
    if actor.is_admin() {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(
            "audit console is restricted to administrators",
        ))
    }
}

pub(super) fn normalize_limit(limit: u32) -> u32 {
    const DEFAULT_LIMIT: u32 = 20;
    const MAX_LIMIT: u32 = 100;

    if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}
