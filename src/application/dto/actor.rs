// src/application/dto/actor.rs
use crate::domain::staff::{ActorId, Role};

/// Identity resolved from the external session context. Every field may be
/// absent: audit of anonymous/pre-auth actions is permitted.
#[derive(Debug, Clone, Default)]
pub struct ActorContext {
    pub id: Option<ActorId>,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub role: Option<Role>,
}

impl ActorContext {
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

/// Transport-level facts about the caller, as far as the edge can tell.
#[derive(Debug, Clone, Default)]
pub struct ClientInfo {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}
