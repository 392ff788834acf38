pub mod actor;
pub mod audit;
pub mod pagination;
pub mod serde_time;

pub use actor::{ActorContext, ClientInfo};
pub use audit::{AuditEventDto, AuditReportHandleDto, AuditStatsDto};
pub use pagination::OffsetPage;
