pub mod entity;
pub mod filter;
pub mod repository;

pub use entity::AuditEvent;
pub use filter::{AuditFilter, AuditStats, ReportHandle, ReportParams, ReportStatus};
pub use repository::AuditEventRepository;
