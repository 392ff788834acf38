mod common;
mod export;
mod list;
mod report;
mod service;
mod stats;

pub use export::ExportAuditCsvQuery;
pub use list::ListAuditEventsQuery;
pub use report::RequestAuditReportCommand;
pub use service::AuditQueryService;
