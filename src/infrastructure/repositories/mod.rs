// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_audit;

pub(crate) use error::map_sqlx;
pub use postgres_audit::PostgresAuditEventRepository;
