pub mod audit_log_repository;

pub use audit_log_repository::AuditLogRepositoryImpl;
