pub mod repo_impl;
pub mod ensure_sheet;
pub mod append_audits;
pub mod load_audits;

pub use repo_impl::AuditLogRepositoryImpl;
