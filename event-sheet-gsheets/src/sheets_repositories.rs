use event_sheet_db::repository::grid_store::GridStore;
use std::sync::Arc;

use crate::client::{SheetsClientError, SheetsHttpClient};
use crate::config::SheetsConfig;
use crate::repository::audit::audit_log_repository::AuditLogRepositoryImpl;
use crate::repository::event::event_repository::EventRepositoryImpl;
use crate::service::EventSheetServiceImpl;

/// Repositories sharing one backing spreadsheet.
///
/// Build once per process: the audit repository remembers that its sheet exists.
pub struct SheetsRepositories {
    pub event_repository: Arc<EventRepositoryImpl>,
    pub audit_log_repository: Arc<AuditLogRepositoryImpl>,
}

impl SheetsRepositories {
    pub fn new(store: Arc<dyn GridStore>, sheet_name: &str, audit_sheet_name: &str) -> Self {
        Self {
            event_repository: Arc::new(EventRepositoryImpl::new(store.clone(), sheet_name)),
            audit_log_repository: Arc::new(AuditLogRepositoryImpl::new(store, audit_sheet_name)),
        }
    }

    /// Repositories over the Sheets REST API described by `config`.
    pub fn from_config(config: &SheetsConfig) -> Result<Self, SheetsClientError> {
        let client = SheetsHttpClient::from_config(config)?;
        Ok(Self::new(Arc::new(client), &config.sheet_name, &config.audit_sheet_name))
    }

    pub fn create_service(&self) -> EventSheetServiceImpl {
        EventSheetServiceImpl::new(self.event_repository.clone(), self.audit_log_repository.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogFormat, LogLevel};

    #[test]
    fn test_from_config() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let config = SheetsConfig {
            spreadsheet_id: "abc".to_string(),
            access_token: "t".to_string(),
            sheet_name: "Eventos".to_string(),
            audit_sheet_name: "Historial".to_string(),
            api_base_url: "http://127.0.0.1:9".to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Text,
        };
        let repos = SheetsRepositories::from_config(&config)?;
        assert_eq!(repos.event_repository.sheet_name, "Eventos");
        assert_eq!(repos.audit_log_repository.sheet_name, "Historial");
        Ok(())
    }
}
