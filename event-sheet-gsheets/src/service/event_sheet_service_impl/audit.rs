use event_sheet_api::{normalize_key, ApiResult, AuditEntry};
use event_sheet_db::repository::load_audits::LoadAudits;

use super::service_impl::{failed, EventSheetServiceImpl};

impl EventSheetServiceImpl {
    /// History is read from the audit sheet alone; the key need not resolve to a row.
    pub(super) async fn list_audit_impl(&self, key: &str) -> ApiResult<Vec<AuditEntry>> {
        let key = normalize_key(key)?;
        let entries = self
            .audit_log_repository
            .load_audits(&key)
            .await
            .map_err(failed("load audit entries"))?;
        Ok(entries.into_iter().map(AuditEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{event_row, setup_test_context_with_rows};
    use event_sheet_api::{ApiError, ChangeContext, EventSheetInput, EventSheetService};

    #[tokio::test]
    async fn test_list_audit_most_recent_first() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_rows(vec![event_row(&[(0, "7"), (3, "Ana")]), event_row(&[(0, "8")])]).await?;
        let service = ctx.repos().create_service();
        let audit_ctx = ChangeContext::new("laura", "backoffice").with_note("llamada de seguimiento");

        let first = EventSheetInput {
            lugar: Some("Salón Norte".to_string()),
            ..Default::default()
        };
        service.update("7", first, None, &audit_ctx).await?;
        service.add_note("7", "confirmar menú", &audit_ctx).await?;
        service.add_note("8", "otra", &audit_ctx).await?;

        let audit = service.list_audit(":7").await?;
        let fields: Vec<&str> = audit.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["Observacion1", "Lugar"]);
        assert!(audit.iter().all(|e| e.key == "7"));
        assert_eq!(audit[0].note.as_deref(), Some("llamada de seguimiento"));
        Ok(())
    }

    #[tokio::test]
    async fn test_list_audit_validates_key() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_rows(vec![]).await?;
        let service = ctx.repos().create_service();

        assert!(matches!(service.list_audit("").await, Err(ApiError::ValidationError(_))));
        assert!(service.list_audit("99").await?.is_empty());
        Ok(())
    }
}
