use event_sheet_api::{ApiError, ApiResult, ChangeContext, EventSheet, EventSheetInput};
use event_sheet_db::models::audit::audit_log::AuditLogModel;
use event_sheet_db::models::event::diff::creation_changes;
use event_sheet_db::models::event::event::{field_names, EventModel};
use event_sheet_db::repository::append_audits::AppendAudits;
use event_sheet_db::repository::create::Create;
use event_sheet_db::utils::timestamp::now_local;
use tracing::{info, warn};
use validator::Validate;

use super::service_impl::{failed, EventSheetServiceImpl};

impl EventSheetServiceImpl {
    pub(super) async fn create_impl(&self, input: EventSheetInput, ctx: &ChangeContext) -> ApiResult<EventSheet> {
        input.validate()?;
        if !input.has_any_value() {
            return Err(ApiError::ValidationError("event has no fields".to_string()));
        }

        let (mut event, ignored) = EventModel::from_input(&input);
        if !ignored.is_empty() {
            warn!(fields = ?field_names(&ignored), "create ignores fields this service does not write");
        }

        let row = self.event_repository.create(&event).await.map_err(failed("append event row"))?;
        event.row_number = row;

        let now = now_local();
        let entries: Vec<AuditLogModel> = creation_changes(&event)
            .iter()
            .map(|change| AuditLogModel::from_change(&now, "", row, change, ctx))
            .collect();
        self.audit_log_repository
            .append_audits(&entries)
            .await
            .map_err(failed("append audit entries"))?;

        info!(row, changes = entries.len(), actor = %ctx.actor, "event created");
        Ok(event.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{event_row, setup_test_context, setup_test_context_with_rows, TEST_AUDIT_SHEET, TEST_SHEET};
    use event_sheet_api::{ApiError, ChangeContext, EventSheetInput, EventSheetService};
    use event_sheet_db::models::schema::{base_column, EventField, STATUS_COLUMN};

    #[tokio::test]
    async fn test_create_writes_row_and_audit() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_rows(vec![event_row(&[(0, "5"), (3, "Luis")])]).await?;
        let service = ctx.repos().create_service();

        let input = EventSheetInput {
            nombre: Some("Ana".to_string()),
            mail: Some("ana@example.com".to_string()),
            telefono: Some(String::new()),
            ..Default::default()
        };
        let created = service.create(input, &ChangeContext::new("laura", "web")).await?;
        assert_eq!(created.id, "");
        assert_eq!(created.nombre, "Ana");
        assert_eq!(created.estado, "");

        let grid = ctx.grid();
        assert_eq!(grid.cell(TEST_SHEET, 3, base_column(EventField::Mail).index), "ana@example.com");

        let audit = grid.rows(TEST_AUDIT_SHEET);
        assert_eq!(audit.len(), 3);
        assert_eq!(&audit[1][1..6], &["", "3", "Nombre", "", "Ana"]);
        assert_eq!(audit[1][6], "laura");
        assert_eq!(audit[2][3], "Mail");
        Ok(())
    }

    #[tokio::test]
    async fn test_create_never_writes_status() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let service = ctx.repos().create_service();

        let input = EventSheetInput {
            nombre: Some("Ana".to_string()),
            estado: Some("Confirmado".to_string()),
            ..Default::default()
        };
        let created = service.create(input, &ChangeContext::default()).await?;
        assert_eq!(created.estado, "");
        assert_eq!(ctx.grid().cell(TEST_SHEET, 2, STATUS_COLUMN.index), "");
        assert_eq!(ctx.grid().rows(TEST_AUDIT_SHEET).len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_creates_without_leading_fields_land_on_distinct_rows(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let service = ctx.repos().create_service();
        let audit_ctx = ChangeContext::default();

        let budget_only = EventSheetInput {
            presupuesto: Some("1500".to_string()),
            ..Default::default()
        };
        let sector_only = EventSheetInput {
            sector: Some("Norte".to_string()),
            ..Default::default()
        };
        service.create(budget_only, &audit_ctx).await?;
        service.create(sector_only, &audit_ctx).await?;

        let grid = ctx.grid();
        let presupuesto = base_column(EventField::Presupuesto).index;
        let sector = base_column(EventField::Sector).index;
        let stored: Vec<(String, String)> = (2..=3)
            .map(|row| (grid.cell(TEST_SHEET, row, presupuesto), grid.cell(TEST_SHEET, row, sector)))
            .collect();
        assert_eq!(grid.rows(TEST_SHEET).len(), 3);
        assert!(stored.contains(&("1500".to_string(), String::new())));
        assert!(stored.contains(&(String::new(), "Norte".to_string())));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_empty_input() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let service = ctx.repos().create_service();

        let input = EventSheetInput {
            nombre: Some("   ".to_string()),
            ..Default::default()
        };
        let result = service.create(input, &ChangeContext::default()).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert!(ctx.grid().calls().is_empty());

        let oversized = EventSheetInput {
            observacion: Some("x".repeat(50_001)),
            ..Default::default()
        };
        let result = service.create(oversized, &ChangeContext::default()).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_partial_write_is_not_rolled_back() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let service = ctx.repos().create_service();
        ctx.grid().fail_writes_after(1);

        let input = EventSheetInput {
            nombre: Some("Ana".to_string()),
            ..Default::default()
        };
        let result = service.create(input, &ChangeContext::default()).await;
        assert!(matches!(result, Err(ApiError::OperationFailed { .. })));
        assert_eq!(ctx.grid().cell(TEST_SHEET, 2, base_column(EventField::Nombre).index), "Ana");
        assert!(!ctx.grid().has_sheet(TEST_AUDIT_SHEET));
        Ok(())
    }
}
