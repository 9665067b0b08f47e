use event_sheet_api::{AddedNote, ApiError, ApiResult, ChangeContext, NewNote, Note};
use event_sheet_db::models::audit::audit_log::AuditLogModel;
use event_sheet_db::models::schema::NOTE_TEXT_COLUMNS;
use event_sheet_db::repository::append_audits::AppendAudits;
use event_sheet_db::utils::timestamp::now_local;
use tracing::{info, warn};
use validator::Validate;

use super::service_impl::{failed, EventSheetServiceImpl};

impl EventSheetServiceImpl {
    pub(super) async fn list_notes_impl(&self, key: &str) -> ApiResult<Vec<Note>> {
        let (_, row) = self.locate(key).await?;
        let slots = self
            .event_repository
            .load_note_slots(row)
            .await
            .map_err(failed("load note slots"))?;
        Ok(slots.most_recent_first())
    }

    /// First-fit into the lowest empty slot. A full record is left untouched.
    pub(super) async fn add_note_impl(&self, key: &str, text: &str, ctx: &ChangeContext) -> ApiResult<AddedNote> {
        let note = NewNote::new(text);
        note.validate()?;

        let (key, row) = self.locate(key).await?;
        let slots = self
            .event_repository
            .load_note_slots(row)
            .await
            .map_err(failed("load note slots"))?;
        let Some(index) = slots.first_empty() else {
            warn!(key = %key, row, "all note slots are filled");
            return Err(ApiError::CapacityExhausted(key));
        };
        let column = &NOTE_TEXT_COLUMNS[index];

        let timestamp = now_local();
        self.event_repository
            .write_note(row, index, &note.texto, &timestamp)
            .await
            .map_err(failed("write note"))?;

        let entry = AuditLogModel::new(&timestamp, &key, row, column.name, "", &note.texto, ctx);
        self.audit_log_repository
            .append_audits(&[entry])
            .await
            .map_err(failed("append audit entries"))?;

        info!(key = %key, row, slot = index + 1, "note added");
        Ok(AddedNote {
            slot: index + 1,
            used_key: column.name.to_string(),
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{event_row, setup_test_context_with_rows, TEST_SHEET};
    use event_sheet_api::{ApiError, ChangeContext, EventSheetService};
    use event_sheet_db::models::schema::{NOTE_SLOT_COUNT, NOTE_TEXT_COLUMNS, NOTE_TIMESTAMP_COLUMNS};

    #[tokio::test]
    async fn test_notes_fill_ascending_and_list_descending() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_rows(vec![event_row(&[(0, "7")])]).await?;
        let service = ctx.repos().create_service();

        for k in 1..=NOTE_SLOT_COUNT {
            let added = service.add_note("7", &format!("nota {k}"), &ChangeContext::default()).await?;
            assert_eq!(added.slot, k);
            assert_eq!(added.used_key, format!("Observacion{k}"));
            assert_eq!(
                ctx.grid().cell(TEST_SHEET, 2, NOTE_TIMESTAMP_COLUMNS[k - 1].index),
                added.timestamp
            );
        }

        let slots: Vec<usize> = service.list_notes(":7").await?.iter().map(|n| n.slot).collect();
        assert_eq!(slots, vec![8, 7, 6, 5, 4, 3, 2, 1]);
        Ok(())
    }

    #[tokio::test]
    async fn test_full_record_rejects_note_without_writing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut cells: Vec<(usize, &str)> = vec![(0, "7")];
        cells.extend(NOTE_TEXT_COLUMNS.iter().map(|c| (c.index, "ocupado")));
        let ctx = setup_test_context_with_rows(vec![event_row(&cells)]).await?;
        let service = ctx.repos().create_service();

        let result = service.add_note("7", "novena", &ChangeContext::default()).await;
        assert!(matches!(result, Err(ApiError::CapacityExhausted(ref key)) if key == "7"));
        assert!(ctx.grid().writes().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_note_text_is_trimmed_and_required() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_rows(vec![event_row(&[(0, "7")])]).await?;
        let service = ctx.repos().create_service();

        let result = service.add_note("7", "   ", &ChangeContext::default()).await;
        assert!(matches!(result, Err(ApiError::ValidationError(_))));
        assert!(ctx.grid().calls().is_empty());

        service.add_note("7", "  hola  ", &ChangeContext::default()).await?;
        assert_eq!(ctx.grid().cell(TEST_SHEET, 2, NOTE_TEXT_COLUMNS[0].index), "hola");
        Ok(())
    }

    #[tokio::test]
    async fn test_note_on_missing_event() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_rows(vec![event_row(&[(0, "7")])]).await?;
        let service = ctx.repos().create_service();

        assert!(matches!(service.list_notes("8").await, Err(ApiError::NotFound(_))));
        assert!(matches!(
            service.add_note("8", "hola", &ChangeContext::default()).await,
            Err(ApiError::NotFound(_))
        ));
        Ok(())
    }
}
