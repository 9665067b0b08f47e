use async_trait::async_trait;
use event_sheet_api::{
    normalize_key, AddedNote, ApiError, ApiResult, AuditEntry, ChangeContext, EventSheet, EventSheetInput,
    EventSheetService, Note,
};
use event_sheet_db::models::event::event::EventModel;
use event_sheet_db::repository::load::Load;
use event_sheet_db::repository::resolve_row::ResolveRow;
use std::error::Error;
use std::sync::Arc;
use tracing::error;

use crate::repository::audit::audit_log_repository::AuditLogRepositoryImpl;
use crate::repository::event::event_repository::EventRepositoryImpl;

/// `EventSheetService` over the event and audit-log repositories.
pub struct EventSheetServiceImpl {
    pub event_repository: Arc<EventRepositoryImpl>,
    pub audit_log_repository: Arc<AuditLogRepositoryImpl>,
}

impl EventSheetServiceImpl {
    pub fn new(event_repository: Arc<EventRepositoryImpl>, audit_log_repository: Arc<AuditLogRepositoryImpl>) -> Self {
        Self {
            event_repository,
            audit_log_repository,
        }
    }

    /// Normalize `key` and find its row.
    pub(super) async fn locate(&self, key: &str) -> ApiResult<(String, usize)> {
        let key = normalize_key(key)?;
        let row = self
            .event_repository
            .resolve_row(&key)
            .await
            .map_err(failed("resolve event row"))?
            .ok_or_else(|| ApiError::NotFound(format!("event {key}")))?;
        Ok((key, row))
    }

    /// Load the row `locate` found. The row can vanish in between when the sheet is edited.
    pub(super) async fn load_row(&self, key: &str, row: usize) -> ApiResult<EventModel> {
        self.event_repository
            .load(row)
            .await
            .map_err(failed("load event row"))?
            .ok_or_else(|| ApiError::NotFound(format!("event {key}")))
    }
}

/// Map a backing-store error into `OperationFailed`, logging it once.
pub(super) fn failed(context: &'static str) -> impl FnOnce(Box<dyn Error + Send + Sync>) -> ApiError {
    move |source| {
        error!(context, error = %source, "backing store call failed");
        ApiError::operation_failed(context, source)
    }
}

#[async_trait]
impl EventSheetService for EventSheetServiceImpl {
    async fn list(&self) -> ApiResult<Vec<EventSheet>> {
        self.list_impl().await
    }

    async fn get(&self, key: &str) -> ApiResult<EventSheet> {
        self.get_impl(key).await
    }

    async fn create(&self, input: EventSheetInput, ctx: &ChangeContext) -> ApiResult<EventSheet> {
        self.create_impl(input, ctx).await
    }

    async fn update(
        &self,
        key: &str,
        input: EventSheetInput,
        rejection_reason: Option<String>,
        ctx: &ChangeContext,
    ) -> ApiResult<EventSheet> {
        self.update_impl(key, input, rejection_reason, ctx).await
    }

    async fn list_notes(&self, key: &str) -> ApiResult<Vec<Note>> {
        self.list_notes_impl(key).await
    }

    async fn add_note(&self, key: &str, text: &str, ctx: &ChangeContext) -> ApiResult<AddedNote> {
        self.add_note_impl(key, text, ctx).await
    }

    async fn list_audit(&self, key: &str) -> ApiResult<Vec<AuditEntry>> {
        self.list_audit_impl(key).await
    }
}
