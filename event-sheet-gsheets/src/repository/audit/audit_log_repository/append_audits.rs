use async_trait::async_trait;
use event_sheet_db::models::audit::audit_log::AuditLogModel;
use event_sheet_db::models::schema::audit_columns;
use event_sheet_db::repository::append_audits::AppendAudits;
use event_sheet_db::repository::grid_store::{InsertMode, ValueInput};
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;
use tracing::info;

use super::repo_impl::AuditLogRepositoryImpl;

impl AuditLogRepositoryImpl {
    pub(super) async fn append_audits_impl(
        repo: &AuditLogRepositoryImpl,
        items: &[AuditLogModel],
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        if items.is_empty() {
            return Ok(());
        }
        repo.ensure_sheet().await?;

        let rows = items.iter().map(AuditLogModel::to_cells).collect();
        repo.store
            .append_values(
                &A1Range::columns(&repo.sheet_name, audit_columns::SPAN),
                rows,
                ValueInput::Raw,
                InsertMode::InsertRows,
            )
            .await?;
        info!(count = items.len(), key = %items[0].key, "audit entries appended");
        Ok(())
    }
}

#[async_trait]
impl AppendAudits<AuditLogModel> for AuditLogRepositoryImpl {
    async fn append_audits(&self, items: &[AuditLogModel]) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::append_audits_impl(self, items).await
    }
}
