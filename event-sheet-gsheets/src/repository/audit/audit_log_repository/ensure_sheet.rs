use event_sheet_db::models::audit::audit_log::audit_header;
use event_sheet_db::models::schema::{audit_columns, HEADER_ROW};
use event_sheet_db::repository::grid_store::ValueInput;
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;
use tracing::{info, warn};

use super::repo_impl::AuditLogRepositoryImpl;

impl AuditLogRepositoryImpl {
    /// Create the audit sheet with its header row unless it already exists.
    ///
    /// Concurrent callers on this instance wait for a single check. Another process creating
    /// the sheet between our listing and our add is tolerated. A sheet left without its header
    /// by an earlier failed attempt gets the header before anything is appended.
    pub async fn ensure_sheet(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.ensured.get_or_try_init(|| self.create_if_missing()).await?;
        Ok(())
    }

    async fn create_if_missing(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        if !self.sheet_exists().await? {
            match self.store.add_sheet(&self.sheet_name).await {
                Ok(()) => info!(sheet = %self.sheet_name, "audit sheet created"),
                Err(e) => {
                    if !self.sheet_exists().await? {
                        return Err(e);
                    }
                    warn!(sheet = %self.sheet_name, error = %e, "audit sheet was created concurrently");
                }
            }
        }
        self.write_header_if_missing().await
    }

    async fn write_header_if_missing(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let header_range = A1Range::row(&self.sheet_name, audit_columns::SPAN, HEADER_ROW);
        let current = self.store.get_values(&header_range).await?;
        if current.iter().flatten().any(|cell| !cell.is_empty()) {
            return Ok(());
        }
        self.store
            .update_values(&header_range, vec![audit_header()], ValueInput::Raw)
            .await?;
        info!(sheet = %self.sheet_name, "audit header written");
        Ok(())
    }

    /// Whether the audit sheet is present, without creating it.
    pub(super) async fn sheet_exists(&self) -> Result<bool, Box<dyn Error + Send + Sync>> {
        let titles = self.store.sheet_titles().await?;
        Ok(titles.iter().any(|title| title == &self.sheet_name))
    }
}
