use async_trait::async_trait;
use event_sheet_api::KEY_SENTINEL;
use event_sheet_db::models::audit::audit_log::AuditLogModel;
use event_sheet_db::models::schema::{audit_columns, FIRST_DATA_ROW};
use event_sheet_db::repository::load_audits::LoadAudits;
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;
use tracing::debug;

use super::repo_impl::AuditLogRepositoryImpl;

impl AuditLogRepositoryImpl {
    /// Entries for `key`, most recent first. Entries with equal timestamps keep the later
    /// appended one first. A missing audit sheet reads as no entries and is not created here.
    pub(super) async fn load_audits_impl(
        repo: &AuditLogRepositoryImpl,
        key: &str,
    ) -> Result<Vec<AuditLogModel>, Box<dyn Error + Send + Sync>> {
        let key = key.strip_prefix(KEY_SENTINEL).unwrap_or(key);
        if !repo.ensured.initialized() && !repo.sheet_exists().await? {
            debug!(key, sheet = %repo.sheet_name, "audit sheet not created yet");
            return Ok(Vec::new());
        }

        let rows = repo
            .store
            .get_values(&A1Range::from_row(&repo.sheet_name, audit_columns::SPAN, FIRST_DATA_ROW))
            .await?;
        let mut entries: Vec<(usize, AuditLogModel)> = rows
            .iter()
            .map(|cells| AuditLogModel::from_cells(cells))
            .enumerate()
            .filter(|(_, entry)| !key.is_empty() && entry.key == key)
            .collect();
        entries.sort_by(|(a_pos, a), (b_pos, b)| b.sort_time().cmp(&a.sort_time()).then(b_pos.cmp(a_pos)));
        debug!(key, count = entries.len(), "loaded audit entries");
        Ok(entries.into_iter().map(|(_, entry)| entry).collect())
    }
}

#[async_trait]
impl LoadAudits<AuditLogModel> for AuditLogRepositoryImpl {
    async fn load_audits(&self, key: &str) -> Result<Vec<AuditLogModel>, Box<dyn Error + Send + Sync>> {
        Self::load_audits_impl(self, key).await
    }
}
