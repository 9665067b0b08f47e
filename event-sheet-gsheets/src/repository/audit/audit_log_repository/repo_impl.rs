use event_sheet_db::repository::grid_store::GridStore;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Append-only audit sheet.
///
/// The sheet and its header row are created on first use. Once this instance has seen the
/// sheet it does not check again.
pub struct AuditLogRepositoryImpl {
    pub store: Arc<dyn GridStore>,
    pub sheet_name: String,
    pub(super) ensured: OnceCell<()>,
}

impl AuditLogRepositoryImpl {
    pub fn new(store: Arc<dyn GridStore>, sheet_name: &str) -> Self {
        Self {
            store,
            sheet_name: sheet_name.to_string(),
            ensured: OnceCell::new(),
        }
    }
}
