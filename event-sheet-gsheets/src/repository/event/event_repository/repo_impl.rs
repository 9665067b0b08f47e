use event_sheet_db::repository::grid_store::{GridStore, ValueInput};
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;
use std::sync::Arc;

/// Event rows of one sheet, addressed by physical row number.
///
/// Holds no row cache: every key lookup rescans the key column.
pub struct EventRepositoryImpl {
    pub store: Arc<dyn GridStore>,
    pub sheet_name: String,
}

impl EventRepositoryImpl {
    pub fn new(store: Arc<dyn GridStore>, sheet_name: &str) -> Self {
        Self {
            store,
            sheet_name: sheet_name.to_string(),
        }
    }

    /// Write one row of cells into `range`, parsed as user input.
    pub(super) async fn write_cells(&self, range: &A1Range, cells: Vec<String>) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.store.update_values(range, vec![cells], ValueInput::UserEntered).await
    }
}
