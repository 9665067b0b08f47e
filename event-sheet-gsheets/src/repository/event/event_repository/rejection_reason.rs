use event_sheet_db::models::schema::REJECTION_REASON_COLUMN;
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;

use super::repo_impl::EventRepositoryImpl;

impl EventRepositoryImpl {
    /// Single-cell write of the rejection reason.
    pub async fn write_rejection_reason(&self, row: usize, reason: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.write_cells(
            &A1Range::cell(&self.sheet_name, REJECTION_REASON_COLUMN.index, row),
            vec![reason.to_string()],
        )
        .await
    }
}
