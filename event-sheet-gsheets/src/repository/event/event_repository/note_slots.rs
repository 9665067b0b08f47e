use event_sheet_db::models::event::note_slots::NoteSlots;
use event_sheet_db::models::schema::{NOTE_SPAN, NOTE_TEXT_COLUMNS, NOTE_TIMESTAMP_COLUMNS};
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;
use tracing::info;

use super::repo_impl::EventRepositoryImpl;

impl EventRepositoryImpl {
    /// Read the note columns of `row`.
    pub async fn load_note_slots(&self, row: usize) -> Result<NoteSlots, Box<dyn Error + Send + Sync>> {
        let range = A1Range::row(&self.sheet_name, NOTE_SPAN, row);
        let rows = self.store.get_values(&range).await?;
        let mut cells = vec![String::new(); NOTE_SPAN.start];
        cells.extend(rows.into_iter().next().unwrap_or_default());
        Ok(NoteSlots::from_row_cells(&cells))
    }

    /// Fill slot `index` (zero-based): the text cell first, then its timestamp cell.
    pub async fn write_note(
        &self,
        row: usize,
        index: usize,
        text: &str,
        timestamp: &str,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let (Some(text_column), Some(timestamp_column)) = (NOTE_TEXT_COLUMNS.get(index), NOTE_TIMESTAMP_COLUMNS.get(index))
        else {
            return Err(format!("note slot {index} does not exist").into());
        };
        self.write_cells(&A1Range::cell(&self.sheet_name, text_column.index, row), vec![text.to_string()])
            .await?;
        self.write_cells(&A1Range::cell(&self.sheet_name, timestamp_column.index, row), vec![timestamp.to_string()])
            .await?;
        info!(row, slot = text_column.name, "note written");
        Ok(())
    }
}
