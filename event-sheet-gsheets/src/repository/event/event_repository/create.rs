use async_trait::async_trait;
use event_sheet_db::models::event::codec::encode_row;
use event_sheet_db::models::event::event::EventModel;
use event_sheet_db::models::schema::{LEADING_WRITE_SPAN, TRAILING_WRITE_SPAN};
use event_sheet_db::repository::create::Create;
use event_sheet_db::repository::grid_store::{InsertMode, ValueInput};
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;
use tracing::info;

use super::repo_impl::EventRepositoryImpl;

impl EventRepositoryImpl {
    /// Append the leading span, learn the row from the reported range, then write the
    /// trailing span into that row. The key is left blank for the downstream process.
    ///
    /// The append inserts a fresh row. A previous record whose leading span is blank is
    /// invisible to the table detection over A:K, and writing over empty rows would land on it.
    pub(super) async fn create_impl(
        repo: &EventRepositoryImpl,
        item: &EventModel,
    ) -> Result<usize, Box<dyn Error + Send + Sync>> {
        let encoded = encode_row(item, "");

        let outcome = repo
            .store
            .append_values(
                &A1Range::columns(&repo.sheet_name, LEADING_WRITE_SPAN),
                vec![encoded.leading.values],
                ValueInput::UserEntered,
                InsertMode::InsertRows,
            )
            .await?;
        let row = outcome.first_row().ok_or("append did not report the row it wrote")?;

        repo.write_cells(&A1Range::row(&repo.sheet_name, TRAILING_WRITE_SPAN, row), encoded.trailing.values)
            .await?;
        info!(row, "event row appended");
        Ok(row)
    }
}

#[async_trait]
impl Create<EventModel> for EventRepositoryImpl {
    async fn create(&self, item: &EventModel) -> Result<usize, Box<dyn Error + Send + Sync>> {
        Self::create_impl(self, item).await
    }
}
