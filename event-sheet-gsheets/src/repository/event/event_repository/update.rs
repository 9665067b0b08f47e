use async_trait::async_trait;
use event_sheet_db::models::event::codec::encode_row;
use event_sheet_db::models::event::event::EventModel;
use event_sheet_db::repository::update::Update;
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;
use tracing::info;

use super::repo_impl::EventRepositoryImpl;

impl EventRepositoryImpl {
    /// Write both writable spans of `item` into `row`, leading span first. The key cell is
    /// written back with the record's own key.
    pub(super) async fn update_impl(
        repo: &EventRepositoryImpl,
        row: usize,
        item: &EventModel,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let encoded = encode_row(item, &item.id);
        for span_values in [encoded.leading, encoded.trailing] {
            repo.write_cells(&A1Range::row(&repo.sheet_name, span_values.span, row), span_values.values)
                .await?;
        }
        info!(row, key = %item.id, "event row updated");
        Ok(())
    }
}

#[async_trait]
impl Update<EventModel> for EventRepositoryImpl {
    async fn update(&self, row: usize, item: &EventModel) -> Result<(), Box<dyn Error + Send + Sync>> {
        Self::update_impl(self, row, item).await
    }
}
