use async_trait::async_trait;
use event_sheet_db::models::event::codec::decode_row;
use event_sheet_db::models::event::event::EventModel;
use event_sheet_db::models::schema::FULL_ROW_SPAN;
use event_sheet_db::repository::load::Load;
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;

use super::repo_impl::EventRepositoryImpl;

impl EventRepositoryImpl {
    pub(super) async fn load_impl(
        repo: &EventRepositoryImpl,
        row: usize,
    ) -> Result<Option<EventModel>, Box<dyn Error + Send + Sync>> {
        let range = A1Range::row(&repo.sheet_name, FULL_ROW_SPAN, row);
        let rows = repo.store.get_values(&range).await?;
        Ok(rows.first().map(|cells| decode_row(row, cells)))
    }
}

#[async_trait]
impl Load<EventModel> for EventRepositoryImpl {
    async fn load(&self, row: usize) -> Result<Option<EventModel>, Box<dyn Error + Send + Sync>> {
        Self::load_impl(self, row).await
    }
}
