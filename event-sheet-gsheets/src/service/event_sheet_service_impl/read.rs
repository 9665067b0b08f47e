use event_sheet_api::{ApiResult, EventSheet};
use event_sheet_db::repository::load_all::LoadAll;
use tracing::debug;

use super::service_impl::{failed, EventSheetServiceImpl};

impl EventSheetServiceImpl {
    pub(super) async fn list_impl(&self) -> ApiResult<Vec<EventSheet>> {
        let events = self.event_repository.load_all().await.map_err(failed("load events"))?;
        debug!(count = events.len(), "listed events");
        Ok(events.into_iter().map(EventSheet::from).collect())
    }

    pub(super) async fn get_impl(&self, key: &str) -> ApiResult<EventSheet> {
        let (key, row) = self.locate(key).await?;
        let event = self.load_row(&key, row).await?;
        Ok(event.into())
    }
}
