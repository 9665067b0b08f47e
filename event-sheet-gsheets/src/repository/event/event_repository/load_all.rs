use async_trait::async_trait;
use event_sheet_db::models::event::codec::decode_row;
use event_sheet_db::models::event::event::EventModel;
use event_sheet_db::models::schema::{FIRST_DATA_ROW, FULL_ROW_SPAN};
use event_sheet_db::repository::load_all::LoadAll;
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;
use tracing::debug;

use super::repo_impl::EventRepositoryImpl;

impl EventRepositoryImpl {
    pub(super) async fn load_all_impl(repo: &EventRepositoryImpl) -> Result<Vec<EventModel>, Box<dyn Error + Send + Sync>> {
        let range = A1Range::from_row(&repo.sheet_name, FULL_ROW_SPAN, FIRST_DATA_ROW);
        let rows = repo.store.get_values(&range).await?;
        debug!(count = rows.len(), "loaded event rows");
        Ok(rows
            .iter()
            .enumerate()
            .map(|(offset, cells)| decode_row(offset + FIRST_DATA_ROW, cells))
            .collect())
    }
}

#[async_trait]
impl LoadAll<EventModel> for EventRepositoryImpl {
    async fn load_all(&self) -> Result<Vec<EventModel>, Box<dyn Error + Send + Sync>> {
        Self::load_all_impl(self).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{event_row, setup_test_context, setup_test_context_with_rows, GridCall};
    use event_sheet_db::repository::load_all::LoadAll;

    #[tokio::test]
    async fn test_load_all_in_sheet_order() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_rows(vec![
            event_row(&[(0, "5"), (3, "Ana")]),
            vec!["6".to_string()],
            event_row(&[(3, "sin id")]),
        ])
        .await?;
        let event_repo = &ctx.repos().event_repository;

        let events = event_repo.load_all().await?;
        let summary: Vec<(usize, &str, &str)> = events
            .iter()
            .map(|e| (e.row_number, e.id.as_str(), e.nombre.as_str()))
            .collect();
        assert_eq!(summary, vec![(2, "5", "Ana"), (3, "6", ""), (4, "", "sin id")]);
        assert_eq!(ctx.grid().calls(), vec![GridCall::Get("'Base Mail'!A2:AO".to_string())]);
        Ok(())
    }

    #[tokio::test]
    async fn test_load_all_empty_sheet() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        assert!(ctx.repos().event_repository.load_all().await?.is_empty());
        Ok(())
    }
}
