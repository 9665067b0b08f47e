use async_trait::async_trait;
use event_sheet_api::KEY_SENTINEL;
use event_sheet_db::models::schema::{ColumnSpan, FIRST_DATA_ROW, KEY_COLUMN};
use event_sheet_db::repository::resolve_row::ResolveRow;
use event_sheet_db::utils::a1::A1Range;
use std::error::Error;
use tracing::debug;

use super::repo_impl::EventRepositoryImpl;

impl EventRepositoryImpl {
    pub(super) async fn resolve_row_impl(
        repo: &EventRepositoryImpl,
        key: &str,
    ) -> Result<Option<usize>, Box<dyn Error + Send + Sync>> {
        let key = key.strip_prefix(KEY_SENTINEL).unwrap_or(key);
        if key.is_empty() {
            return Ok(None);
        }

        let range = A1Range::from_row(
            &repo.sheet_name,
            ColumnSpan::new(KEY_COLUMN.index, KEY_COLUMN.index),
            FIRST_DATA_ROW,
        );
        let keys = repo.store.get_values(&range).await?;
        let row = keys
            .iter()
            .position(|cells| cells.first().map(String::as_str) == Some(key))
            .map(|offset| offset + FIRST_DATA_ROW);
        debug!(key, ?row, "resolved event key");
        Ok(row)
    }
}

#[async_trait]
impl ResolveRow for EventRepositoryImpl {
    async fn resolve_row(&self, key: &str) -> Result<Option<usize>, Box<dyn Error + Send + Sync>> {
        Self::resolve_row_impl(self, key).await
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::{event_row, setup_test_context_with_rows};
    use event_sheet_db::repository::resolve_row::ResolveRow;

    fn rows() -> Vec<Vec<String>> {
        vec![
            event_row(&[(0, "5"), (3, "Ana")]),
            event_row(&[(3, "sin id")]),
            event_row(&[(0, "7"), (3, "Luis")]),
            event_row(&[(0, "7"), (3, "duplicado")]),
        ]
    }

    #[tokio::test]
    async fn test_resolve_row() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_rows(rows()).await?;
        let event_repo = &ctx.repos().event_repository;

        assert_eq!(event_repo.resolve_row("5").await?, Some(2));
        // First match wins on duplicate keys
        assert_eq!(event_repo.resolve_row("7").await?, Some(4));
        assert_eq!(event_repo.resolve_row(":7").await?, Some(4));
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_row_misses() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_rows(rows()).await?;
        let event_repo = &ctx.repos().event_repository;

        assert_eq!(event_repo.resolve_row("9").await?, None);
        assert_eq!(event_repo.resolve_row("").await?, None);
        assert_eq!(event_repo.resolve_row(":").await?, None);
        // Exact match only
        assert_eq!(event_repo.resolve_row(" 5").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_resolve_row_rescans_every_call() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context_with_rows(rows()).await?;
        let event_repo = &ctx.repos().event_repository;

        assert_eq!(event_repo.resolve_row("8").await?, None);
        ctx.grid().set_cell(crate::test_helper::TEST_SHEET, 3, 0, "8");
        assert_eq!(event_repo.resolve_row("8").await?, Some(3));
        Ok(())
    }
}
