//! Test helper module for running repositories and the service against an in-memory grid
//!
//! `InMemoryGrid` implements `GridStore` with the range semantics the Sheets API has:
//! trailing empty cells and rows are omitted from reads, appends land after the last
//! non-empty row of the target columns, and unknown sheets are an error. Every call is
//! recorded so tests can assert on exactly which ranges were written.

use async_trait::async_trait;
use event_sheet_db::models::schema::{BASE_COLUMNS, FULL_ROW_SPAN, NOTE_TEXT_COLUMNS, NOTE_TIMESTAMP_COLUMNS};
use event_sheet_db::models::schema::{DERIVED_COLUMN, REJECTION_REASON_COLUMN};
use event_sheet_db::repository::grid_store::{AppendOutcome, GridStore, InsertMode, ValueInput};
use event_sheet_db::utils::a1::A1Range;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::error::Error;
use std::sync::Arc;

use crate::sheets_repositories::SheetsRepositories;

pub const TEST_SHEET: &str = "Base Mail";
pub const TEST_AUDIT_SHEET: &str = "Auditoria";

/// One call made against the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridCall {
    Get(String),
    Update {
        range: String,
        values: Vec<Vec<String>>,
        input: ValueInput,
    },
    Append {
        range: String,
        values: Vec<Vec<String>>,
        input: ValueInput,
        mode: InsertMode,
    },
    SheetTitles,
    AddSheet(String),
}

impl GridCall {
    pub fn is_write(&self) -> bool {
        matches!(self, GridCall::Update { .. } | GridCall::Append { .. } | GridCall::AddSheet(_))
    }

    /// Range string of reads and writes.
    pub fn range(&self) -> Option<&str> {
        match self {
            GridCall::Get(range) | GridCall::Update { range, .. } | GridCall::Append { range, .. } => Some(range),
            _ => None,
        }
    }
}

#[derive(Default)]
struct GridState {
    sheets: HashMap<String, Vec<Vec<String>>>,
    calls: Vec<GridCall>,
    writes_before_failure: Option<usize>,
}

/// Spreadsheet double keeping every sheet as a ragged row-major grid.
#[derive(Default)]
pub struct InMemoryGrid {
    state: Mutex<GridState>,
}

impl InMemoryGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(self, title: &str, rows: Vec<Vec<String>>) -> Self {
        self.state.lock().sheets.insert(title.to_string(), rows);
        self
    }

    pub fn has_sheet(&self, title: &str) -> bool {
        self.state.lock().sheets.contains_key(title)
    }

    /// Snapshot of a sheet, rows as stored.
    pub fn rows(&self, title: &str) -> Vec<Vec<String>> {
        self.state.lock().sheets.get(title).cloned().unwrap_or_default()
    }

    /// Value of a cell by 1-based row and zero-based column; empty when never written.
    pub fn cell(&self, title: &str, row: usize, col: usize) -> String {
        self.state
            .lock()
            .sheets
            .get(title)
            .and_then(|rows| rows.get(row - 1))
            .and_then(|cells| cells.get(col))
            .cloned()
            .unwrap_or_default()
    }

    /// Overwrite a single cell, as a person editing the sheet would.
    pub fn set_cell(&self, title: &str, row: usize, col: usize, value: &str) {
        let mut state = self.state.lock();
        let rows = state.sheets.entry(title.to_string()).or_default();
        write_cell(rows, row, col, value.to_string());
    }

    pub fn calls(&self) -> Vec<GridCall> {
        self.state.lock().calls.clone()
    }

    pub fn writes(&self) -> Vec<GridCall> {
        self.calls().into_iter().filter(GridCall::is_write).collect()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Let `count` more writes succeed, then fail every write after them.
    pub fn fail_writes_after(&self, count: usize) {
        self.state.lock().writes_before_failure = Some(count);
    }

    fn check_write(state: &mut GridState) -> Result<(), Box<dyn Error + Send + Sync>> {
        match state.writes_before_failure {
            Some(0) => Err("injected write failure".into()),
            Some(remaining) => {
                state.writes_before_failure = Some(remaining - 1);
                Ok(())
            }
            None => Ok(()),
        }
    }
}

fn write_cell(rows: &mut Vec<Vec<String>>, row: usize, col: usize, value: String) {
    if rows.len() < row {
        rows.resize(row, Vec::new());
    }
    let cells = &mut rows[row - 1];
    if cells.len() <= col {
        cells.resize(col + 1, String::new());
    }
    cells[col] = value;
}

fn trim_trailing_empty<T>(items: &mut Vec<T>, is_empty: impl Fn(&T) -> bool) {
    while items.last().is_some_and(&is_empty) {
        items.pop();
    }
}

fn missing_sheet(range: &A1Range) -> Box<dyn Error + Send + Sync> {
    format!("Unable to parse range: {range}").into()
}

#[async_trait]
impl GridStore for InMemoryGrid {
    async fn get_values(&self, range: &A1Range) -> Result<Vec<Vec<String>>, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock();
        state.calls.push(GridCall::Get(range.to_string()));
        let rows = state.sheets.get(&range.sheet).ok_or_else(|| missing_sheet(range))?;

        let first = range.start_row.unwrap_or(1);
        let last = range.end_row.unwrap_or(rows.len());
        let mut values: Vec<Vec<String>> = (first..=last)
            .map(|row| {
                let cells = rows.get(row - 1).map(Vec::as_slice).unwrap_or_default();
                let mut slice: Vec<String> = (range.start_col..=range.end_col)
                    .map(|col| cells.get(col).cloned().unwrap_or_default())
                    .collect();
                trim_trailing_empty(&mut slice, String::is_empty);
                slice
            })
            .collect();
        trim_trailing_empty(&mut values, Vec::is_empty);
        Ok(values)
    }

    async fn update_values(
        &self,
        range: &A1Range,
        values: Vec<Vec<String>>,
        input: ValueInput,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock();
        state.calls.push(GridCall::Update {
            range: range.to_string(),
            values: values.clone(),
            input,
        });
        Self::check_write(&mut state)?;
        let rows = state.sheets.get_mut(&range.sheet).ok_or_else(|| missing_sheet(range))?;

        let first_row = range.start_row.unwrap_or(1);
        for (row_offset, row_values) in values.into_iter().enumerate() {
            for (col_offset, value) in row_values.into_iter().enumerate() {
                write_cell(rows, first_row + row_offset, range.start_col + col_offset, value);
            }
        }
        Ok(())
    }

    async fn append_values(
        &self,
        range: &A1Range,
        values: Vec<Vec<String>>,
        input: ValueInput,
        mode: InsertMode,
    ) -> Result<AppendOutcome, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock();
        state.calls.push(GridCall::Append {
            range: range.to_string(),
            values: values.clone(),
            input,
            mode,
        });
        Self::check_write(&mut state)?;
        let rows = state.sheets.get_mut(&range.sheet).ok_or_else(|| missing_sheet(range))?;

        let last_used = rows
            .iter()
            .rposition(|cells| {
                (range.start_col..=range.end_col).any(|col| cells.get(col).is_some_and(|c| !c.is_empty()))
            })
            .map(|index| index + 1)
            .unwrap_or(0);
        let first_row = last_used + 1;
        if mode == InsertMode::InsertRows && rows.len() > last_used {
            for _ in 0..values.len() {
                rows.insert(last_used, Vec::new());
            }
        }

        let height = values.len();
        let width = values.iter().map(Vec::len).max().unwrap_or(0).max(1);
        for (row_offset, row_values) in values.into_iter().enumerate() {
            for (col_offset, value) in row_values.into_iter().enumerate() {
                write_cell(rows, first_row + row_offset, range.start_col + col_offset, value);
            }
        }

        let updated_range = (height > 0).then(|| A1Range {
            sheet: range.sheet.clone(),
            start_col: range.start_col,
            start_row: Some(first_row),
            end_col: range.start_col + width - 1,
            end_row: Some(first_row + height - 1),
        });
        Ok(AppendOutcome { updated_range })
    }

    async fn sheet_titles(&self) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock();
        state.calls.push(GridCall::SheetTitles);
        let mut titles: Vec<String> = state.sheets.keys().cloned().collect();
        titles.sort();
        Ok(titles)
    }

    async fn add_sheet(&self, title: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut state = self.state.lock();
        state.calls.push(GridCall::AddSheet(title.to_string()));
        Self::check_write(&mut state)?;
        if state.sheets.contains_key(title) {
            return Err(format!("A sheet with the name \"{title}\" already exists").into());
        }
        state.sheets.insert(title.to_string(), Vec::new());
        Ok(())
    }
}

/// Header row of the event sheet.
pub fn event_header() -> Vec<String> {
    let mut header = vec![String::new(); FULL_ROW_SPAN.end + 1];
    for column in BASE_COLUMNS.iter() {
        header[column.index] = column.header.to_string();
    }
    for column in NOTE_TEXT_COLUMNS.iter().chain(NOTE_TIMESTAMP_COLUMNS.iter()) {
        header[column.index] = column.header.to_string();
    }
    header[DERIVED_COLUMN.index] = DERIVED_COLUMN.header.to_string();
    header[REJECTION_REASON_COLUMN.index] = REJECTION_REASON_COLUMN.header.to_string();
    header
}

/// A full-width event row with the given cells set.
pub fn event_row(cells: &[(usize, &str)]) -> Vec<String> {
    let mut row = vec![String::new(); FULL_ROW_SPAN.end + 1];
    for (index, value) in cells {
        row[*index] = value.to_string();
    }
    row
}

/// Test context wiring the repositories and the service to one in-memory grid
pub struct TestContext {
    pub grid: Arc<InMemoryGrid>,
    pub repos: SheetsRepositories,
}

impl TestContext {
    pub fn grid(&self) -> &InMemoryGrid {
        &self.grid
    }

    pub fn repos(&self) -> &SheetsRepositories {
        &self.repos
    }
}

/// Setup a test context whose event sheet holds only the header row
///
/// The audit sheet does not exist yet; the first audit write creates it.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_example() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
///     let ctx = setup_test_context().await?;
///     let event_repo = &ctx.repos().event_repository;
///     // ...
///     Ok(())
/// }
/// ```
pub async fn setup_test_context() -> Result<TestContext, Box<dyn Error + Send + Sync>> {
    setup_test_context_with_rows(Vec::new()).await
}

/// Setup a test context whose event sheet holds the header row followed by `rows`
pub async fn setup_test_context_with_rows(
    rows: Vec<Vec<String>>,
) -> Result<TestContext, Box<dyn Error + Send + Sync>> {
    let mut sheet = vec![event_header()];
    sheet.extend(rows);
    let grid = Arc::new(InMemoryGrid::new().with_sheet(TEST_SHEET, sheet));
    let repos = SheetsRepositories::new(grid.clone(), TEST_SHEET, TEST_AUDIT_SHEET);
    Ok(TestContext { grid, repos })
}

#[cfg(test)]
mod tests {
    use super::*;
    use event_sheet_db::models::schema::ColumnSpan;

    #[tokio::test]
    async fn test_reads_omit_trailing_empties() -> Result<(), Box<dyn Error + Send + Sync>> {
        let grid = InMemoryGrid::new().with_sheet(
            "S",
            vec![
                vec!["a".to_string(), String::new(), "c".to_string(), String::new()],
                vec![String::new()],
                vec![],
            ],
        );
        let values = grid.get_values(&A1Range::columns("S", ColumnSpan::new(0, 5))).await?;
        assert_eq!(values, vec![vec!["a".to_string(), String::new(), "c".to_string()]]);
        Ok(())
    }

    #[tokio::test]
    async fn test_append_lands_after_last_used_row() -> Result<(), Box<dyn Error + Send + Sync>> {
        let grid = InMemoryGrid::new().with_sheet("S", vec![vec!["h".to_string()], vec!["x".to_string()]]);
        let outcome = grid
            .append_values(
                &A1Range::columns("S", ColumnSpan::new(0, 2)),
                vec![vec![String::new(), "b".to_string()]],
                ValueInput::UserEntered,
                InsertMode::Overwrite,
            )
            .await?;
        assert_eq!(outcome.first_row(), Some(3));
        assert_eq!(grid.cell("S", 3, 1), "b");
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_sheet_and_injected_failure() -> Result<(), Box<dyn Error + Send + Sync>> {
        let grid = InMemoryGrid::new().with_sheet("S", vec![]);
        assert!(grid.get_values(&A1Range::cell("Nope", 0, 1)).await.is_err());

        grid.fail_writes_after(1);
        grid.update_values(&A1Range::cell("S", 0, 1), vec![vec!["1".to_string()]], ValueInput::Raw)
            .await?;
        assert!(grid
            .update_values(&A1Range::cell("S", 0, 2), vec![vec!["2".to_string()]], ValueInput::Raw)
            .await
            .is_err());
        assert_eq!(grid.cell("S", 2, 0), "");
        Ok(())
    }
}
