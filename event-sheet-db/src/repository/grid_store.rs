use async_trait::async_trait;

use crate::utils::a1::A1Range;

/// How the store interprets written strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueInput {
    /// Stored verbatim
    Raw,
    /// Parsed as if typed by a user (dates, numbers, formulas)
    UserEntered,
}

impl ValueInput {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueInput::Raw => "RAW",
            ValueInput::UserEntered => "USER_ENTERED",
        }
    }
}

/// Where appended rows go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    /// Written over the empty rows after the table
    Overwrite,
    /// New rows are inserted for the data
    InsertRows,
}

impl InsertMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsertMode::Overwrite => "OVERWRITE",
            InsertMode::InsertRows => "INSERT_ROWS",
        }
    }
}

/// What the store reports back after an append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    pub updated_range: Option<A1Range>,
}

impl AppendOutcome {
    /// Physical row of the first appended row, when the store reported one.
    pub fn first_row(&self) -> Option<usize> {
        self.updated_range.as_ref().and_then(|range| range.start_row)
    }
}

/// Range-addressed access to a spreadsheet.
///
/// All reads return cell values as strings, row-major, with trailing empty cells and
/// trailing empty rows omitted the way the Sheets API omits them.
#[async_trait]
pub trait GridStore: Send + Sync {
    async fn get_values(&self, range: &A1Range) -> Result<Vec<Vec<String>>, Box<dyn std::error::Error + Send + Sync>>;

    async fn update_values(
        &self,
        range: &A1Range,
        values: Vec<Vec<String>>,
        input: ValueInput,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    async fn append_values(
        &self,
        range: &A1Range,
        values: Vec<Vec<String>>,
        input: ValueInput,
        mode: InsertMode,
    ) -> Result<AppendOutcome, Box<dyn std::error::Error + Send + Sync>>;

    /// Titles of the sheets (tabs) in the spreadsheet.
    async fn sheet_titles(&self) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>>;

    async fn add_sheet(&self, title: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
