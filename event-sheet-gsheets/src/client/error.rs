use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetsClientError {
    #[error("invalid Sheets API base url '{0}'")]
    InvalidBaseUrl(String),

    #[error("Sheets API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Sheets API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not parse range '{0}' reported by the Sheets API")]
    UnparseableRange(String),
}
