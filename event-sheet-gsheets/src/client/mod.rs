pub mod dto;
pub mod error;
pub mod sheets_http_client;

pub use error::SheetsClientError;
pub use sheets_http_client::SheetsHttpClient;
