pub mod client;
pub mod config;
pub mod logging;
pub mod repository;
pub mod service;
pub mod sheets_repositories;

pub use client::SheetsHttpClient;
pub use config::SheetsConfig;
pub use service::EventSheetServiceImpl;
pub use sheets_repositories::SheetsRepositories;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helper;
