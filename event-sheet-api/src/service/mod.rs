pub mod event_sheet_service;

pub use event_sheet_service::*;
