pub mod event_sheet_service_impl;

pub use event_sheet_service_impl::EventSheetServiceImpl;
