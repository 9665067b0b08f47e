pub mod service_impl;
pub mod read;
pub mod create;
pub mod update;
pub mod notes;
pub mod audit;

pub use service_impl::EventSheetServiceImpl;
