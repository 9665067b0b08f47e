pub mod repo_impl;
pub mod resolve_row;
pub mod load;
pub mod load_all;
pub mod create;
pub mod update;
pub mod note_slots;
pub mod rejection_reason;

pub use repo_impl::EventRepositoryImpl;
