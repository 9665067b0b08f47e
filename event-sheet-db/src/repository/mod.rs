pub mod append_audits;
pub mod create;
pub mod grid_store;
pub mod load;
pub mod load_all;
pub mod load_audits;
pub mod resolve_row;
pub mod update;

// Re-exports
pub use append_audits::*;
pub use create::*;
pub use grid_store::*;
pub use load::*;
pub use load_all::*;
pub use load_audits::*;
pub use resolve_row::*;
pub use update::*;
