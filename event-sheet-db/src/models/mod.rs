pub mod audit;
pub mod event;
pub mod schema;

// Re-exports
pub use audit::*;
pub use event::*;
pub use schema::*;
