pub mod audit;
pub mod event_sheet;
pub mod note;

pub use audit::*;
pub use event_sheet::*;
pub use note::*;
