pub mod codec;
pub mod diff;
pub mod event;
pub mod note_slots;

pub use codec::*;
pub use diff::*;
pub use event::*;
pub use note_slots::*;
