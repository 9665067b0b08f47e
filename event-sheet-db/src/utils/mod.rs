pub mod a1;
pub mod timestamp;

pub use a1::*;
pub use timestamp::*;
