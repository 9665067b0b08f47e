pub mod audit;
pub mod event;
