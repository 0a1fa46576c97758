//! Edit lock toggling for the page editor ribbon

pub mod context;
pub mod edit_start;
pub mod toggle;

pub use context::ItemContext;
pub use edit_start::{EditStartDecision, EditStartPolicy, LockReason};
pub use toggle::LockToggle;
