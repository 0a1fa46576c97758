//! Host platform collaborators

pub mod traits;
pub mod memory;

pub use traits::{ContentItem, CookieStore, ItemRepository, Workflow, WorkflowProvider};
pub use memory::{CookieEntry, MemoryCookieJar, MemoryItem, MemoryRepository, MemoryWorkflow};
