//! Narrow contracts the lock policy consumes from the host platform
//!
//! Storage, versioning, workflow execution and cookie handling all belong to the
//! host. The policy only reads item state and issues lock/version requests
//! through these traits. Every call is synchronous and may fail; failures are
//! reported through `bool` / `Option` exactly as the platform reports them.

use chrono::{DateTime, Utc};
use editlock_types::{ItemId, TargetDatabase, VersionNumber};
use std::sync::Arc;

/// A handle to one version of a content item
pub trait ContentItem: Clone {
    fn id(&self) -> ItemId;

    fn version(&self) -> VersionNumber;

    /// Whether the acting user can currently read this item
    fn can_read(&self) -> bool;

    fn is_locked(&self) -> bool;

    /// Acquire the edit lock for the acting user. Returns false when acquisition fails.
    fn lock(&mut self) -> bool;

    fn unlock(&mut self) -> bool;

    /// Raw field value; `None` when the field has no value on this version
    fn field(&self, name: &str) -> Option<String>;

    /// Whether the item's template defines the named field
    fn is_field_part_of_template(&self, name: &str) -> bool;

    /// Whether this item holds the standard values of a template
    fn is_standard_values_holder(&self) -> bool;

    /// Create a new version after the latest one. `None` when the platform refuses.
    fn add_version(&self) -> Option<Self>;
}

/// The repository an item lives in
pub trait ItemRepository<I: ContentItem> {
    /// Workflow provider responsible for the item, if the repository has one
    fn workflow_provider(&self, item: &I) -> Option<&dyn WorkflowProvider<I>>;

    /// Whether the item's template standard values name a default workflow
    fn has_default_workflow(&self, item: &I) -> bool;
}

/// Resolves the workflow assigned to an item
pub trait WorkflowProvider<I: ContentItem> {
    fn workflow(&self, item: &I) -> Option<Arc<dyn Workflow<I>>>;
}

/// The external workflow engine's view of one workflow
pub trait Workflow<I: ContentItem> {
    fn workflow_id(&self) -> &str;

    /// Whether the item is in an approved (final) state for the target
    fn is_approved(&self, item: &I, target: Option<&TargetDatabase>) -> bool;
}

/// Response cookie writer
pub trait CookieStore {
    fn set_cookie_value(&mut self, key: &str, value: &str, expires: DateTime<Utc>);
}
