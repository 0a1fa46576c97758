//! Workflow context: the ambient state a gating decision is made under

use super::referrer;
use crate::platform::{ContentItem, ItemRepository};
use editlock_types::ContextData;
use url::Url;

/// Snapshot of the ambient site/user context, the item repository and the inbound referrer
pub struct WorkflowContext<'a, I: ContentItem> {
    context: ContextData,
    repository: &'a dyn ItemRepository<I>,
    referrer: Option<Url>,
}

impl<'a, I: ContentItem> WorkflowContext<'a, I> {
    pub fn new(context: ContextData, repository: &'a dyn ItemRepository<I>) -> Self {
        Self {
            context,
            repository,
            referrer: None,
        }
    }

    /// Attach the inbound request's referrer. Values that are not absolute URLs are ignored.
    pub fn with_referrer(mut self, referrer: &str) -> Self {
        self.referrer = match Url::parse(referrer) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("Ignoring unparseable referrer '{}': {}", referrer, e);
                None
            }
        };
        self
    }

    pub fn context(&self) -> &ContextData {
        &self.context
    }

    pub fn repository(&self) -> &'a dyn ItemRepository<I> {
        self.repository
    }

    pub fn referrer(&self) -> Option<&Url> {
        self.referrer.as_ref()
    }

    pub fn is_referrer_in_edit_mode(&self) -> bool {
        referrer::is_referrer_in_edit_mode(self.referrer())
    }

    /// Whether the item's template names a default workflow
    pub fn has_default_workflow(&self, item: &I) -> bool {
        self.repository.has_default_workflow(item)
    }
}
