//! Request context of a ribbon action

use crate::error::{EditLockError, Result};
use crate::platform::ContentItem;
use editlock_types::SiteInfo;

/// Item and site a ribbon request targets
#[derive(Debug, Clone)]
pub struct ItemContext<I: ContentItem> {
    item: Option<I>,
    site: Option<SiteInfo>,
}

impl<I: ContentItem> ItemContext<I> {
    /// `item` is `None` when the request's item reference did not resolve
    pub fn new(item: Option<I>, site: Option<SiteInfo>) -> Self {
        Self { item, site }
    }

    pub fn item(&self) -> Option<&I> {
        self.item.as_ref()
    }

    pub fn site(&self) -> Option<&SiteInfo> {
        self.site.as_ref()
    }

    /// The context item, provided it resolved and is readable
    pub fn validate_context_item(&self) -> Result<&I> {
        let item = self.item.as_ref().ok_or_else(|| {
            EditLockError::InvalidContext("The context item could not be resolved".to_string())
        })?;

        if !item.can_read() {
            return Err(EditLockError::InvalidContext(format!(
                "The context item {} is not accessible",
                item.id()
            )));
        }

        Ok(item)
    }
}
