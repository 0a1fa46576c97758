//! Lock toggle request processing
//!
//! A locked item is unlocked. An unlocked item is locked directly for
//! administrators and through the edit-start policy for everyone else. When a
//! new version ends up locked, the editor's cached display date is reset.

use super::context::ItemContext;
use super::edit_start::{EditStartDecision, EditStartPolicy};
use crate::config::EditorSettings;
use crate::error::{EditLockError, Result};
use crate::platform::{ContentItem, CookieStore};
use crate::workflow::{current_mode, WorkflowContext};
use chrono::{DateTime, Utc};
use editlock_types::{SiteInfo, ToggleLockResponse, VersionNumber};

pub struct LockToggle<'a, I: ContentItem> {
    settings: &'a EditorSettings,
    workflow: &'a WorkflowContext<'a, I>,
    policy: EditStartPolicy<'a>,
}

impl<'a, I: ContentItem> LockToggle<'a, I> {
    pub fn new(settings: &'a EditorSettings, workflow: &'a WorkflowContext<'a, I>) -> Self {
        Self {
            settings,
            workflow,
            policy: EditStartPolicy::new(settings),
        }
    }

    /// Toggle the lock on the request's item and report the resulting state
    ///
    /// Fails with `InvalidContext` when the item did not resolve and with
    /// `LockDenied` when the item could not be locked.
    pub fn process_request(
        &self,
        request: &ItemContext<I>,
        cookies: &mut dyn CookieStore,
    ) -> Result<ToggleLockResponse> {
        let original = request.validate_context_item()?;
        let original_version = original.version();

        let item = self.switch_lock(original.clone()).ok_or_else(|| {
            EditLockError::LockDenied(format!(
                "Item {} version {} could not be locked",
                original.id(),
                original_version
            ))
        })?;

        self.handle_version_creating(original_version, &item, request.site(), cookies);

        Ok(ToggleLockResponse {
            locked: item.is_locked(),
            version: item.version(),
            revision: item.field(&self.settings.revision_field).unwrap_or_default(),
        })
    }

    /// Unlock a locked item, otherwise lock it. `None` means the lock was denied.
    pub fn switch_lock(&self, mut item: I) -> Option<I> {
        if item.is_locked() {
            if !item.unlock() {
                log::warn!("Platform reported a failed unlock for item {}", item.id());
            }
            log::info!("Unlocked item {} version {}", item.id(), item.version());
            return Some(item);
        }

        if self.workflow.context().is_administrator() {
            if !item.lock() {
                log::warn!("Administrator lock on item {} was not acquired", item.id());
            }
            log::info!("Administrator locked item {} version {}", item.id(), item.version());
            return Some(item);
        }

        self.start_editing(item)
    }

    /// Apply the edit-start policy to an unlocked item
    pub fn start_editing(&self, item: I) -> Option<I> {
        match self.policy.decide(self.workflow, &item, current_mode()) {
            EditStartDecision::LockInPlace(reason) => {
                log::debug!("Locking item {} in place: {}", item.id(), reason);
                self.lock(item)
            }
            EditStartDecision::LockNewVersion => match item.add_version() {
                Some(added) => {
                    log::info!(
                        "Created version {} of approved item {} before locking",
                        added.version(),
                        added.id()
                    );
                    self.lock(added)
                }
                None => {
                    log::warn!("Version creation failed for item {}", item.id());
                    None
                }
            },
        }
    }

    /// Lock the item, or `None` when its template has no lock field or acquisition fails
    pub fn lock(&self, mut item: I) -> Option<I> {
        if !item.is_field_part_of_template(&self.settings.lock_field) {
            log::warn!(
                "Item {} cannot be locked: template has no '{}' field",
                item.id(),
                self.settings.lock_field
            );
            return None;
        }

        if !item.lock() {
            log::warn!("Lock acquisition failed for item {}", item.id());
            return None;
        }

        log::info!("Locked item {} version {}", item.id(), item.version());
        Some(item)
    }

    fn handle_version_creating(
        &self,
        original_version: VersionNumber,
        item: &I,
        site: Option<&SiteInfo>,
        cookies: &mut dyn CookieStore,
    ) {
        if original_version == item.version() {
            return;
        }

        let cookie = &self.settings.display_date_cookie;
        let key = match site {
            Some(site) => site.cookie_key(cookie),
            None => cookie.clone(),
        };
        log::debug!("Resetting display date cookie '{}' after version {}", key, item.version());
        cookies.set_cookie_value(&key, "", DateTime::<Utc>::MIN_UTC);
    }
}
