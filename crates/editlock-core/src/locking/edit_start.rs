//! Edit-start policy
//!
//! Run when a non-administrator locks an unlocked item. Guards are evaluated in
//! order and the first match wins:
//!
//! 1. lock-before-edit not required, or the actor is an administrator
//! 2. the item holds template standard values
//! 3. the item has neither an assigned nor a default workflow
//! 4. the item is not approved under its workflow
//!
//! Each of these locks the item as it is. An item that passes all four is
//! approved under an active workflow, so editing it must start on a new version.

use crate::config::EditorSettings;
use crate::platform::ContentItem;
use crate::workflow::{ApprovalGate, WorkflowContext};
use editlock_types::WorkflowCheckMode;
use std::fmt;

/// Why an item is locked without creating a version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockReason {
    LockBeforeEditNotRequired,
    Administrator,
    StandardValuesHolder,
    NoWorkflow,
    NotApproved,
}

impl fmt::Display for LockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::LockBeforeEditNotRequired => "lock before editing is not required",
            Self::Administrator => "actor is an administrator",
            Self::StandardValuesHolder => "item holds standard values",
            Self::NoWorkflow => "item has no workflow",
            Self::NotApproved => "item is not approved",
        };
        f.write_str(text)
    }
}

/// Outcome of the edit-start policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStartDecision {
    /// Lock the item as it is
    LockInPlace(LockReason),
    /// Add a version and lock the new version
    LockNewVersion,
}

pub struct EditStartPolicy<'s> {
    settings: &'s EditorSettings,
    gate: ApprovalGate,
}

impl<'s> EditStartPolicy<'s> {
    pub fn new(settings: &'s EditorSettings) -> Self {
        Self {
            settings,
            gate: ApprovalGate::new(settings),
        }
    }

    /// Decide how editing starts on `item`. `mode` is the check mode the approval guard runs under.
    pub fn decide<I: ContentItem>(
        &self,
        workflow: &WorkflowContext<'_, I>,
        item: &I,
        mode: WorkflowCheckMode,
    ) -> EditStartDecision {
        if !self.settings.require_lock_before_editing {
            return EditStartDecision::LockInPlace(LockReason::LockBeforeEditNotRequired);
        }

        if workflow.context().is_administrator() {
            return EditStartDecision::LockInPlace(LockReason::Administrator);
        }

        if item.is_standard_values_holder() {
            return EditStartDecision::LockInPlace(LockReason::StandardValuesHolder);
        }

        if !self.gate.has_workflow(workflow, item) && !workflow.has_default_workflow(item) {
            return EditStartDecision::LockInPlace(LockReason::NoWorkflow);
        }

        if !self.gate.is_approved(mode, workflow, item, None) {
            return EditStartDecision::LockInPlace(LockReason::NotApproved);
        }

        EditStartDecision::LockNewVersion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MemoryItem, MemoryRepository, MemoryWorkflow};
    use editlock_types::{ContextData, SiteInfo, User};

    fn editor_context() -> ContextData {
        ContextData::new(Some(SiteInfo::new("website", true)), User::new("sitecore\\editor"))
    }

    #[test]
    fn test_lock_before_edit_not_required() {
        let item = MemoryItem::new("sitecore\\editor");
        let repository =
            MemoryRepository::new().assign(item.id(), MemoryWorkflow::approving("sample"));
        let workflow = WorkflowContext::new(editor_context(), &repository);
        let settings = EditorSettings {
            require_lock_before_editing: false,
            ..EditorSettings::default()
        };

        let decision =
            EditStartPolicy::new(&settings).decide(&workflow, &item, WorkflowCheckMode::Default);
        assert_eq!(decision, EditStartDecision::LockInPlace(LockReason::LockBeforeEditNotRequired));
    }

    #[test]
    fn test_administrator_context() {
        let item = MemoryItem::new("sitecore\\admin");
        let repository =
            MemoryRepository::new().assign(item.id(), MemoryWorkflow::approving("sample"));
        let context = ContextData::new(
            Some(SiteInfo::new("website", true)),
            User::administrator("sitecore\\admin"),
        );
        let workflow = WorkflowContext::new(context, &repository);
        let settings = EditorSettings::default();

        let decision =
            EditStartPolicy::new(&settings).decide(&workflow, &item, WorkflowCheckMode::Default);
        assert_eq!(decision, EditStartDecision::LockInPlace(LockReason::Administrator));
    }

    #[test]
    fn test_standard_values_holder_wins_over_workflow() {
        let item = MemoryItem::new("sitecore\\editor").as_standard_values();
        let repository =
            MemoryRepository::new().assign(item.id(), MemoryWorkflow::approving("sample"));
        let workflow = WorkflowContext::new(editor_context(), &repository);
        let settings = EditorSettings::default();

        let decision =
            EditStartPolicy::new(&settings).decide(&workflow, &item, WorkflowCheckMode::Default);
        assert_eq!(decision, EditStartDecision::LockInPlace(LockReason::StandardValuesHolder));
    }

    #[test]
    fn test_no_workflow() {
        let item = MemoryItem::new("sitecore\\editor");
        let repository = MemoryRepository::new();
        let workflow = WorkflowContext::new(editor_context(), &repository);
        let settings = EditorSettings::default();

        let decision =
            EditStartPolicy::new(&settings).decide(&workflow, &item, WorkflowCheckMode::Default);
        assert_eq!(decision, EditStartDecision::LockInPlace(LockReason::NoWorkflow));
    }

    #[test]
    fn test_default_workflow_counts_as_workflow() {
        let item = MemoryItem::new("sitecore\\editor");
        let repository = MemoryRepository::new().with_default_workflow(item.id());
        let workflow = WorkflowContext::new(editor_context(), &repository);
        let settings = EditorSettings::default();

        // No assigned workflow to ask, so the approval guard lets it through
        let decision =
            EditStartPolicy::new(&settings).decide(&workflow, &item, WorkflowCheckMode::Default);
        assert_eq!(decision, EditStartDecision::LockNewVersion);
    }

    #[test]
    fn test_not_approved() {
        let item = MemoryItem::new("sitecore\\editor");
        let repository =
            MemoryRepository::new().assign(item.id(), MemoryWorkflow::rejecting("sample"));
        let workflow = WorkflowContext::new(editor_context(), &repository);
        let settings = EditorSettings::default();

        let decision =
            EditStartPolicy::new(&settings).decide(&workflow, &item, WorkflowCheckMode::Default);
        assert_eq!(decision, EditStartDecision::LockInPlace(LockReason::NotApproved));
    }

    #[test]
    fn test_approved_item_gets_new_version() {
        let item = MemoryItem::new("sitecore\\editor");
        let repository =
            MemoryRepository::new().assign(item.id(), MemoryWorkflow::approving("sample"));
        let workflow = WorkflowContext::new(editor_context(), &repository);
        let settings = EditorSettings::default();

        let decision =
            EditStartPolicy::new(&settings).decide(&workflow, &item, WorkflowCheckMode::Default);
        assert_eq!(decision, EditStartDecision::LockNewVersion);
    }

    #[test]
    fn test_disabled_mode_skips_approval_but_not_workflow_existence() {
        let item = MemoryItem::new("sitecore\\editor");
        let rejecting = MemoryWorkflow::rejecting("sample");
        let repository = MemoryRepository::new().assign(item.id(), rejecting.clone());
        let workflow = WorkflowContext::new(editor_context(), &repository);
        let settings = EditorSettings::default();

        let decision =
            EditStartPolicy::new(&settings).decide(&workflow, &item, WorkflowCheckMode::Disabled);
        assert_eq!(decision, EditStartDecision::LockNewVersion);
        assert_eq!(rejecting.approval_checks(), 0);
    }
}
