//! Approval gate
//!
//! Decides whether workflow approval blocks an action on an item. Gating only
//! applies when workflow checking is active for the request and the item has a
//! workflow; every other case resolves to "approved".

use super::context::WorkflowContext;
use crate::config::EditorSettings;
use crate::platform::{ContentItem, Workflow};
use editlock_types::{TargetDatabase, WorkflowCheckMode};
use std::sync::Arc;

/// Whether workflow checking is active under the given mode
///
/// In `Default` mode checking follows the context site's `enable_workflow`
/// flag, or an edit-mode referrer. Without a site nothing is checked.
pub fn is_checking_active<I: ContentItem>(
    mode: WorkflowCheckMode,
    workflow: &WorkflowContext<'_, I>,
) -> bool {
    match mode {
        WorkflowCheckMode::Disabled => false,
        WorkflowCheckMode::ForcedOn => true,
        WorkflowCheckMode::Default => match workflow.context().site() {
            Some(site) => site.enable_workflow || workflow.is_referrer_in_edit_mode(),
            None => false,
        },
    }
}

/// Pure predicate over item, workflow context and target; never mutates the item
#[derive(Debug, Clone, Copy)]
pub struct ApprovalGate {
    workflows_enabled: bool,
}

impl ApprovalGate {
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            workflows_enabled: settings.workflows_enabled,
        }
    }

    /// Whether the item is approved for an action against `target`
    pub fn is_approved<I: ContentItem>(
        &self,
        mode: WorkflowCheckMode,
        workflow: &WorkflowContext<'_, I>,
        item: &I,
        target: Option<&TargetDatabase>,
    ) -> bool {
        match self.resolve_workflow(mode, workflow, item) {
            Some(assigned) => {
                let approved = assigned.is_approved(item, target);
                log::debug!(
                    "Item {} version {} approval under workflow '{}': {}",
                    item.id(),
                    item.version(),
                    assigned.workflow_id(),
                    approved
                );
                approved
            }
            None => {
                log::debug!("Item {} is not gated by workflow ({:?} mode)", item.id(), mode);
                true
            }
        }
    }

    /// Whether the item has a workflow assigned
    ///
    /// Resolution always uses `Default` mode activity, whatever mode the caller
    /// is running under.
    pub fn has_workflow<I: ContentItem>(
        &self,
        workflow: &WorkflowContext<'_, I>,
        item: &I,
    ) -> bool {
        if !self.workflows_enabled {
            return false;
        }
        self.resolve_workflow(WorkflowCheckMode::Default, workflow, item)
            .is_some()
    }

    fn resolve_workflow<I: ContentItem>(
        &self,
        mode: WorkflowCheckMode,
        workflow: &WorkflowContext<'_, I>,
        item: &I,
    ) -> Option<Arc<dyn Workflow<I>>> {
        if !is_checking_active(mode, workflow) {
            return None;
        }
        workflow.repository().workflow_provider(item)?.workflow(item)
    }
}
