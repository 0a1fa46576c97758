//! Scoped override of the workflow check mode
//!
//! Overrides nest: entering a switcher pushes a mode for the current thread and
//! dropping the guard removes that override again. With nothing pushed the mode
//! is `WorkflowCheckMode::Default`.

use editlock_types::WorkflowCheckMode;
use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

thread_local! {
    static MODE_STACK: RefCell<Vec<(u64, WorkflowCheckMode)>> = const { RefCell::new(Vec::new()) };
    static NEXT_GUARD_ID: Cell<u64> = const { Cell::new(0) };
}

/// Mode in effect for the current thread
pub fn current_mode() -> WorkflowCheckMode {
    MODE_STACK.with(|stack| {
        stack
            .borrow()
            .last()
            .map(|(_, mode)| *mode)
            .unwrap_or_default()
    })
}

/// Guard keeping a check mode in effect until dropped
#[must_use = "the override ends as soon as the switcher is dropped"]
#[derive(Debug)]
pub struct WorkflowCheckSwitcher {
    id: u64,
    mode: WorkflowCheckMode,
    // The stack is per thread, so the guard must stay on the thread that pushed it
    _not_send: PhantomData<*const ()>,
}

impl WorkflowCheckSwitcher {
    pub fn enter(mode: WorkflowCheckMode) -> Self {
        let id = NEXT_GUARD_ID.with(|next| {
            let id = next.get();
            next.set(id.wrapping_add(1));
            id
        });
        let depth = MODE_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            stack.push((id, mode));
            stack.len()
        });
        log::debug!("Workflow check mode {:?} entered at depth {}", mode, depth);

        Self {
            id,
            mode,
            _not_send: PhantomData,
        }
    }

    pub fn mode(&self) -> WorkflowCheckMode {
        self.mode
    }
}

impl Drop for WorkflowCheckSwitcher {
    fn drop(&mut self) {
        // Only this guard's entry goes; overrides entered later stay in effect
        MODE_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(index) = stack.iter().rposition(|(id, _)| *id == self.id) {
                stack.remove(index);
            }
        });
    }
}
