//! Workflow gating: ambient context, check-mode overrides and the approval gate

pub mod approval_gate;
pub mod context;
pub mod referrer;
pub mod switcher;

pub use approval_gate::{is_checking_active, ApprovalGate};
pub use context::WorkflowContext;
pub use referrer::is_referrer_in_edit_mode;
pub use switcher::{current_mode, WorkflowCheckSwitcher};
