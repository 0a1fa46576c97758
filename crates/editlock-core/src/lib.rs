//! Editlock Core Library
//!
//! Approval gating and edit-lock toggling for the page editor. The host platform
//! owns items, workflows, locks and cookies; this crate decides what to ask of it.

pub mod config;
pub mod constants;
pub mod error;
pub mod locking;
pub mod platform;
pub mod workflow;

// Re-export main types for easy access
pub use config::EditorSettings;
pub use error::{EditLockError, Result};

pub use locking::{EditStartDecision, EditStartPolicy, ItemContext, LockReason, LockToggle};

pub use platform::{
    ContentItem,
    CookieStore,
    ItemRepository,
    Workflow,
    WorkflowProvider,
};

pub use workflow::{
    current_mode,
    is_checking_active,
    is_referrer_in_edit_mode,
    ApprovalGate,
    WorkflowCheckSwitcher,
    WorkflowContext,
};

pub use editlock_types::{
    ContextData,
    ItemId,
    SiteInfo,
    TargetDatabase,
    ToggleLockResponse,
    User,
    VersionNumber,
    WorkflowCheckMode,
};
