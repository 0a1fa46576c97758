//! Shared types for the page editor lock policy

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Strongly typed item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        // Accepts both bare and braced GUIDs
        let trimmed = s.trim_start_matches('{').trim_end_matches('}');
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|e| format!("Invalid ItemId format: {}", e))
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.hyphenated().to_string().to_uppercase())
    }
}

/// Version number of an item within one language
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionNumber(u32);

impl VersionNumber {
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// The number the platform assigns to a version added after this one
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Name of the repository an approval is evaluated against (e.g. a publishing target)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetDatabase(String);

impl TargetDatabase {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How workflow checking behaves for the current dynamic extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WorkflowCheckMode {
    /// Decide per site, with the edit-mode referrer as a fallback
    #[default]
    Default,
    /// Workflow never gates anything
    Disabled,
    /// Workflow always gates, regardless of site settings
    ForcedOn,
}

/// Acting user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub is_administrator: bool,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_administrator: false,
        }
    }

    pub fn administrator(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_administrator: true,
        }
    }
}

/// Site the request is served under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    #[serde(default)]
    pub enable_workflow: bool,
}

impl SiteInfo {
    pub fn new(name: impl Into<String>, enable_workflow: bool) -> Self {
        Self {
            name: name.into(),
            enable_workflow,
        }
    }

    /// Site-scoped cookie name, `<site>#<key>`
    pub fn cookie_key(&self, key: &str) -> String {
        format!("{}#{}", self.name, key)
    }
}

/// Ambient context a workflow-state snapshot was taken under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextData {
    site: Option<SiteInfo>,
    user: User,
}

impl ContextData {
    pub fn new(site: Option<SiteInfo>, user: User) -> Self {
        Self { site, user }
    }

    pub fn site(&self) -> Option<&SiteInfo> {
        self.site.as_ref()
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn is_administrator(&self) -> bool {
        self.user.is_administrator
    }
}

/// Value returned to the editor after a lock toggle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ToggleLockResponse {
    pub locked: bool,
    pub version: VersionNumber,
    pub revision: String,
}
