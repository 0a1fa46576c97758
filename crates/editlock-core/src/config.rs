//! Configuration management for the editor lock policy

use serde::{Deserialize, Serialize};
use crate::constants;
use crate::error::{EditLockError, Result};
use std::path::Path;

/// Editor settings the lock policy reads from the host configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Global workflow switch; when off no item is considered to have a workflow
    #[serde(default = "default_true")]
    pub workflows_enabled: bool,

    /// Non-administrators must lock an item before editing it
    #[serde(default = "default_true")]
    pub require_lock_before_editing: bool,

    #[serde(alias = "date_cookie", default = "default_display_date_cookie")]
    pub display_date_cookie: String,

    #[serde(default = "default_revision_field")]
    pub revision_field: String,

    #[serde(default = "default_lock_field")]
    pub lock_field: String,
}

fn default_true() -> bool {
    true
}

fn default_display_date_cookie() -> String {
    constants::DISPLAY_DATE_COOKIE.to_string()
}

fn default_revision_field() -> String {
    constants::REVISION_FIELD.to_string()
}

fn default_lock_field() -> String {
    constants::LOCK_FIELD.to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            workflows_enabled: true,
            require_lock_before_editing: true,
            display_date_cookie: default_display_date_cookie(),
            revision_field: default_revision_field(),
            lock_field: default_lock_field(),
        }
    }
}

impl EditorSettings {
    /// Load settings from a file, with `EDITLOCK_*` environment variables taking precedence
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EditLockError::Config(format!(
                "Settings file not found: {}",
                path.display()
            )));
        }

        let layered = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix(constants::ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| EditLockError::Config(format!("Failed to read settings: {}", e)))?;

        let settings: Self = layered
            .try_deserialize()
            .map_err(|e| EditLockError::Config(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        log::debug!("Loaded editor settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| EditLockError::Config(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.display_date_cookie.trim().is_empty() {
            return Err(EditLockError::Config("Display date cookie name is required".to_string()));
        }

        if self.revision_field.trim().is_empty() || self.lock_field.trim().is_empty() {
            return Err(EditLockError::Config(
                "Revision and lock field names are required".to_string(),
            ));
        }

        Ok(())
    }
}
