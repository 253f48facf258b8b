//! Toolbar configuration.
//!
//! Loaded from `toolbar.toml` in the platform config directory. Every field
//! is `#[serde(default)]`, so a partial file only overrides what it names.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::collaborator::FeatureFlags;
use crate::control::{ControlId, ControlPrefix};

/// When the first view gets selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefaultViewPolicy {
    /// The first view ever added is selected immediately
    #[default]
    FirstAdded,
    /// Nothing is selected until `select_default_view` is called
    Deferred,
}

/// Main toolbar configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Prefix placed before `toolbar-` in control ids
    pub prefix: Option<String>,

    /// Enables experimental controls (publish)
    pub experimental: bool,

    /// First-view selection policy
    pub default_view_policy: DefaultViewPolicy,

    /// Views registered on startup
    pub views: Vec<String>,

    /// Controls present in the host layout
    pub controls: Vec<ControlId>,
}

impl ToolbarConfig {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from_default_path().unwrap_or_default()
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("codestrip").join("toolbar.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::default_path()?)
    }

    /// Saves the config to a file, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The composed control id prefix.
    pub fn control_prefix(&self) -> ControlPrefix {
        ControlPrefix::new(self.prefix.as_deref())
    }
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            experimental: false,
            default_view_policy: DefaultViewPolicy::default(),
            views: Vec::new(),
            controls: ControlId::ALL.to_vec(),
        }
    }
}

impl FeatureFlags for ToolbarConfig {
    fn experimental_enabled(&self) -> bool {
        self.experimental
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
