//! Plugin configuration for the typeahead prompt.

/// Errors raised when validating a [`PluginConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The watch-mode trigger key must be exactly one character.
    #[error("Trigger key must be a single character, got '{0}'")]
    InvalidKey(String),

    /// The usage prompt text must not be empty.
    #[error("Usage prompt text cannot be empty")]
    EmptyPrompt,
}

/// Host-supplied configuration for the typeahead plugin.
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// Watch-mode key that activates the filter.
    pub key: String,

    /// Usage line shown in the watch menu.
    pub prompt: String,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            key: "z".to_string(),
            prompt: "filter by a filename fuzzy pattern".to_string(),
        }
    }
}

impl PluginConfig {
    /// Validates the configuration and produces the usage entry for the
    /// host's watch menu.
    pub fn usage_info(&self) -> Result<UsageInfo, ConfigError> {
        if self.key.chars().count() != 1 {
            return Err(ConfigError::InvalidKey(self.key.clone()));
        }
        if self.prompt.is_empty() {
            return Err(ConfigError::EmptyPrompt);
        }
        Ok(UsageInfo {
            key: self.key.clone(),
            prompt: self.prompt.clone(),
        })
    }
}

/// Entry for the host's watch-usage menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageInfo {
    pub key: String,
    pub prompt: String,
}
