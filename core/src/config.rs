//! Application configuration, persisted via confy.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors during configuration operations
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[from] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),
}

#[derive(Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Whether the first-run onboarding flow has been completed.
    #[serde(default)]
    pub onboarding_completed: bool,
    /// Base URL of the image-generation service.
    #[serde(default = "default_toolkit_base_url")]
    pub toolkit_base_url: String,
}

fn default_toolkit_base_url() -> String {
    crate::generate::DEFAULT_BASE_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            onboarding_completed: false,
            toolkit_base_url: default_toolkit_base_url(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        confy::load("chronolens", None).unwrap_or_default()
    }

    pub fn save(self) -> Result<(), ConfigError> {
        confy::store("chronolens", None, self).map_err(ConfigError::Save)
    }
}
