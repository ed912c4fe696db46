use std::path::{Path, PathBuf};

use anyhow::{Context as _, anyhow};
use serde::{Deserialize, Serialize};

use crate::models::View;
use crate::ui::theme::ThemePreference;

pub const CONFIG_ENV: &str = "HUBBUB_CONFIG";
pub const CONFIG_FILE: &str = "config.json";

/// Start-up settings read from `config.json`.
///
/// The file is only ever read. Navigation state is never written back, so
/// every launch starts from `start_view` with the default selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: ThemePreference,
    pub start_view: View,
}

impl AppConfig {
    /// Load from `$HUBBUB_CONFIG` or the platform config directory.
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self, anyhow::Error> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self, anyhow::Error> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config '{}'", path.display()))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| anyhow!("Failed to parse config '{}': {}", path.display(), e))?;
        tracing::info!(
            path = %path.display(),
            theme = config.theme.name(),
            start_view = %config.start_view,
            "Loaded config"
        );
        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf, anyhow::Error> {
        if let Ok(custom) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(custom);
            if path.is_absolute() {
                return Ok(path);
            } else {
                tracing::warn!("{} is not an absolute path, using default", CONFIG_ENV);
            }
        }
        let base_dir = dirs::config_dir()
            .or_else(dirs::data_dir)
            .context("Failed to determine config directory")?;
        Ok(base_dir.join("hubbub").join(CONFIG_FILE))
    }
}
