//! User settings persistence
//!
//! Stores user preferences in `~/.config/linkchord/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::editor::{Placeholders, DEFAULT_CHORD_PLACEHOLDER, DEFAULT_LINK_PLACEHOLDER};

/// Settings that persist across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Where bindings are stored (defaults to `storage.json` in the config dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_path: Option<PathBuf>,

    /// Prompt shown in an empty link input
    #[serde(default = "default_link_placeholder")]
    pub link_placeholder: String,

    /// Label on the chord button before a chord is recorded
    #[serde(default = "default_chord_placeholder")]
    pub chord_placeholder: String,

    /// Open matched links in the browser; when false they are only logged
    #[serde(default = "default_open_links")]
    pub open_links: bool,
}

fn default_link_placeholder() -> String {
    DEFAULT_LINK_PLACEHOLDER.to_string()
}

fn default_chord_placeholder() -> String {
    DEFAULT_CHORD_PLACEHOLDER.to_string()
}

fn default_open_links() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_path: None,
            link_placeholder: default_link_placeholder(),
            chord_placeholder: default_chord_placeholder(),
            open_links: default_open_links(),
        }
    }
}

impl Settings {
    /// Load settings from the config dir, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load settings from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(settings) => {
                    tracing::info!("Loaded config from {}", path.display());
                    settings
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Binding storage file, honoring the override
    pub fn storage_file(&self) -> Option<PathBuf> {
        self.storage_path
            .clone()
            .or_else(crate::config_paths::storage_file)
    }

    pub fn placeholders(&self) -> Placeholders {
        Placeholders {
            link: self.link_placeholder.clone(),
            chord: self.chord_placeholder.clone(),
        }
    }
}
