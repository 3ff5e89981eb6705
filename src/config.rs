use crate::keymap::Keymap;
use crate::styles::ThemeType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI theme (light or dark)
    #[serde(default)]
    pub theme: ThemeType,
    /// Id of the set currently being studied
    #[serde(default)]
    pub active_set: String,
    /// Directory holding `<set_id>.json` vocabulary files
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Keyboard bindings
    #[serde(default)]
    pub keymap: Keymap,
    /// Available sets
    #[serde(default = "default_sets")]
    pub sets: Vec<SetConfig>,
    /// Review scheduling settings
    #[serde(default)]
    pub spaced_repetition: SpacedRepetitionSettings,
}

/// A configured vocabulary set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetConfig {
    /// Identifier (also the vocabulary file stem)
    pub id: String,
    /// Display name
    pub name: String,
    /// Language being learned, e.g. "es"
    pub learning_language: String,
    /// Language definitions are written in, e.g. "en"
    #[serde(default = "default_translated_language")]
    pub translated_language: String,
}

impl SetConfig {
    pub fn new(id: &str, name: &str, learning_language: &str, translated_language: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            learning_language: learning_language.to_string(),
            translated_language: translated_language.to_string(),
        }
    }
}

/// Spaced-repetition scheduling settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacedRepetitionSettings {
    /// Review interval for level 1, in hours. Each level doubles it.
    #[serde(default = "default_initial_interval_hours")]
    pub initial_interval_hours: u32,
    /// Highest level an item can reach
    #[serde(default = "default_max_level")]
    pub max_level: u8,
}

impl Default for SpacedRepetitionSettings {
    fn default() -> Self {
        Self {
            initial_interval_hours: default_initial_interval_hours(),
            max_level: default_max_level(),
        }
    }
}

fn default_sets() -> Vec<SetConfig> {
    vec![SetConfig::new("default", "Spanish", "es", "en")]
}

fn default_data_dir() -> PathBuf {
    crate::utils::get_data_dir()
}

fn default_translated_language() -> String {
    "en".to_string()
}

fn default_initial_interval_hours() -> u32 {
    12
}

fn default_max_level() -> u8 {
    10
}

impl Config {
    /// Load configuration from file or create default
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let mut config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;

            // An unknown or empty active set falls back to the first configured one
            if !config.has_set(&config.active_set) {
                if let Some(first) = config.sets.first() {
                    config.active_set = first.id.clone();
                }
            }

            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file with secure permissions
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        // Set secure permissions (600: owner read/write only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(config_path)
                .with_context(|| format!("Failed to get file metadata: {:?}", config_path))?
                .permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(config_path, perms)
                .with_context(|| format!("Failed to set file permissions: {:?}", config_path))?;
        }

        Ok(())
    }

    /// Get default configuration
    pub fn default() -> Self {
        let sets = default_sets();
        Self {
            theme: ThemeType::default(),
            keymap: Keymap::default(),
            active_set: sets[0].id.clone(),
            sets,
            data_dir: default_data_dir(),
            spaced_repetition: SpacedRepetitionSettings::default(),
        }
    }

    /// Get a set by id
    pub fn get_set(&self, id: &str) -> Option<&SetConfig> {
        self.sets.iter().find(|s| s.id == id)
    }

    /// Check if a set id exists
    pub fn has_set(&self, id: &str) -> bool {
        self.get_set(id).is_some()
    }
}
