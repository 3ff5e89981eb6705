//! Common CLI utilities shared across all CLI commands.
//!
//! This module provides:
//! - `CliContext`: Shared context for loading config and vocabulary
//! - Output helpers: `print_error`, `print_warning`, `print_info`

use crate::config::{Config, SetConfig};
use crate::services::{JsonVocabularyRepository, Vocabulary, VocabularyRepository};
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Shared context for CLI commands.
pub struct CliContext {
    /// The loaded configuration
    pub config: Config,
    /// Path to the config file
    pub config_path: PathBuf,
}

impl CliContext {
    /// Load the CLI context from the configuration file.
    pub fn load() -> Result<Self> {
        let config_path = crate::utils::get_config_path();

        let config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;

        Ok(Self {
            config,
            config_path,
        })
    }

    /// Resolve a set id, defaulting to the active set.
    pub fn resolve_set(&self, set: Option<&str>) -> Result<&SetConfig> {
        let id = set.unwrap_or(&self.config.active_set);
        match self.config.get_set(id) {
            Some(set) => Ok(set),
            None => bail!(
                "Unknown set '{}'. Run 'lingodeck sets' to list configured sets.",
                id
            ),
        }
    }

    pub fn is_active_set(&self, id: &str) -> bool {
        self.config.active_set == id
    }

    /// Load the vocabulary of `set_id` from the data directory.
    pub fn load_vocabulary(&self, set_id: &str) -> Result<Vec<Vocabulary>> {
        JsonVocabularyRepository::new(&self.config.data_dir).load_vocabulary(set_id)
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print a warning message with a warning sign prefix.
pub fn print_warning(msg: &str) {
    println!("\u{26A0}\u{FE0F} {}", msg);
}

/// Print an info message with an info sign prefix.
pub fn print_info(msg: &str) {
    println!("\u{2139}\u{FE0F} {}", msg);
}
