//! Shared test utilities for workflow integration tests.
//!
//! Provides `TestEnv` - an isolated lingodeck environment (config directory,
//! vocabulary data directory and a seeded config) with automatic cleanup via
//! `TempDir`.
//!
//! ## Tests that read the real config path
//!
//! CLI helpers resolve the config file through `get_config_path()`. Use
//! `.with_env_override()` on the builder to point `LINGODECK_CONFIG_DIR` at the
//! test directory. Overrides are serialized through a global mutex and the
//! previous value is restored on drop.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::runtime::Handle;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use lingodeck::config::{Config, SetConfig};
use lingodeck::container::RootStore;
use lingodeck::icons::{IconSet, Icons};
use lingodeck::services::{JsonVocabularyRepository, Vocabulary};
use lingodeck::utils::CONFIG_DIR_ENV;

/// Only one test may override the environment at a time.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Restores `LINGODECK_CONFIG_DIR` when dropped.
struct EnvGuard {
    old_config_dir: Option<String>,
    #[allow(dead_code)]
    lock: std::sync::MutexGuard<'static, ()>,
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_config_dir {
            Some(v) => std::env::set_var(CONFIG_DIR_ENV, v),
            None => std::env::remove_var(CONFIG_DIR_ENV),
        }
    }
}

/// An isolated lingodeck setup:
/// - `config/` - config directory holding `config.toml`
/// - `data/` - vocabulary files, one `<set_id>.json` per set
#[allow(dead_code)]
pub struct TestEnv {
    temp_dir: TempDir,
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
    env_guard: Option<EnvGuard>,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_or_create(&self.config_path())
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save(&self.config_path())
    }

    pub fn repository(&self) -> JsonVocabularyRepository {
        JsonVocabularyRepository::new(&self.data_dir)
    }

    pub fn write_vocabulary(&self, set_id: &str, vocabulary: &[Vocabulary]) -> Result<()> {
        self.repository().save_vocabulary(set_id, vocabulary)
    }

    /// Write raw file content for a set, e.g. to exercise parse failures.
    pub fn write_raw_vocabulary(&self, set_id: &str, content: &str) -> Result<()> {
        let path = self.repository().set_path(set_id);
        std::fs::write(&path, content).with_context(|| format!("Failed to write {:?}", path))
    }

    /// Root store over this environment's config and data, spawning on `runtime`.
    pub fn root_store(&self, runtime: Handle) -> Result<RootStore> {
        let config = self.load_config()?;
        Ok(RootStore::from_config(
            &config,
            Arc::new(self.repository()),
            runtime,
            Icons::with_icon_set(IconSet::Ascii),
        ))
    }
}

#[derive(Default)]
pub struct TestEnvBuilder {
    sets: Vec<SetConfig>,
    active_set: Option<String>,
    vocabulary: Vec<(String, Vec<Vocabulary>)>,
    env_override: bool,
}

#[allow(dead_code)]
impl TestEnvBuilder {
    pub fn with_set(mut self, id: &str, name: &str, learning_language: &str) -> Self {
        self.sets.push(SetConfig::new(id, name, learning_language, "en"));
        self
    }

    pub fn with_active_set(mut self, id: &str) -> Self {
        self.active_set = Some(id.to_string());
        self
    }

    pub fn with_vocabulary(mut self, set_id: &str, vocabulary: Vec<Vocabulary>) -> Self {
        self.vocabulary.push((set_id.to_string(), vocabulary));
        self
    }

    /// Point `LINGODECK_CONFIG_DIR` at the test config directory.
    pub fn with_env_override(mut self) -> Self {
        self.env_override = true;
        self
    }

    pub fn build(self) -> Result<TestEnv> {
        let env_guard = if self.env_override {
            // A panicking test poisons the lock; the guarded value is still usable
            let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
            Some(EnvGuard {
                old_config_dir: std::env::var(CONFIG_DIR_ENV).ok(),
                lock,
            })
        } else {
            None
        };

        let temp_dir = TempDir::new().context("Failed to create temp dir")?;
        let config_dir = temp_dir.path().join("config");
        let data_dir = temp_dir.path().join("data");
        std::fs::create_dir_all(&config_dir)?;
        std::fs::create_dir_all(&data_dir)?;

        if env_guard.is_some() {
            std::env::set_var(CONFIG_DIR_ENV, &config_dir);
        }

        let env = TestEnv {
            temp_dir,
            config_dir,
            data_dir,
            env_guard,
        };

        let mut config = Config::default();
        config.data_dir = env.data_dir.clone();
        if !self.sets.is_empty() {
            config.sets = self.sets;
        }
        config.active_set = self
            .active_set
            .or_else(|| config.sets.first().map(|s| s.id.clone()))
            .unwrap_or_default();
        env.save_config(&config)?;

        for (set_id, vocabulary) in &self.vocabulary {
            env.write_vocabulary(set_id, vocabulary)?;
        }

        Ok(env)
    }
}

/// A key press event for `code`.
#[allow(dead_code)]
pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}
