//! Vocabulary storage.
//!
//! Each set's vocabulary lives in `<data_dir>/<set_id>.json` as a JSON array.
//! The repository is shared with background refresh tasks, so implementations
//! must be `Send + Sync`.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::debug;

/// Category assigned to vocabulary without one
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Lifecycle status of a vocabulary item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabularyStatus {
    #[default]
    Active,
    Archived,
    Deleted,
}

/// A single vocabulary item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub id: String,
    /// The term being learned
    pub text: String,
    #[serde(default)]
    pub definitions: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Spaced-repetition level; 0 means never studied
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub last_learned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: VocabularyStatus,
}

impl Vocabulary {
    pub fn new(id: &str, text: &str) -> Self {
        Self {
            id: id.to_string(),
            text: text.to_string(),
            definitions: Vec::new(),
            category: None,
            level: 0,
            last_learned_at: None,
            status: VocabularyStatus::Active,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_level(mut self, level: u8, last_learned_at: Option<DateTime<Utc>>) -> Self {
        self.level = level;
        self.last_learned_at = last_learned_at;
        self
    }

    pub fn with_status(mut self, status: VocabularyStatus) -> Self {
        self.status = status;
        self
    }

    /// Category name used for filtering
    pub fn category_name(&self) -> &str {
        self.category.as_deref().unwrap_or(UNCATEGORIZED)
    }
}

/// Source of vocabulary for a set
pub trait VocabularyRepository: Send + Sync {
    /// Load every vocabulary item of `set_id`. An unknown set yields an empty list.
    fn load_vocabulary(&self, set_id: &str) -> Result<Vec<Vocabulary>>;
}

/// Repository reading one JSON file per set
#[derive(Debug, Clone)]
pub struct JsonVocabularyRepository {
    data_dir: PathBuf,
}

impl JsonVocabularyRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    pub fn set_path(&self, set_id: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", set_id))
    }

    /// Write `vocabulary` as the content of `set_id`.
    pub fn save_vocabulary(&self, set_id: &str, vocabulary: &[Vocabulary]) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)
            .with_context(|| format!("Failed to create data directory: {:?}", self.data_dir))?;
        let path = self.set_path(set_id);
        let content =
            serde_json::to_string_pretty(vocabulary).context("Failed to serialize vocabulary")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write vocabulary file: {:?}", path))
    }
}

impl VocabularyRepository for JsonVocabularyRepository {
    fn load_vocabulary(&self, set_id: &str) -> Result<Vec<Vocabulary>> {
        let path = self.set_path(set_id);
        if !path.exists() {
            debug!("No vocabulary file at {:?}", path);
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read vocabulary file: {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse vocabulary file: {:?}", path))
    }
}

/// Repository held in memory, keyed by set id
#[derive(Debug, Default)]
pub struct InMemoryVocabularyRepository {
    sets: RwLock<HashMap<String, Vec<Vocabulary>>>,
}

impl InMemoryVocabularyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set(self, set_id: &str, vocabulary: Vec<Vocabulary>) -> Self {
        self.insert(set_id, vocabulary);
        self
    }

    pub fn insert(&self, set_id: &str, vocabulary: Vec<Vocabulary>) {
        if let Ok(mut sets) = self.sets.write() {
            sets.insert(set_id.to_string(), vocabulary);
        }
    }
}

impl VocabularyRepository for InMemoryVocabularyRepository {
    fn load_vocabulary(&self, set_id: &str) -> Result<Vec<Vocabulary>> {
        let sets = self
            .sets
            .read()
            .map_err(|_| anyhow::anyhow!("Vocabulary store lock poisoned"))?;
        Ok(sets.get(set_id).cloned().unwrap_or_default())
    }
}
