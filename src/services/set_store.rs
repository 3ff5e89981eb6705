//! Set store: the configured vocabulary sets and which one is active.
//!
//! A set is a named collection of vocabulary for one language pair. Screens
//! read the current set through this store and switch it through
//! `switch_active_set`, which announces the change on the event bus.

use crate::config::{Config, SetConfig};
use crate::event_bus::{AppEvent, EventBus};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Public description of a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetInfo {
    /// Stable identifier, also the vocabulary file stem.
    pub id: String,
    /// Display name shown in the top bar.
    pub name: String,
    /// Language being learned (ISO 639-1, e.g. "es").
    pub learning_language: String,
    /// Language definitions are written in.
    pub translated_language: String,
}

impl SetInfo {
    pub fn new(id: &str, name: &str, learning_language: &str, translated_language: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            learning_language: learning_language.to_string(),
            translated_language: translated_language.to_string(),
        }
    }
}

impl From<&SetConfig> for SetInfo {
    fn from(set: &SetConfig) -> Self {
        Self {
            id: set.id.clone(),
            name: set.name.clone(),
            learning_language: set.learning_language.clone(),
            translated_language: set.translated_language.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct SetStoreState {
    sets: Vec<SetInfo>,
    active: Option<usize>,
}

/// Shared handle over the set list.
#[derive(Debug, Clone, Default)]
pub struct SetStore {
    state: Rc<RefCell<SetStoreState>>,
}

impl SetStore {
    /// Build a store from sets, activating `active_id` if it exists, else the first set.
    pub fn new(sets: Vec<SetInfo>, active_id: Option<&str>) -> Self {
        let active = active_id
            .and_then(|id| sets.iter().position(|s| s.id == id))
            .or(if sets.is_empty() { None } else { Some(0) });
        Self {
            state: Rc::new(RefCell::new(SetStoreState { sets, active })),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let sets = config.sets.iter().map(SetInfo::from).collect();
        Self::new(sets, Some(config.active_set.as_str()))
    }

    pub fn sets(&self) -> Vec<SetInfo> {
        self.state.borrow().sets.clone()
    }

    pub fn current_set(&self) -> Option<SetInfo> {
        let state = self.state.borrow();
        state.active.and_then(|idx| state.sets.get(idx).cloned())
    }

    pub fn current_set_id(&self) -> Option<String> {
        self.current_set().map(|s| s.id)
    }

    /// Make `set_id` the active set and publish `SetChanged`.
    ///
    /// Switching to the already-active set is a no-op and publishes nothing.
    pub fn switch_active_set(&self, set_id: &str, bus: &EventBus) -> Result<SetInfo> {
        let (set, changed) = {
            let mut state = self.state.borrow_mut();
            let idx = state
                .sets
                .iter()
                .position(|s| s.id == set_id)
                .ok_or_else(|| anyhow!("Unknown set: {}", set_id))?;
            let changed = state.active != Some(idx);
            state.active = Some(idx);
            (state.sets[idx].clone(), changed)
        };

        if changed {
            info!("Switched active set to '{}'", set.name);
            bus.publish(&AppEvent::SetChanged(set.clone()));
        }
        Ok(set)
    }
}
