//! Due/new count refreshes for the spaced-repetition screen.
//!
//! Counting runs on the tokio runtime; results come back over an mpsc channel
//! and are applied on the UI thread by [`SpacedRepetitionScreenDelegate::poll_updates`].
//! Every refresh and every clear bumps a generation number, so a result whose
//! generation is no longer current is dropped.

use crate::config::SpacedRepetitionSettings;
use crate::observable::Observable;
use crate::services::{DueAndNewCounter, DueAndNewCounts, SetStore, VocabularyRepository};
use crate::state::{CountsState, ObservableSpacedRepetitionScreen};
use anyhow::anyhow;
use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

type CountsResult = (u64, Result<DueAndNewCounts, String>);

pub trait SpacedRepetitionScreenDelegate {
    /// Start recounting due and new items for the active set.
    fn refresh_due_and_new_counts(&self);
    /// Reset the counts and discard any refresh still in flight.
    fn clear_due_and_new_counts(&self);
    /// Apply finished refreshes. Returns true if the state changed.
    fn poll_updates(&self) -> bool;
    fn counts(&self) -> CountsState;
}

pub struct DefaultSpacedRepetitionScreenDelegate {
    counts: Observable<CountsState>,
    selected_categories: Observable<Option<Vec<String>>>,
    set_store: SetStore,
    repository: Arc<dyn VocabularyRepository>,
    counter: DueAndNewCounter,
    runtime: Handle,
    generation: Cell<u64>,
    tx: UnboundedSender<CountsResult>,
    rx: RefCell<UnboundedReceiver<CountsResult>>,
}

impl DefaultSpacedRepetitionScreenDelegate {
    pub fn new(
        observable_screen: &ObservableSpacedRepetitionScreen,
        set_store: SetStore,
        repository: Arc<dyn VocabularyRepository>,
        settings: SpacedRepetitionSettings,
        runtime: Handle,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            counts: observable_screen.counts.clone(),
            selected_categories: observable_screen.selected_categories.clone(),
            set_store,
            repository,
            counter: DueAndNewCounter::new(settings),
            runtime,
            generation: Cell::new(0),
            tx,
            rx: RefCell::new(rx),
        }
    }

    fn next_generation(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }
}

impl SpacedRepetitionScreenDelegate for DefaultSpacedRepetitionScreenDelegate {
    fn refresh_due_and_new_counts(&self) {
        let generation = self.next_generation();
        let Some(set_id) = self.set_store.current_set_id() else {
            warn!("No active set to count");
            self.counts
                .set(CountsState::Failed("No active set".to_string()));
            return;
        };
        self.counts.set(CountsState::Loading);

        let categories = self.selected_categories.get().clone();
        let repository = Arc::clone(&self.repository);
        let counter = self.counter;
        let tx = self.tx.clone();
        debug!("Refreshing counts for '{}' (generation {})", set_id, generation);

        self.runtime.spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                let vocabulary = repository.load_vocabulary(&set_id)?;
                Ok::<_, anyhow::Error>(counter.count(&vocabulary, categories.as_deref(), Utc::now()))
            })
            .await
            .map_err(|e| anyhow!("Count task failed: {}", e))
            .and_then(|inner| inner)
            .map_err(|e| format!("{:#}", e));

            // The receiver is gone once the screen is dropped
            let _ = tx.send((generation, result));
        });
    }

    fn clear_due_and_new_counts(&self) {
        self.next_generation();
        self.counts.set(CountsState::NotLoaded);
    }

    fn poll_updates(&self) -> bool {
        let mut changed = false;
        let mut rx = self.rx.borrow_mut();
        while let Ok((generation, result)) = rx.try_recv() {
            if generation != self.generation.get() {
                debug!(
                    "Dropping stale counts (generation {}, current {})",
                    generation,
                    self.generation.get()
                );
                continue;
            }
            let state = match result {
                Ok(counts) => {
                    info!("Counts ready: {} due, {} new", counts.due, counts.new);
                    CountsState::Ready(counts)
                }
                Err(message) => {
                    warn!("Failed to count vocabulary: {}", message);
                    CountsState::Failed(message)
                }
            };
            self.counts.set(state);
            changed = true;
        }
        changed
    }

    fn counts(&self) -> CountsState {
        self.counts.get().clone()
    }
}
