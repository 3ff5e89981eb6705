//! Shared application stores and the props bundle every screen container receives.

use crate::config::{Config, SpacedRepetitionSettings};
use crate::event_bus::EventBus;
use crate::icons::Icons;
use crate::navigation::{CommandQueue, ComponentId};
use crate::services::{SetStore, VocabularyRepository};
use crate::styles::ThemeStore;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Everything screens share: stores, the event bus, the navigation command
/// queue and the runtime background work is spawned on.
#[derive(Clone)]
pub struct RootStore {
    pub theme_store: ThemeStore,
    pub set_store: SetStore,
    pub event_bus: EventBus,
    pub commands: CommandQueue,
    pub repository: Arc<dyn VocabularyRepository>,
    pub settings: SpacedRepetitionSettings,
    pub runtime: Handle,
    pub icons: Icons,
}

impl RootStore {
    pub fn from_config(
        config: &Config,
        repository: Arc<dyn VocabularyRepository>,
        runtime: Handle,
        icons: Icons,
    ) -> Self {
        Self {
            theme_store: ThemeStore::new(config.theme),
            set_store: SetStore::from_config(config),
            event_bus: EventBus::new(),
            commands: CommandQueue::new(),
            repository,
            settings: config.spaced_repetition,
            runtime,
            icons,
        }
    }

    /// Props for a new screen, with a freshly allocated component id.
    pub fn props<P>(&self, passed_props: P) -> ContainerProps<P> {
        ContainerProps {
            component_id: self.commands.allocate_id(),
            root_store: self.clone(),
            passed_props,
        }
    }
}

impl std::fmt::Debug for RootStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootStore")
            .field("theme", &self.theme_store.theme_type())
            .field("active_set", &self.set_store.current_set_id())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Per-screen bundle a container is constructed from.
pub struct ContainerProps<P> {
    pub component_id: ComponentId,
    pub root_store: RootStore,
    pub passed_props: P,
}
