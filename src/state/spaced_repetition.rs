//! View state of the spaced-repetition screen.

use crate::navigation::{ComponentId, TouchableTopBar};
use crate::observable::{Observable, Subscription};
use crate::services::DueAndNewCounts;
use std::rc::Rc;

/// Which screen a piece of state belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenName {
    SpacedRepetition,
    SetSelectionMenu,
}

/// Progress of the due/new count for the active set
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CountsState {
    #[default]
    NotLoaded,
    Loading,
    Ready(DueAndNewCounts),
    Failed(String),
}

impl CountsState {
    pub fn counts(&self) -> Option<DueAndNewCounts> {
        match self {
            CountsState::Ready(counts) => Some(*counts),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CountsState::Loading)
    }
}

/// Observable state of one spaced-repetition screen instance.
///
/// Clones share the same cells; the container owns the original and hands
/// clones to its delegates.
#[derive(Debug, Clone)]
pub struct ObservableSpacedRepetitionScreen {
    pub component_id: ComponentId,
    pub screen_name: ScreenName,
    pub selected_categories: Observable<Option<Vec<String>>>,
    pub counts: Observable<CountsState>,
    pub top_bar: Observable<TouchableTopBar>,
}

impl ObservableSpacedRepetitionScreen {
    pub fn new(
        component_id: ComponentId,
        selected_categories: Option<Vec<String>>,
        top_bar: TouchableTopBar,
    ) -> Self {
        Self {
            component_id,
            screen_name: ScreenName::SpacedRepetition,
            selected_categories: Observable::new(selected_categories),
            counts: Observable::new(CountsState::NotLoaded),
            top_bar: Observable::new(top_bar),
        }
    }

    /// Call `listener` after any field changes.
    pub fn subscribe(&self, listener: impl Fn() + 'static) -> Vec<Subscription> {
        let listener = Rc::new(listener);
        let on_categories = Rc::clone(&listener);
        let on_counts = Rc::clone(&listener);
        vec![
            self.selected_categories.subscribe(move |_| on_categories()),
            self.counts.subscribe(move |_| on_counts()),
            self.top_bar.subscribe(move |_| listener()),
        ]
    }
}
