use super::navigator::{NavigatorDelegate, ScreenNavigator};
use crate::container::RootStore;
use crate::event_bus::AppEvent;
use crate::icons::Image;
use crate::navigation::TouchableTopBar;
use crate::observable::{Observable, Subscription};
use crate::screens::{Screen, SetSelectionMenuScreen};
use tracing::debug;

/// Active-set presentation and the set selection menu.
pub trait SetSelectionMenuDelegate {
    fn current_set_name(&self) -> String;
    fn current_flag_icon(&self) -> Option<Image>;
    /// Open the menu listing the configured sets.
    fn show_active_sets_for_set_selection(&self);
    /// Keep the top bar's title and icon in sync with the active set.
    fn auto_update_subtitle_on_set_change(&mut self, top_bar: Observable<TouchableTopBar>);
}

pub struct DefaultSetSelectionMenuDelegate {
    root_store: RootStore,
    navigator: ScreenNavigator,
    subscription: Option<Subscription>,
}

impl DefaultSetSelectionMenuDelegate {
    pub fn new(root_store: RootStore, navigator: ScreenNavigator) -> Self {
        Self {
            root_store,
            navigator,
            subscription: None,
        }
    }
}

impl SetSelectionMenuDelegate for DefaultSetSelectionMenuDelegate {
    fn current_set_name(&self) -> String {
        self.root_store
            .set_store
            .current_set()
            .map(|set| set.name)
            .unwrap_or_else(|| "No set".to_string())
    }

    fn current_flag_icon(&self) -> Option<Image> {
        self.root_store
            .set_store
            .current_set()
            .map(|set| self.root_store.icons.flag(&set.learning_language))
    }

    fn show_active_sets_for_set_selection(&self) {
        let theme = self.root_store.theme_store.theme_type();
        let menu = SetSelectionMenuScreen::new(self.root_store.props(()));
        debug!("Opening set selection menu {}", menu.component_id());
        self.navigator
            .show_overlay(Box::new(menu), SetSelectionMenuScreen::options(theme));
    }

    fn auto_update_subtitle_on_set_change(&mut self, top_bar: Observable<TouchableTopBar>) {
        let icons = self.root_store.icons;
        self.subscription = Some(self.root_store.event_bus.subscribe(move |event| {
            let AppEvent::SetChanged(set) = event;
            top_bar.update(|bar| {
                bar.title = set.name.clone();
                bar.icon = Some(icons.flag(&set.learning_language));
            });
        }));
    }
}
