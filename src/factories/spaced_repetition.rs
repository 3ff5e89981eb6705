use crate::container::{ContainerProps, RootStore};
use crate::delegates::{
    DefaultSetSelectionMenuDelegate, DefaultSpacedRepetitionScreenDelegate, NavigatorDelegate,
    ScreenNavigator, SetSelectionMenuDelegate, SpacedRepetitionScreenDelegate,
};
use crate::navigation::ComponentId;
use crate::state::ObservableSpacedRepetitionScreen;

/// Builds the delegates of one spaced-repetition screen.
pub trait SpacedRepetitionScreenFactory {
    fn create_set_selection_menu_delegate(&self) -> Box<dyn SetSelectionMenuDelegate>;

    fn create_navigator_delegate(&self) -> Box<dyn NavigatorDelegate>;

    fn create_screen_delegate(
        &self,
        observable_screen: &ObservableSpacedRepetitionScreen,
    ) -> Box<dyn SpacedRepetitionScreenDelegate>;
}

/// Factory scoped to a screen's component id and the shared root store.
#[derive(Debug, Clone)]
pub struct DefaultSpacedRepetitionScreenFactory {
    component_id: ComponentId,
    root_store: RootStore,
}

impl DefaultSpacedRepetitionScreenFactory {
    pub fn new<P>(props: &ContainerProps<P>) -> Self {
        Self {
            component_id: props.component_id,
            root_store: props.root_store.clone(),
        }
    }

    fn navigator(&self) -> ScreenNavigator {
        ScreenNavigator::new(self.component_id, self.root_store.commands.clone())
    }
}

impl SpacedRepetitionScreenFactory for DefaultSpacedRepetitionScreenFactory {
    fn create_set_selection_menu_delegate(&self) -> Box<dyn SetSelectionMenuDelegate> {
        Box::new(DefaultSetSelectionMenuDelegate::new(
            self.root_store.clone(),
            self.navigator(),
        ))
    }

    fn create_navigator_delegate(&self) -> Box<dyn NavigatorDelegate> {
        Box::new(self.navigator())
    }

    fn create_screen_delegate(
        &self,
        observable_screen: &ObservableSpacedRepetitionScreen,
    ) -> Box<dyn SpacedRepetitionScreenDelegate> {
        Box::new(DefaultSpacedRepetitionScreenDelegate::new(
            observable_screen,
            self.root_store.set_store.clone(),
            self.root_store.repository.clone(),
            self.root_store.settings,
            self.root_store.runtime.clone(),
        ))
    }
}
