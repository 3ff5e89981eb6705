//! Spaced-repetition screen container.
//!
//! Binds the spaced-repetition view to its observable state and to the host's
//! lifecycle. All behaviour lives in the delegates produced by a
//! [`SpacedRepetitionScreenFactory`]; the container only wires them up.

use crate::components::SpacedRepetitionView;
use crate::container::ContainerProps;
use crate::delegates::{NavigatorDelegate, SetSelectionMenuDelegate, SpacedRepetitionScreenDelegate};
use crate::factories::{DefaultSpacedRepetitionScreenFactory, SpacedRepetitionScreenFactory};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::navigation::{
    ComponentId, OptionsPatch, ScreenOptions, ThemedIcon, TopBarAction, TopBarButton,
    TopBarOptions, TouchableTopBar, BACK_BTN, SHOW_SET_SELECTION_MENU_BTN,
};
use crate::observable::{RedrawHandle, Subscription};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::state::ObservableSpacedRepetitionScreen;
use crate::styles::{ThemeType, MILK};
use crate::utils::rect_contains;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::prelude::*;
use tracing::debug;

const DARK_TOP_BAR: Color = Color::Rgb(28, 32, 40);
const LIGHT_BACKGROUND: Color = Color::Rgb(250, 248, 242);

pub const SCREEN_LIGHT_STYLES_ONLY: OptionsPatch = OptionsPatch {
    top_bar_background: Some(MILK),
    top_bar_title_color: Some(Color::Black),
    top_bar_button_color: Some(Color::Black),
    background: Some(LIGHT_BACKGROUND),
    ..OptionsPatch::EMPTY
};

pub const SCREEN_DARK_STYLES_ONLY: OptionsPatch = OptionsPatch {
    top_bar_background: Some(DARK_TOP_BAR),
    top_bar_title_color: Some(MILK),
    top_bar_button_color: Some(MILK),
    background: Some(Color::Reset),
    ..OptionsPatch::EMPTY
};

pub const SCREEN_FULL_LIGHT_STYLES: ScreenOptions = ScreenOptions {
    top_bar: TopBarOptions {
        visible: true,
        background: MILK,
        title_color: Color::Black,
        button_color: Color::Black,
    },
    background: LIGHT_BACKGROUND,
    dismissable: true,
};

pub const SCREEN_FULL_DARK_STYLES: ScreenOptions = ScreenOptions {
    top_bar: TopBarOptions {
        visible: true,
        background: DARK_TOP_BAR,
        title_color: MILK,
        button_color: MILK,
    },
    background: Color::Reset,
    dismissable: true,
};

/// Properties the caller opens the screen with.
#[derive(Default)]
pub struct SpacedRepetitionScreenPassedProps {
    /// Restrict counts to these categories. `None` or empty counts everything.
    pub selected_category_names: Option<Vec<String>>,
    /// Invoked once, with no arguments, when the screen unmounts
    pub on_close: Option<Box<dyn FnOnce()>>,
}

impl std::fmt::Debug for SpacedRepetitionScreenPassedProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpacedRepetitionScreenPassedProps")
            .field("selected_category_names", &self.selected_category_names)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

pub struct SpacedRepetitionScreenContainer {
    props: ContainerProps<SpacedRepetitionScreenPassedProps>,
    set_selection_menu_delegate: Box<dyn SetSelectionMenuDelegate>,
    navigator_delegate: Box<dyn NavigatorDelegate>,
    screen_delegate: Box<dyn SpacedRepetitionScreenDelegate>,
    observable_screen: ObservableSpacedRepetitionScreen,
    view: SpacedRepetitionView,
    _render_subscriptions: Vec<Subscription>,
    mounted: bool,
    unmounted: bool,
}

impl SpacedRepetitionScreenContainer {
    /// Build the container with the default factory for `props`.
    pub fn new(
        props: ContainerProps<SpacedRepetitionScreenPassedProps>,
        redraw: &RedrawHandle,
    ) -> Self {
        let factory = DefaultSpacedRepetitionScreenFactory::new(&props);
        Self::with_factory(props, &factory, redraw)
    }

    pub fn with_factory(
        props: ContainerProps<SpacedRepetitionScreenPassedProps>,
        factory: &dyn SpacedRepetitionScreenFactory,
        redraw: &RedrawHandle,
    ) -> Self {
        let set_selection_menu_delegate = factory.create_set_selection_menu_delegate();
        let observable_screen = ObservableSpacedRepetitionScreen::new(
            props.component_id,
            props.passed_props.selected_category_names.clone(),
            create_top_bar(set_selection_menu_delegate.as_ref(), props.root_store.icons),
        );
        let navigator_delegate = factory.create_navigator_delegate();
        let screen_delegate = factory.create_screen_delegate(&observable_screen);

        let redraw = redraw.clone();
        let render_subscriptions = observable_screen.subscribe(move || redraw.request());

        Self {
            props,
            set_selection_menu_delegate,
            navigator_delegate,
            screen_delegate,
            observable_screen,
            view: SpacedRepetitionView::new(),
            _render_subscriptions: render_subscriptions,
            mounted: false,
            unmounted: false,
        }
    }

    pub fn observable_screen(&self) -> &ObservableSpacedRepetitionScreen {
        &self.observable_screen
    }

    fn press(&self, action: TopBarAction) {
        debug!(
            "{:?} {} top bar action {:?}",
            self.observable_screen.screen_name, self.props.component_id, action
        );
        match action {
            TopBarAction::DismissScreen => self.navigator_delegate.dismiss_screen(),
            TopBarAction::ShowSetSelectionMenu => self
                .set_selection_menu_delegate
                .show_active_sets_for_set_selection(),
        }
    }

    fn handle_click(&self, column: u16, row: u16) {
        let Some(hits) = self.view.hit_areas() else {
            return;
        };
        let action = {
            let bar = self.observable_screen.top_bar.get();
            if rect_contains(hits.left_button, column, row) {
                Some(bar.left_button.on_press)
            } else if rect_contains(hits.title, column, row) {
                Some(bar.on_press)
            } else {
                hits.right_button
                    .filter(|rect| rect_contains(*rect, column, row))
                    .and(bar.right_button.as_ref().map(|b| b.on_press))
            }
        };
        if let Some(action) = action {
            self.press(action);
        }
    }

    fn unmount(&mut self) {
        if self.unmounted {
            return;
        }
        self.unmounted = true;
        self.screen_delegate.clear_due_and_new_counts();
        if let Some(on_close) = self.props.passed_props.on_close.take() {
            on_close();
        }
    }
}

fn create_top_bar(set_selection: &dyn SetSelectionMenuDelegate, icons: Icons) -> TouchableTopBar {
    TouchableTopBar {
        test_id: SHOW_SET_SELECTION_MENU_BTN.to_string(),
        title: set_selection.current_set_name(),
        icon: set_selection.current_flag_icon(),
        on_press: TopBarAction::ShowSetSelectionMenu,
        left_button: TopBarButton {
            test_id: BACK_BTN.to_string(),
            text: None,
            icon: ThemedIcon::new(icons.arrow_left_black(), icons.arrow_left_milk()),
            on_press: TopBarAction::DismissScreen,
        },
        right_button: None,
    }
}

impl Screen for SpacedRepetitionScreenContainer {
    fn options(theme: ThemeType) -> ScreenOptions {
        match theme {
            ThemeType::Light => SCREEN_FULL_LIGHT_STYLES,
            _ => SCREEN_FULL_DARK_STYLES,
        }
    }

    fn component_id(&self) -> ComponentId {
        self.props.component_id
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        self.view.render(
            frame,
            area,
            &self.props.root_store.theme_store,
            &self.observable_screen,
            self.screen_delegate.as_ref(),
            self.props.root_store.icons,
            ctx,
        )
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match ctx.keymap.get_action(key.code, key.modifiers) {
                    Some(Action::Cancel) => {
                        let action = self.observable_screen.top_bar.get().left_button.on_press;
                        self.press(action);
                    }
                    Some(Action::SelectSet) => {
                        let action = self.observable_screen.top_bar.get().on_press;
                        self.press(action);
                    }
                    Some(Action::Refresh) => self.screen_delegate.refresh_due_and_new_counts(),
                    Some(Action::Quit) => return Ok(ScreenAction::Quit),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                    self.handle_click(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
        Ok(ScreenAction::None)
    }

    fn on_mount(&mut self) -> Result<()> {
        if self.mounted {
            return Ok(());
        }
        self.mounted = true;
        self.set_selection_menu_delegate
            .auto_update_subtitle_on_set_change(self.observable_screen.top_bar.clone());
        Ok(())
    }

    fn on_appear(&mut self) -> Result<()> {
        self.screen_delegate.refresh_due_and_new_counts();
        Ok(())
    }

    fn on_unmount(&mut self) -> Result<()> {
        self.unmount();
        Ok(())
    }

    fn on_theme_changed(&mut self, theme: ThemeType) -> Result<()> {
        let patch = match theme {
            ThemeType::Light => SCREEN_LIGHT_STYLES_ONLY,
            _ => SCREEN_DARK_STYLES_ONLY,
        };
        self.navigator_delegate.merge_options(patch);
        Ok(())
    }

    fn on_tick(&mut self) -> bool {
        self.screen_delegate.poll_updates()
    }
}

impl Drop for SpacedRepetitionScreenContainer {
    fn drop(&mut self) {
        self.unmount();
    }
}
