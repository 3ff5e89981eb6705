//! Popup listing the configured sets.
//!
//! Confirming switches the active set, which publishes `SetChanged`, and
//! dismisses the popup so the screen underneath appears again.

use crate::container::{ContainerProps, RootStore};
use crate::delegates::{NavigatorDelegate, ScreenNavigator};
use crate::keymap::Action;
use crate::navigation::{ComponentId, ScreenOptions, TopBarOptions};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::services::SetInfo;
use crate::state::ScreenName;
use crate::styles::{ThemeType, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{center_popup, rect_contains, ListStateExt};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState};
use tracing::{debug, error, info};

const MENU_OPTIONS: ScreenOptions = ScreenOptions {
    top_bar: TopBarOptions {
        visible: false,
        background: Color::Reset,
        title_color: Color::Reset,
        button_color: Color::Reset,
    },
    background: Color::Reset,
    dismissable: true,
};

pub struct SetSelectionMenuScreen {
    component_id: ComponentId,
    root_store: RootStore,
    navigator: ScreenNavigator,
    sets: Vec<SetInfo>,
    list_state: ListState,
    /// Popup and list rows from the last render
    popup_area: Rect,
    list_area: Rect,
}

impl SetSelectionMenuScreen {
    pub fn new(props: ContainerProps<()>) -> Self {
        let navigator = ScreenNavigator::new(props.component_id, props.root_store.commands.clone());
        Self {
            component_id: props.component_id,
            root_store: props.root_store,
            navigator,
            sets: Vec::new(),
            list_state: ListState::default(),
            popup_area: Rect::default(),
            list_area: Rect::default(),
        }
    }

    pub fn screen_name(&self) -> ScreenName {
        ScreenName::SetSelectionMenu
    }

    pub fn selected_set(&self) -> Option<&SetInfo> {
        self.list_state.selected().and_then(|i| self.sets.get(i))
    }

    fn confirm_selection(&mut self) {
        if let Some(set) = self.selected_set() {
            let set_id = set.id.clone();
            match self
                .root_store
                .set_store
                .switch_active_set(&set_id, &self.root_store.event_bus)
            {
                Ok(set) => info!("Active set is now '{}'", set.name),
                Err(e) => error!("Failed to switch set: {:#}", e),
            }
        }
        self.navigator.dismiss_screen();
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        if !rect_contains(self.popup_area, column, row) {
            self.navigator.dismiss_screen();
            return;
        }
        if rect_contains(self.list_area, column, row) {
            let index = (row - self.list_area.y) as usize + self.list_state.offset();
            if index < self.sets.len() {
                self.list_state.select(Some(index));
                self.confirm_selection();
            }
        }
    }
}

impl Screen for SetSelectionMenuScreen {
    fn options(_theme: ThemeType) -> ScreenOptions {
        MENU_OPTIONS
    }

    fn component_id(&self) -> ComponentId {
        self.component_id
    }

    fn is_overlay(&self) -> bool {
        true
    }

    fn on_mount(&mut self) -> Result<()> {
        self.sets = self.root_store.set_store.sets();
        let current = self.root_store.set_store.current_set_id();
        let index = self
            .sets
            .iter()
            .position(|s| Some(&s.id) == current.as_ref());
        self.list_state.select(index.or(if self.sets.is_empty() { None } else { Some(0) }));
        debug!(
            "{:?} {} listing {} sets",
            self.screen_name(),
            self.component_id,
            self.sets.len()
        );
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = ctx.theme;
        let icons = self.root_store.icons;
        let current = self.root_store.set_store.current_set_id();

        let height = (self.sets.len() as u16 + 2).max(3);
        let popup = center_popup(area, 50, 60);
        let popup = Rect {
            height: popup.height.min(height),
            ..popup
        };
        self.popup_area = popup;
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(t.primary))
            .title(" Select set ")
            .title_style(t.title_style())
            .style(t.background_style());
        self.list_area = block.inner(popup);

        let items: Vec<ListItem> = self
            .sets
            .iter()
            .map(|set| {
                let flag = icons.flag(&set.learning_language);
                let marker = if Some(&set.id) == current.as_ref() {
                    format!(" {}", icons.active_set())
                } else {
                    String::new()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", flag.glyph),
                        Style::default().fg(flag.color.unwrap_or(t.text)),
                    ),
                    Span::styled(set.name.clone(), t.text_style()),
                    Span::styled(marker, Style::default().fg(t.new)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(t.highlight_style())
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, popup, &mut self.list_state);
        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let total = self.sets.len();
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match ctx.keymap.get_action(key.code, key.modifiers) {
                    Some(Action::MoveUp) => self.list_state.select_previous_wrap(total),
                    Some(Action::MoveDown) => self.list_state.select_next_wrap(total),
                    Some(Action::GoToTop) => self.list_state.select_first_item(total),
                    Some(Action::GoToEnd) => self.list_state.select_last_item(total),
                    Some(Action::Confirm) => self.confirm_selection(),
                    Some(Action::Cancel | Action::SelectSet) => self.navigator.dismiss_screen(),
                    Some(Action::Quit) => return Ok(ScreenAction::Quit),
                    _ => {}
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
                MouseEventKind::ScrollUp => self.list_state.select_previous_wrap(total),
                MouseEventKind::ScrollDown => self.list_state.select_next_wrap(total),
                _ => {}
            },
            _ => {}
        }
        Ok(ScreenAction::None)
    }
}
