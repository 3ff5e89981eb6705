//! Stack of mounted screens.
//!
//! Screens never touch the stack directly. Their navigator delegates queue
//! [`NavigationCommand`]s and the host applies them in
//! [`NavigationHost::process_commands`], running lifecycle hooks as screens
//! come and go.

use super::options::{OptionsPatch, ScreenOptions};
use crate::screens::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::keymap::Keymap;
use crate::styles::{ThemeStore, ThemeType};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, error, info, warn};

/// Identity of a mounted screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component{}", self.0)
    }
}

pub enum NavigationCommand {
    Dismiss(ComponentId),
    MergeOptions(ComponentId, OptionsPatch),
    ShowOverlay(Box<dyn Screen>, ScreenOptions),
}

impl fmt::Debug for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationCommand::Dismiss(id) => f.debug_tuple("Dismiss").field(id).finish(),
            NavigationCommand::MergeOptions(id, patch) => {
                f.debug_tuple("MergeOptions").field(id).field(patch).finish()
            }
            NavigationCommand::ShowOverlay(screen, _) => f
                .debug_tuple("ShowOverlay")
                .field(&screen.component_id())
                .finish(),
        }
    }
}

#[derive(Default)]
struct QueueInner {
    next_id: Cell<u64>,
    pending: RefCell<VecDeque<NavigationCommand>>,
}

/// Shared queue navigator delegates write to. Also hands out component ids.
#[derive(Clone, Default)]
pub struct CommandQueue {
    inner: Rc<QueueInner>,
}

impl fmt::Debug for CommandQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandQueue")
            .field("pending", &self.len())
            .finish()
    }
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate_id(&self) -> ComponentId {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        ComponentId(id)
    }

    pub fn push(&self, command: NavigationCommand) {
        debug!("Queued {:?}", command);
        self.inner.pending.borrow_mut().push_back(command);
    }

    pub fn pop(&self) -> Option<NavigationCommand> {
        self.inner.pending.borrow_mut().pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct MountedScreen {
    screen: Box<dyn Screen>,
    options: ScreenOptions,
}

/// Owns mounted screens and drives their lifecycle.
pub struct NavigationHost {
    stack: Vec<MountedScreen>,
    commands: CommandQueue,
    theme_store: ThemeStore,
}

impl NavigationHost {
    pub fn new(theme_store: ThemeStore, commands: CommandQueue) -> Self {
        Self {
            stack: Vec::new(),
            commands,
            theme_store,
        }
    }

    pub fn commands(&self) -> &CommandQueue {
        &self.commands
    }

    /// Push a screen with the options it declares for the current theme.
    pub fn push_screen<S: Screen + 'static>(&mut self, screen: S) {
        let options = S::options(self.theme_store.theme_type());
        self.push(Box::new(screen), options);
    }

    /// Mount `screen` on top of the stack, then let it appear.
    pub fn push(&mut self, mut screen: Box<dyn Screen>, options: ScreenOptions) {
        let id = screen.component_id();
        info!("Mounting {}", id);
        log_hook(id, "on_mount", screen.on_mount());
        log_hook(id, "on_appear", screen.on_appear());
        self.stack.push(MountedScreen { screen, options });
    }

    /// Apply every queued command, including ones queued by the hooks they trigger.
    pub fn process_commands(&mut self) {
        while let Some(command) = self.commands.pop() {
            match command {
                NavigationCommand::Dismiss(id) => self.dismiss(id),
                NavigationCommand::MergeOptions(id, patch) => self.merge_options(id, &patch),
                NavigationCommand::ShowOverlay(screen, options) => self.push(screen, options),
            }
        }
    }

    fn dismiss(&mut self, id: ComponentId) {
        let Some(index) = self.position(id) else {
            warn!("Dismiss requested for {} which is not mounted", id);
            return;
        };
        let was_top = index + 1 == self.stack.len();
        let mut mounted = self.stack.remove(index);
        info!("Unmounting {}", id);
        log_hook(id, "on_unmount", mounted.screen.on_unmount());
        drop(mounted);

        if was_top {
            if let Some(top) = self.stack.last_mut() {
                let top_id = top.screen.component_id();
                log_hook(top_id, "on_appear", top.screen.on_appear());
            }
        }
    }

    fn merge_options(&mut self, id: ComponentId, patch: &OptionsPatch) {
        match self.position(id) {
            Some(index) => self.stack[index].options.merge(patch),
            None => debug!("Ignoring options for unmounted {}", id),
        }
    }

    /// Notify every mounted screen of a theme switch.
    pub fn theme_changed(&mut self, theme: ThemeType) {
        for mounted in &mut self.stack {
            let id = mounted.screen.component_id();
            log_hook(id, "on_theme_changed", mounted.screen.on_theme_changed(theme));
        }
        self.process_commands();
    }

    /// Route an input event to the top screen.
    pub fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let action = match self.stack.last_mut() {
            Some(top) => top.screen.handle_event(event, ctx)?,
            None => ScreenAction::None,
        };
        self.process_commands();
        Ok(action)
    }

    /// Give every screen a chance to apply background results.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for mounted in &mut self.stack {
            changed |= mounted.screen.on_tick();
        }
        self.process_commands();
        changed
    }

    /// Draw the top screen, preceded by whatever it overlays.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, keymap: &Keymap) {
        let theme = self.theme_store.theme();
        let first_visible = self
            .stack
            .iter()
            .rposition(|m| !m.screen.is_overlay())
            .unwrap_or(0);

        for mounted in self.stack.iter_mut().skip(first_visible) {
            let ctx = RenderContext::new(&theme, &mounted.options, keymap);
            if let Err(e) = mounted.screen.render(frame, area, &ctx) {
                error!("Failed to render {}: {:#}", mounted.screen.component_id(), e);
            }
        }
    }

    /// Unmount every screen, top first.
    pub fn unmount_all(&mut self) {
        while let Some(mut mounted) = self.stack.pop() {
            let id = mounted.screen.component_id();
            info!("Unmounting {}", id);
            log_hook(id, "on_unmount", mounted.screen.on_unmount());
        }
        // Commands aimed at screens that are gone
        while self.commands.pop().is_some() {}
    }

    pub fn options_of(&self, id: ComponentId) -> Option<ScreenOptions> {
        self.position(id).map(|index| self.stack[index].options)
    }

    pub fn top_id(&self) -> Option<ComponentId> {
        self.stack.last().map(|m| m.screen.component_id())
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn position(&self, id: ComponentId) -> Option<usize> {
        self.stack.iter().position(|m| m.screen.component_id() == id)
    }
}

impl Drop for NavigationHost {
    fn drop(&mut self) {
        self.unmount_all();
    }
}

fn log_hook(id: ComponentId, hook: &str, result: Result<()>) {
    if let Err(e) = result {
        error!("{} failed in {}: {:#}", id, hook, e);
    }
}
