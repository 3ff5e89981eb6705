//! Screen trait and associated types.
//!
//! Screens own their state, render themselves and turn input into actions.
//! The navigation host drives their lifecycle hooks:
//!
//! 1. `on_mount` once, right after the screen is pushed
//! 2. `on_appear` every time the screen becomes the top of the stack
//! 3. `on_theme_changed` whenever the theme switches while mounted
//! 4. `on_unmount` once, when the screen leaves the stack

use crate::config::Config;
use crate::keymap::Keymap;
use crate::navigation::{ComponentId, ScreenOptions};
use crate::styles::{Theme, ThemeType};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Current palette.
    pub theme: &'a Theme,
    /// The screen's live options, including merged theme patches.
    pub options: &'a ScreenOptions,
    /// Key bindings, for footer hints.
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, options: &'a ScreenOptions, keymap: &'a Keymap) -> Self {
        Self {
            theme,
            options,
            keymap,
        }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Key bindings resolving key events to actions.
    pub keymap: &'a Keymap,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            keymap: &config.keymap,
        }
    }
}

/// Actions that a screen can return after handling an event.
///
/// Navigation goes through the command queue; this only carries what the app
/// loop itself must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Event consumed or ignored.
    #[default]
    None,
    /// Request to quit the application.
    Quit,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// struct MyScreen {
///     id: ComponentId,
/// }
///
/// impl Screen for MyScreen {
///     fn options(theme: ThemeType) -> ScreenOptions {
///         MY_OPTIONS
///     }
///
///     fn component_id(&self) -> ComponentId {
///         self.id
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::None)
///     }
/// }
/// ```
pub trait Screen {
    /// Options the host starts the screen with.
    fn options(theme: ThemeType) -> ScreenOptions
    where
        Self: Sized;

    /// Identity used by navigation commands.
    fn component_id(&self) -> ComponentId;

    /// Render the screen.
    ///
    /// # Arguments
    ///
    /// * `frame` - The frame to render to.
    /// * `area` - The area to render within.
    /// * `ctx` - Render context with shared resources.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Overlays are drawn on top of the screen below them.
    fn is_overlay(&self) -> bool {
        false
    }

    /// Called once after the screen is pushed.
    fn on_mount(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called every time the screen becomes visible.
    fn on_appear(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once when the screen leaves the stack.
    fn on_unmount(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called when the theme switches.
    fn on_theme_changed(&mut self, _theme: ThemeType) -> Result<()> {
        Ok(())
    }

    /// Called on every loop iteration. Returns true when something changed.
    fn on_tick(&mut self) -> bool {
        false
    }
}
