//! Screen controllers for the application.
//!
//! Each screen controller owns its state and handles both rendering and
//! events. The navigation host owns the mounted screens and calls their
//! lifecycle hooks.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                      App                               │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               NavigationHost                   │    │
//! │  │  stack: [SpacedRepetition, SetSelectionMenu]   │    │
//! │  │  commands: Dismiss | MergeOptions | ShowOverlay│    │
//! │  └────────────────────────────────────────────────┘    │
//! │                                                        │
//! │  ┌────────────────────────────────────────────────┐    │
//! │  │               Screen Trait                     │    │
//! │  │  - options(theme) -> ScreenOptions             │    │
//! │  │  - render(frame, area, context)                │    │
//! │  │  - handle_event(event, context) -> Action      │    │
//! │  │  - on_mount / on_appear / on_unmount           │    │
//! │  │  - on_theme_changed                            │    │
//! │  └────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────┘
//! ```

pub mod screen_trait;
pub mod set_selection_menu;
pub mod spaced_repetition;

pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use set_selection_menu::SetSelectionMenuScreen;
pub use spaced_repetition::{
    SpacedRepetitionScreenContainer, SpacedRepetitionScreenPassedProps, SCREEN_DARK_STYLES_ONLY,
    SCREEN_FULL_DARK_STYLES, SCREEN_FULL_LIGHT_STYLES, SCREEN_LIGHT_STYLES_ONLY,
};
