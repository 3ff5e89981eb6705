//! lingodeck - a terminal vocabulary trainer
//!
//! This library provides the spaced-repetition review screen, the stores and
//! delegates behind it, and the navigation host that drives screen lifecycles.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod container;
pub mod delegates;
pub mod event_bus;
pub mod factories;
pub mod icons;
pub mod keymap;
pub mod navigation;
pub mod observable;
pub mod screens;
pub mod services;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use container::{ContainerProps, RootStore};
pub use navigation::NavigationHost;
pub use observable::{Observable, RedrawHandle, Subscription};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
