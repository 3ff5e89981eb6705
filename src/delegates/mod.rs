//! Narrow capability objects screens delegate their behaviour to.
//!
//! Each delegate is a trait so screen containers can be tested against
//! recording doubles; the `Default*` types are what the app wires up.

pub mod navigator;
pub mod set_selection_menu;
pub mod spaced_repetition_screen;

pub use navigator::{NavigatorDelegate, ScreenNavigator};
pub use set_selection_menu::{DefaultSetSelectionMenuDelegate, SetSelectionMenuDelegate};
pub use spaced_repetition_screen::{
    DefaultSpacedRepetitionScreenDelegate, SpacedRepetitionScreenDelegate,
};
