//! Screen view state.
//!
//! Each screen owns its state exclusively. Delegates receive clones of the
//! observable cells they mutate, and the rendering subscriber registered by
//! the screen requests a redraw after every mutation.

pub mod spaced_repetition;

pub use spaced_repetition::{CountsState, ObservableSpacedRepetitionScreen, ScreenName};
