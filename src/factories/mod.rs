//! Per-screen delegate factories.

pub mod spaced_repetition;

pub use spaced_repetition::{DefaultSpacedRepetitionScreenFactory, SpacedRepetitionScreenFactory};
