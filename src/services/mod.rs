//! Application services layer.
//!
//! Services hold the domain logic the screens' delegates call into, kept
//! apart from rendering.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   UI Layer                      │
//! │  (App, Screens, Delegates)                      │
//! └─────────────────────┬───────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────────┐
//! │               Services Layer                     │
//! │  ┌──────────┐ ┌──────────────────┐ ┌───────────┐ │
//! │  │ SetStore │ │ DueAndNewCounter │ │ Vocabulary│ │
//! │  │          │ │                  │ │ Repository│ │
//! │  └──────────┘ └──────────────────┘ └───────────┘ │
//! └─────────────────────┬────────────────────────────┘
//!                       │
//!                       ▼
//! ┌──────────────────────────────────────────────────┐
//! │             Infrastructure Layer                 │
//! │  (Config, EventBus, JSON data files)             │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod set_store;
pub mod spaced_repetition;
pub mod vocabulary_repository;

// Re-export common types
pub use set_store::{SetInfo, SetStore};
pub use spaced_repetition::{DueAndNewCounter, DueAndNewCounts};
pub use vocabulary_repository::{
    InMemoryVocabularyRepository, JsonVocabularyRepository, Vocabulary, VocabularyRepository,
    VocabularyStatus, UNCATEGORIZED,
};
