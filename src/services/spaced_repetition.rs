//! Due and new counting.
//!
//! An item at level `n >= 1` is due once `initial_interval_hours * 2^(n-1)`
//! hours have passed since it was last learned. Level 0 items are new.

use crate::config::SpacedRepetitionSettings;
use crate::services::vocabulary_repository::{Vocabulary, VocabularyStatus};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueAndNewCounts {
    pub due: usize,
    pub new: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DueAndNewCounter {
    settings: SpacedRepetitionSettings,
}

impl DueAndNewCounter {
    pub fn new(settings: SpacedRepetitionSettings) -> Self {
        Self { settings }
    }

    /// Count due and new items among active vocabulary.
    ///
    /// `categories` filters by category name when it is `Some` and non-empty.
    pub fn count(
        &self,
        vocabulary: &[Vocabulary],
        categories: Option<&[String]>,
        now: DateTime<Utc>,
    ) -> DueAndNewCounts {
        let filter = categories.filter(|c| !c.is_empty());
        vocabulary
            .iter()
            .filter(|v| v.status == VocabularyStatus::Active)
            .filter(|v| filter.is_none_or(|names| names.iter().any(|n| n == v.category_name())))
            .fold(DueAndNewCounts::default(), |mut counts, v| {
                if v.level == 0 {
                    counts.new += 1;
                } else if self.is_due(v, now) {
                    counts.due += 1;
                }
                counts
            })
    }

    /// Whether a studied item is due at `now`.
    pub fn is_due(&self, vocabulary: &Vocabulary, now: DateTime<Utc>) -> bool {
        if vocabulary.level == 0 {
            return false;
        }
        match (vocabulary.last_learned_at, self.interval(vocabulary.level)) {
            (None, _) => true,
            // Intervals reaching past the representable date range are never due
            (Some(last), Some(interval)) => last
                .checked_add_signed(interval)
                .is_some_and(|due_at| due_at <= now),
            (Some(_), None) => false,
        }
    }

    /// Review interval for `level`, clamped to the configured maximum level.
    pub fn interval(&self, level: u8) -> Option<Duration> {
        let level = level.clamp(1, self.settings.max_level.max(1));
        let multiplier = 1i64.checked_shl(u32::from(level) - 1)?;
        let hours = i64::from(self.settings.initial_interval_hours).checked_mul(multiplier)?;
        Duration::try_hours(hours)
    }
}
