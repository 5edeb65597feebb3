//! Character budget for the paragraph input.

use crate::labels::characters_left_label;

/// Remaining counts in `0..=CLOSE_TO_LIMIT` are flagged as close to the limit.
pub const CLOSE_TO_LIMIT: i64 = 25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharLimit {
    pub limit: usize,
    /// Shortest paragraph worth submitting.
    pub min_len: usize,
}

impl CharLimit {
    /// Writing on a story page with no particular paragraph selected.
    pub const STORY_PAGE: CharLimit = CharLimit {
        limit: 250,
        min_len: 10,
    };

    /// Continuing from a specific paragraph; matches the server's own cap.
    pub const PARAGRAPH: CharLimit = CharLimit {
        limit: 140,
        min_len: 5,
    };

    /// Largest remaining count at which submitting is still allowed.
    pub fn max_remaining(self) -> i64 {
        self.limit as i64 - self.min_len as i64
    }

    pub fn count(self, text: &str) -> CharCounter {
        let remaining = self.limit as i64 - text.chars().count() as i64;
        CharCounter {
            remaining,
            close_to_limit: (0..=CLOSE_TO_LIMIT).contains(&remaining),
            past_limit: remaining < 0,
            submit_enabled: remaining >= 0 && remaining <= self.max_remaining(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharCounter {
    pub remaining: i64,
    pub close_to_limit: bool,
    pub past_limit: bool,
    pub submit_enabled: bool,
}

impl CharCounter {
    pub fn label(&self) -> String {
        characters_left_label(self.remaining)
    }
}

#[cfg(test)]
#[path = "tests/composer_tests.rs"]
mod tests;
