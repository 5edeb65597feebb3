//! Reconciles polled story snapshots against what is on screen.

use std::time::Duration;

use tracing::{info, warn};

use crate::labels::vote_label;
use crate::model::{PollIntervals, StorySnapshot};
use crate::page::StoryView;
use crate::remote::ApiError;
use crate::section::{SectionTracker, VisibleSection, select_section};

#[derive(Debug)]
pub struct Poller {
    sections: SectionTracker,
    rendered_length: u32,
    /// On a paragraph page, the last paragraph shown.
    last_paragraph: Option<u32>,
    intervals: PollIntervals,
    in_flight: bool,
}

impl Poller {
    pub fn new(intervals: PollIntervals) -> Self {
        Self {
            sections: SectionTracker::default(),
            rendered_length: 0,
            last_paragraph: None,
            intervals,
            in_flight: false,
        }
    }

    /// Shows the story only up to paragraph `number`.
    pub fn ending_at(mut self, number: u32) -> Self {
        self.last_paragraph = Some(number);
        self
    }

    fn shown_length(&self, length: u32) -> u32 {
        match self.last_paragraph {
            Some(last) => length.min(last),
            None => length,
        }
    }

    /// Marks a poll as started. False if one is already outstanding.
    pub fn begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn section(&self) -> VisibleSection {
        self.sections.current()
    }

    pub fn rendered_length(&self) -> u32 {
        self.rendered_length
    }

    /// Applies a successful poll and returns the delay before the next one.
    pub fn reconcile<V: StoryView + ?Sized>(
        &mut self,
        snapshot: &StorySnapshot,
        has_auth: bool,
        view: &mut V,
    ) -> Duration {
        self.in_flight = false;

        let next = select_section(snapshot.state, snapshot.can_vote, has_auth);
        match next {
            VisibleSection::Voting => view.set_review_text(snapshot.review_text()),
            VisibleSection::Pending => {
                view.set_vote_counts(
                    &vote_label(snapshot.yes_votes, "yes"),
                    &vote_label(snapshot.no_votes, "no"),
                );
                view.set_review_text(snapshot.review_text());
            }
            _ => {}
        }

        if let Some(switch) = self.sections.switch_to(next) {
            info!(
                from = ?switch.hide,
                to = ?switch.show,
                state = snapshot.state.as_str(),
                "section changed"
            );
            if switch.hide != VisibleSection::None {
                view.hide_section(switch.hide);
            }
            view.show_section(switch.show);
        }

        // Paragraphs are append-only, so growth is the only change to look for.
        let shown = self.shown_length(snapshot.length);
        if shown > self.rendered_length {
            view.clear_paragraphs();
            let last = self.last_paragraph;
            for paragraph in snapshot
                .paragraphs
                .iter()
                .filter(|p| last.is_none_or(|n| p.number <= n))
            {
                view.append_paragraph(paragraph);
            }
            self.rendered_length = shown;
        }

        self.intervals.success
    }

    /// Records a failed poll. Nothing on screen changes.
    pub fn failed(&mut self, err: &ApiError) -> Duration {
        self.in_flight = false;
        warn!(error = %err, retry_ms = self.intervals.retry.as_millis() as u64, "poll failed");
        self.intervals.retry
    }
}

#[cfg(test)]
#[path = "tests/poller_tests.rs"]
mod tests;
