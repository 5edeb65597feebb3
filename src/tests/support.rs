//! Shared fixtures for unit tests.

use crate::composer::CharCounter;
use crate::model::{Location, Paragraph, StorySnapshot, StoryState};
use crate::page::{PageModel, StoryView};
use crate::section::VisibleSection;

pub(crate) fn paragraphs(n: u32) -> Vec<Paragraph> {
    (1..=n)
        .map(|number| Paragraph {
            number,
            text: format!("paragraph {}", number),
            story_id: None,
            created: None,
            num_branches: 0,
        })
        .collect()
}

pub(crate) fn snapshot(state: StoryState, length: u32) -> StorySnapshot {
    StorySnapshot {
        state,
        length,
        paragraphs: paragraphs(length),
        ..StorySnapshot::default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    Hide(VisibleSection),
    Show(VisibleSection),
    ClearParagraphs,
    Append(u32),
}

/// A page that also remembers the order of section and paragraph updates.
#[derive(Debug, Default)]
pub(crate) struct RecordingView {
    pub(crate) page: PageModel,
    pub(crate) events: Vec<Event>,
}

impl RecordingView {
    pub(crate) fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl StoryView for RecordingView {
    fn hide_section(&mut self, section: VisibleSection) {
        self.events.push(Event::Hide(section));
        self.page.hide_section(section);
    }

    fn show_section(&mut self, section: VisibleSection) {
        self.events.push(Event::Show(section));
        self.page.show_section(section);
    }

    fn set_review_text(&mut self, text: &str) {
        self.page.set_review_text(text);
    }

    fn set_vote_counts(&mut self, yes: &str, no: &str) {
        self.page.set_vote_counts(yes, no);
    }

    fn clear_paragraphs(&mut self) {
        self.events.push(Event::ClearParagraphs);
        self.page.clear_paragraphs();
    }

    fn append_paragraph(&mut self, paragraph: &Paragraph) {
        self.events.push(Event::Append(paragraph.number));
        self.page.append_paragraph(paragraph);
    }

    fn set_branches(&mut self, branches: &[Paragraph]) {
        self.page.set_branches(branches);
    }

    fn set_char_counter(&mut self, counter: &CharCounter) {
        self.page.set_char_counter(counter);
    }

    fn set_lock_requesting(&mut self) {
        self.page.set_lock_requesting();
    }

    fn set_lock_seconds(&mut self, label: &str) {
        self.page.set_lock_seconds(label);
    }

    fn mark_lock_expired(&mut self) {
        self.page.mark_lock_expired();
    }

    fn show_lock_error(&mut self, message: &str) {
        self.page.show_lock_error(message);
    }

    fn clear_lock_status(&mut self) {
        self.page.clear_lock_status();
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.page.set_controls_enabled(enabled);
    }

    fn clear_input(&mut self) {
        self.page.clear_input();
    }

    fn report_error(&mut self, message: &str) {
        self.page.report_error(message);
    }

    fn report_notice(&mut self, message: &str) {
        self.page.report_notice(message);
    }

    fn navigate(&mut self, location: Location) {
        self.page.navigate(location);
    }
}
