//! The story page as the controller sees it.
//!
//! [`StoryView`] is everything the poller and the reservation flow are
//! allowed to do to the screen. [`PageModel`] is the in-memory page the
//! terminal shell draws from.

use crate::composer::CharCounter;
use crate::model::{Location, Paragraph};
use crate::section::VisibleSection;

pub trait StoryView {
    fn hide_section(&mut self, section: VisibleSection);
    fn show_section(&mut self, section: VisibleSection);

    /// Text of the paragraph under review.
    fn set_review_text(&mut self, text: &str);
    fn set_vote_counts(&mut self, yes: &str, no: &str);

    fn clear_paragraphs(&mut self);
    fn append_paragraph(&mut self, paragraph: &Paragraph);
    /// Paragraphs in other stories that continue from the one on this page.
    fn set_branches(&mut self, branches: &[Paragraph]);

    fn set_char_counter(&mut self, counter: &CharCounter);

    fn set_lock_requesting(&mut self);
    fn set_lock_seconds(&mut self, label: &str);
    fn mark_lock_expired(&mut self);
    fn show_lock_error(&mut self, message: &str);
    fn clear_lock_status(&mut self);

    /// Enables or disables the paragraph input and its submit control.
    fn set_controls_enabled(&mut self, enabled: bool);
    fn clear_input(&mut self);

    fn report_error(&mut self, message: &str);
    fn report_notice(&mut self, message: &str);

    fn navigate(&mut self, location: Location);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LockStatus {
    #[default]
    Hidden,
    Requesting,
    Seconds {
        label: String,
        expired: bool,
    },
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageModel {
    /// Sections currently shown. More than one entry means a show happened
    /// without the matching hide.
    pub visible: Vec<VisibleSection>,
    pub review_text: String,
    pub yes_label: String,
    pub no_label: String,
    pub paragraphs: Vec<Paragraph>,
    pub branches: Vec<Paragraph>,
    pub counter: Option<CharCounter>,
    pub lock: LockStatus,
    pub controls_enabled: bool,
    /// Bumped whenever the input should be emptied.
    pub input_generation: u64,
    pub notice: Option<Notice>,
    pub navigated_to: Option<Location>,
}

impl Default for PageModel {
    fn default() -> Self {
        Self {
            visible: Vec::new(),
            review_text: String::new(),
            yes_label: String::new(),
            no_label: String::new(),
            paragraphs: Vec::new(),
            branches: Vec::new(),
            counter: None,
            lock: LockStatus::Hidden,
            controls_enabled: true,
            input_generation: 0,
            notice: None,
            navigated_to: None,
        }
    }
}

impl PageModel {
    pub fn visible_section(&self) -> VisibleSection {
        self.visible.first().copied().unwrap_or_default()
    }

    pub fn lock_seconds(&self) -> Option<&str> {
        match &self.lock {
            LockStatus::Seconds { label, .. } => Some(label),
            _ => None,
        }
    }

    pub fn lock_expired(&self) -> bool {
        matches!(self.lock, LockStatus::Seconds { expired: true, .. })
    }
}

impl StoryView for PageModel {
    fn hide_section(&mut self, section: VisibleSection) {
        self.visible.retain(|s| *s != section);
    }

    fn show_section(&mut self, section: VisibleSection) {
        if section != VisibleSection::None && !self.visible.contains(&section) {
            self.visible.push(section);
        }
    }

    fn set_review_text(&mut self, text: &str) {
        self.review_text = text.to_string();
    }

    fn set_vote_counts(&mut self, yes: &str, no: &str) {
        self.yes_label = yes.to_string();
        self.no_label = no.to_string();
    }

    fn clear_paragraphs(&mut self) {
        self.paragraphs.clear();
    }

    fn append_paragraph(&mut self, paragraph: &Paragraph) {
        self.paragraphs.push(paragraph.clone());
    }

    fn set_branches(&mut self, branches: &[Paragraph]) {
        self.branches = branches.to_vec();
    }

    fn set_char_counter(&mut self, counter: &CharCounter) {
        self.counter = Some(*counter);
    }

    fn set_lock_requesting(&mut self) {
        self.lock = LockStatus::Requesting;
    }

    fn set_lock_seconds(&mut self, label: &str) {
        self.lock = LockStatus::Seconds {
            label: label.to_string(),
            expired: false,
        };
    }

    fn mark_lock_expired(&mut self) {
        match &mut self.lock {
            LockStatus::Seconds { expired, .. } => *expired = true,
            other => {
                *other = LockStatus::Seconds {
                    label: String::new(),
                    expired: true,
                }
            }
        }
    }

    fn show_lock_error(&mut self, message: &str) {
        self.lock = LockStatus::Error(message.to_string());
    }

    fn clear_lock_status(&mut self) {
        self.lock = LockStatus::Hidden;
    }

    fn set_controls_enabled(&mut self, enabled: bool) {
        self.controls_enabled = enabled;
    }

    fn clear_input(&mut self) {
        self.input_generation += 1;
    }

    fn report_error(&mut self, message: &str) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text: message.to_string(),
        });
    }

    fn report_notice(&mut self, message: &str) {
        self.notice = Some(Notice {
            kind: NoticeKind::Info,
            text: message.to_string(),
        });
    }

    fn navigate(&mut self, location: Location) {
        self.navigated_to = Some(location);
    }
}
