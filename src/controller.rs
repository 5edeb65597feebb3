//! One story page's state: the poller, the lock and the paragraph draft.
//!
//! The controller never performs I/O. User actions and request completions
//! go in, [`Request`]s and [`Followup`]s come out, and the page is updated
//! through [`StoryView`].

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::composer::CharLimit;
use crate::labels::seconds_label;
use crate::model::{
    LockGrant, Location, NewParagraph, ParagraphDetail, PollIntervals, StoryId, StorySnapshot,
    StoryState, Vote,
};
use crate::page::StoryView;
use crate::poller::Poller;
use crate::remote::ApiError;
use crate::reservation::{Reservation, Tick};
use crate::section::VisibleSection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionMode {
    /// Take the story lock on first keystroke, submit with
    /// `suggest_paragraph`, then let others vote.
    Reserved,
    /// Submit straight away with `add_paragraph`; only the length cap applies.
    Linear,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserAction {
    /// The full input text after a keystroke.
    Edit(String),
    Submit,
    Vote(Vote),
    Branch,
    Quit,
}

/// Work for the session to carry out against the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    GetStory,
    GetParagraph { number: u32 },
    LockStory,
    SuggestParagraph { text: String, auth: String },
    AddParagraph { paragraph_number: u32, text: String },
    Vote(Vote),
    BranchStory,
}

#[derive(Debug)]
pub enum Completion {
    Story(Result<StorySnapshot, ApiError>),
    Paragraph(Result<ParagraphDetail, ApiError>),
    Lock(Result<LockGrant, ApiError>),
    Suggested(Result<(), ApiError>),
    Added(Result<NewParagraph, ApiError>),
    Voted(Vote, Result<(), ApiError>),
    Branched(Result<StoryId, ApiError>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Followup {
    None,
    PollAfter(Duration),
    Navigate(Location),
}

#[derive(Debug)]
pub struct StoryController {
    location: Location,
    mode: SubmissionMode,
    limit: CharLimit,
    poller: Poller,
    reservation: Reservation,
    draft: String,
    submitting: bool,
    /// Length from the last reconciled poll; `None` until one arrives.
    story_length: Option<u32>,
}

impl StoryController {
    pub fn new(location: Location, mode: SubmissionMode, intervals: PollIntervals) -> Self {
        let limit = match (mode, location.paragraph) {
            (SubmissionMode::Linear, None) => CharLimit::STORY_PAGE,
            _ => CharLimit::PARAGRAPH,
        };
        let poller = match location.paragraph {
            Some(number) => Poller::new(intervals).ending_at(number),
            None => Poller::new(intervals),
        };
        Self {
            location,
            mode,
            limit,
            poller,
            reservation: Reservation::default(),
            draft: String::new(),
            submitting: false,
            story_length: None,
        }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn story_id(&self) -> StoryId {
        self.location.story_id
    }

    pub fn mode(&self) -> SubmissionMode {
        self.mode
    }

    pub fn limit(&self) -> CharLimit {
        self.limit
    }

    pub fn reservation(&self) -> &Reservation {
        &self.reservation
    }

    pub fn section(&self) -> VisibleSection {
        self.poller.section()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn counting_down(&self) -> bool {
        self.reservation.has_auth()
    }

    /// Initial render before the first poll has answered. On a paragraph
    /// page this also asks for the paragraph's branches.
    pub fn start<V: StoryView + ?Sized>(&mut self, view: &mut V) -> Option<Request> {
        view.set_char_counter(&self.limit.count(&self.draft));
        view.set_controls_enabled(true);
        self.location
            .paragraph
            .map(|number| Request::GetParagraph { number })
    }

    pub fn begin_poll(&mut self) -> Option<Request> {
        self.poller.begin().then_some(Request::GetStory)
    }

    pub fn handle<V: StoryView + ?Sized>(
        &mut self,
        action: UserAction,
        view: &mut V,
    ) -> Option<Request> {
        match action {
            UserAction::Edit(text) => self.edit(text, view),
            UserAction::Submit => self.submit(view),
            UserAction::Vote(vote) => self.vote(vote),
            UserAction::Branch => Some(Request::BranchStory),
            UserAction::Quit => None,
        }
    }

    fn edit<V: StoryView + ?Sized>(&mut self, text: String, view: &mut V) -> Option<Request> {
        if self.submitting {
            return None;
        }
        self.draft = text;
        view.set_char_counter(&self.limit.count(&self.draft));

        if self.mode == SubmissionMode::Reserved && self.reservation.begin_lock() {
            debug!(story = %self.story_id(), "requesting lock");
            view.set_lock_requesting();
            return Some(Request::LockStory);
        }
        None
    }

    fn submit<V: StoryView + ?Sized>(&mut self, view: &mut V) -> Option<Request> {
        if self.submitting {
            return None;
        }
        if !self.limit.count(&self.draft).submit_enabled {
            return None;
        }

        let request = match self.mode {
            SubmissionMode::Reserved => {
                let Some(auth) = self.reservation.token() else {
                    view.report_error("You need to hold the lock to submit a paragraph.");
                    return None;
                };
                Request::SuggestParagraph {
                    text: self.draft.clone(),
                    auth: auth.to_string(),
                }
            }
            SubmissionMode::Linear => {
                let Some(length) = self.story_length else {
                    debug!(story = %self.story_id(), "story not loaded; submit ignored");
                    return None;
                };
                Request::AddParagraph {
                    paragraph_number: self.location.paragraph.unwrap_or(length),
                    text: self.draft.clone(),
                }
            }
        };

        self.submitting = true;
        view.set_controls_enabled(false);
        Some(request)
    }

    fn vote(&mut self, vote: Vote) -> Option<Request> {
        if self.poller.section() != VisibleSection::Voting {
            return None;
        }
        Some(Request::Vote(vote))
    }

    /// One second of lock countdown.
    pub fn tick<V: StoryView + ?Sized>(&mut self, view: &mut V) {
        match self.reservation.tick() {
            Tick::Remaining(seconds) => view.set_lock_seconds(&seconds_label(seconds)),
            Tick::Expired => {
                info!(story = %self.story_id(), "lock expired");
                view.mark_lock_expired();
            }
            Tick::Stopped => {}
        }
    }

    pub fn complete<V: StoryView + ?Sized>(
        &mut self,
        completion: Completion,
        view: &mut V,
    ) -> Followup {
        match completion {
            Completion::Story(Ok(snapshot)) => {
                // The section is decided from the lock as it stands right now.
                let delay = self
                    .poller
                    .reconcile(&snapshot, self.reservation.has_auth(), view);
                self.story_length = Some(snapshot.length);
                if snapshot.state == StoryState::Open && self.reservation.reset() {
                    debug!(story = %self.story_id(), "lock released; ready to lock again");
                    view.clear_lock_status();
                }
                Followup::PollAfter(delay)
            }
            Completion::Story(Err(err)) => Followup::PollAfter(self.poller.failed(&err)),

            Completion::Paragraph(Ok(detail)) => {
                debug!(
                    location = %self.location,
                    branches = detail.branches.len(),
                    "paragraph loaded"
                );
                view.set_branches(&detail.branches);
                Followup::None
            }
            Completion::Paragraph(Err(err)) => {
                warn!(location = %self.location, error = %err, "paragraph lookup failed");
                Followup::None
            }

            Completion::Lock(Ok(grant)) => {
                match self.reservation.lock_granted(&grant) {
                    Some(seconds) => {
                        info!(story = %self.story_id(), seconds, "lock held");
                        view.set_lock_seconds(&seconds_label(seconds));
                    }
                    None => debug!(
                        story = %self.story_id(),
                        reservation = self.reservation.label(),
                        "unexpected lock grant ignored"
                    ),
                }
                Followup::None
            }
            Completion::Lock(Err(err)) => {
                self.reservation.lock_failed();
                info!(story = %self.story_id(), error = %err, "lock refused");
                view.show_lock_error(&err.message());
                Followup::None
            }

            Completion::Suggested(Ok(())) => {
                self.submitting = false;
                self.reservation.consume();
                self.draft.clear();
                view.clear_input();
                view.clear_lock_status();
                view.set_char_counter(&self.limit.count(&self.draft));
                view.set_controls_enabled(true);
                view.report_notice("Paragraph submitted for review.");
                Followup::None
            }
            Completion::Suggested(Err(err)) => {
                self.submission_failed(&err, view);
                Followup::None
            }

            Completion::Added(Ok(added)) => {
                let location = added.location();
                info!(%location, branched = added.branched, "paragraph added");
                view.navigate(location);
                Followup::Navigate(location)
            }
            Completion::Added(Err(err)) => {
                self.submission_failed(&err, view);
                Followup::None
            }

            Completion::Voted(vote, Ok(())) => {
                debug!(story = %self.story_id(), ?vote, "vote sent");
                Followup::None
            }
            Completion::Voted(vote, Err(err)) => {
                warn!(story = %self.story_id(), ?vote, error = %err, "vote failed");
                Followup::None
            }

            Completion::Branched(Ok(story_id)) => {
                let location = Location::story(story_id);
                info!(%location, "story branched");
                view.navigate(location);
                Followup::Navigate(location)
            }
            Completion::Branched(Err(err)) => {
                view.report_error(&err.message());
                Followup::None
            }
        }
    }

    fn submission_failed<V: StoryView + ?Sized>(&mut self, err: &ApiError, view: &mut V) {
        self.submitting = false;
        info!(story = %self.story_id(), error = %err, "submission failed");
        view.set_controls_enabled(true);
        view.report_error(&err.message());
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
