//! Drives a [`StoryController`] on the tokio runtime.
//!
//! A session is a single task that owns the controller and the page. It
//! waits on user actions, finished requests, the poll deadline and the lock
//! countdown, one at a time. Requests run in spawned tasks and only report
//! back through a channel, so the controller is never touched concurrently.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::debug;

use crate::controller::{Completion, Followup, Request, StoryController, UserAction};
use crate::model::{Location, StoryId};
use crate::page::StoryView;

mod backend;
pub use self::backend::StoryBackend;

const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionExit {
    Quit,
    Navigate(Location),
}

pub struct Session<B, V> {
    backend: B,
    controller: StoryController,
    view: V,
}

impl<B, V> Session<B, V>
where
    B: StoryBackend,
    V: StoryView + Send,
{
    pub fn new(backend: B, controller: StoryController, view: V) -> Self {
        Self {
            backend,
            controller,
            view,
        }
    }

    /// Runs until the user quits, the action channel closes, or the page
    /// navigates away. `publish` sees the page after every change.
    pub async fn run<F>(
        mut self,
        mut actions: mpsc::UnboundedReceiver<UserAction>,
        mut publish: F,
    ) -> SessionExit
    where
        F: FnMut(&V) + Send,
    {
        let story_id = self.controller.story_id();
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();

        let mut next_poll: Option<Instant> = Some(Instant::now());
        let mut next_tick: Option<Instant> = None;

        if let Some(req) = self.controller.start(&mut self.view) {
            self.dispatch(story_id, req, &done_tx);
        }
        publish(&self.view);

        loop {
            let poll_at = next_poll.unwrap_or_else(Instant::now);
            let tick_at = next_tick.unwrap_or_else(Instant::now);

            tokio::select! {
                _ = sleep_until(poll_at), if next_poll.is_some() => {
                    next_poll = None;
                    if let Some(req) = self.controller.begin_poll() {
                        self.dispatch(story_id, req, &done_tx);
                    }
                }
                _ = sleep_until(tick_at), if next_tick.is_some() => {
                    next_tick = Some(tick_at + COUNTDOWN_STEP);
                    self.controller.tick(&mut self.view);
                }
                Some(done) = done_rx.recv() => {
                    match self.controller.complete(done, &mut self.view) {
                        Followup::PollAfter(delay) => next_poll = Some(Instant::now() + delay),
                        Followup::Navigate(location) => {
                            publish(&self.view);
                            return SessionExit::Navigate(location);
                        }
                        Followup::None => {}
                    }
                }
                action = actions.recv() => {
                    let action = match action {
                        None | Some(UserAction::Quit) => return SessionExit::Quit,
                        Some(action) => action,
                    };
                    if let Some(req) = self.controller.handle(action, &mut self.view) {
                        self.dispatch(story_id, req, &done_tx);
                    }
                }
            }

            if !self.controller.counting_down() {
                next_tick = None;
            } else if next_tick.is_none() {
                next_tick = Some(Instant::now() + COUNTDOWN_STEP);
            }

            publish(&self.view);
        }
    }

    fn dispatch(
        &self,
        story_id: StoryId,
        request: Request,
        done: &mpsc::UnboundedSender<Completion>,
    ) {
        debug!(?request, "dispatch");
        let backend = self.backend.clone();
        let done = done.clone();
        tokio::spawn(async move {
            let completion = execute(&backend, story_id, request).await;
            // The session may already be gone; nobody is left to tell.
            let _ = done.send(completion);
        });
    }
}

async fn execute<B: StoryBackend>(backend: &B, story_id: StoryId, request: Request) -> Completion {
    match request {
        Request::GetStory => Completion::Story(backend.get_story(story_id).await),
        Request::GetParagraph { number } => {
            Completion::Paragraph(backend.get_paragraph(story_id, number).await)
        }
        Request::LockStory => Completion::Lock(backend.lock_story(story_id).await),
        Request::SuggestParagraph { text, auth } => {
            Completion::Suggested(backend.suggest_paragraph(story_id, text, auth).await)
        }
        Request::AddParagraph {
            paragraph_number,
            text,
        } => Completion::Added(backend.add_paragraph(story_id, paragraph_number, text).await),
        Request::Vote(vote) => Completion::Voted(vote, backend.vote(story_id, vote).await),
        Request::BranchStory => Completion::Branched(backend.branch_story(story_id).await),
    }
}
