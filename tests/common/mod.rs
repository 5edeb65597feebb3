#![allow(dead_code)]

use std::collections::HashMap;
use std::future::{Future, ready};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::{Value, json};
use tokio::task::JoinHandle;

use storyteller::model::{
    LockGrant, NewParagraph, ParagraphDetail, StoryId, StorySnapshot, Vote,
};
use storyteller::remote::ApiError;
use storyteller::session::StoryBackend;

/// One request the stub server saw: the method and its raw query arguments.
#[derive(Clone, Debug)]
pub struct Call {
    pub method: String,
    pub args: HashMap<String, String>,
}

#[derive(Default)]
struct StubState {
    replies: HashMap<String, (StatusCode, String)>,
    calls: Vec<Call>,
}

/// An HTTP server answering `/api/{method}` with canned bodies.
pub struct StubServer {
    pub base_url: String,
    state: Arc<Mutex<StubState>>,
    task: JoinHandle<()>,
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl StubServer {
    pub async fn start() -> Result<Self> {
        let state = Arc::new(Mutex::new(StubState::default()));
        let app = Router::new()
            .route("/api/:method", get(handle))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind stub server")?;
        let addr = listener.local_addr().context("stub server addr")?;
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self {
            base_url: format!("http://{}", addr),
            state,
            task,
        })
    }

    /// Replies to `method` with `{"status": "success", "response": response}`.
    pub fn succeed(&self, method: &str, response: Value) {
        let body = json!({"status": "success", "response": response}).to_string();
        self.reply(method, StatusCode::OK, body);
    }

    /// Replies to `method` with an error envelope under the given HTTP status.
    pub fn fail(&self, method: &str, status: StatusCode, message: &str) {
        let body = json!({"status": "error", "response": message}).to_string();
        self.reply(method, status, body);
    }

    pub fn reply(&self, method: &str, status: StatusCode, body: impl Into<String>) {
        self.state
            .lock()
            .unwrap()
            .replies
            .insert(method.to_string(), (status, body.into()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn last_call(&self, method: &str) -> Option<Call> {
        self.calls().into_iter().rev().find(|c| c.method == method)
    }
}

async fn handle(
    State(state): State<Arc<Mutex<StubState>>>,
    Path(method): Path<String>,
    Query(args): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let mut state = state.lock().unwrap();
    state.calls.push(Call {
        method: method.clone(),
        args,
    });
    state.replies.get(&method).cloned().unwrap_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            json!({"status": "error", "response": "no such method"}).to_string(),
        )
    })
}

pub struct FakeStory {
    pub snapshot: StorySnapshot,
    /// Number of upcoming `get_story` calls that fail.
    pub failing_polls: usize,
    /// `None` answers `get_paragraph` with an error.
    pub paragraph: Option<ParagraphDetail>,
    /// `None` refuses the lock.
    pub lock: Option<LockGrant>,
    pub add_result: Result<NewParagraph, String>,
    pub branch_to: StoryId,
    pub calls: Vec<String>,
    pub suggested: Vec<(String, String)>,
    pub added: Vec<(u32, String)>,
}

impl Default for FakeStory {
    fn default() -> Self {
        Self {
            snapshot: StorySnapshot::default(),
            failing_polls: 0,
            paragraph: None,
            lock: None,
            add_result: Err("not expected".to_string()),
            branch_to: StoryId(99),
            calls: Vec::new(),
            suggested: Vec::new(),
            added: Vec::new(),
        }
    }
}

/// In-memory backend for session tests. Answers immediately, so it works
/// under paused time.
#[derive(Clone, Default)]
pub struct FakeBackend {
    pub story: Arc<Mutex<FakeStory>>,
}

impl FakeBackend {
    pub fn with_story(snapshot: StorySnapshot) -> Self {
        let backend = Self::default();
        backend.story.lock().unwrap().snapshot = snapshot;
        backend
    }

    pub fn update(&self, f: impl FnOnce(&mut FakeStory)) {
        f(&mut self.story.lock().unwrap());
    }

    pub fn count(&self, method: &str) -> usize {
        let story = self.story.lock().unwrap();
        story.calls.iter().filter(|m| *m == method).count()
    }

    fn record(&self, method: &str) -> std::sync::MutexGuard<'_, FakeStory> {
        let mut story = self.story.lock().unwrap();
        story.calls.push(method.to_string());
        story
    }
}

impl StoryBackend for FakeBackend {
    fn get_story(
        &self,
        _id: StoryId,
    ) -> impl Future<Output = Result<StorySnapshot, ApiError>> + Send {
        let mut story = self.record("get_story");
        let out = if story.failing_polls > 0 {
            story.failing_polls -= 1;
            Err(ApiError::application("server unavailable"))
        } else {
            Ok(story.snapshot.clone())
        };
        ready(out)
    }

    fn get_paragraph(
        &self,
        _story_id: StoryId,
        _number: u32,
    ) -> impl Future<Output = Result<ParagraphDetail, ApiError>> + Send {
        let story = self.record("get_paragraph");
        ready(
            story
                .paragraph
                .clone()
                .ok_or_else(|| ApiError::application("no such paragraph")),
        )
    }

    fn lock_story(&self, _id: StoryId) -> impl Future<Output = Result<LockGrant, ApiError>> + Send {
        let story = self.record("lock_story");
        ready(
            story
                .lock
                .clone()
                .ok_or_else(|| ApiError::application("Story is locked")),
        )
    }

    fn suggest_paragraph(
        &self,
        _story_id: StoryId,
        text: String,
        auth: String,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        let mut story = self.record("suggest_paragraph");
        story.suggested.push((text, auth));
        ready(Ok(()))
    }

    fn vote(
        &self,
        _story_id: StoryId,
        vote: Vote,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        drop(self.record(vote.method()));
        ready(Ok(()))
    }

    fn branch_story(&self, _id: StoryId) -> impl Future<Output = Result<StoryId, ApiError>> + Send {
        let story = self.record("branch_story");
        ready(Ok(story.branch_to))
    }

    fn add_paragraph(
        &self,
        _story_id: StoryId,
        paragraph_number: u32,
        text: String,
    ) -> impl Future<Output = Result<NewParagraph, ApiError>> + Send {
        let mut story = self.record("add_paragraph");
        story.added.push((paragraph_number, text));
        ready(story.add_result.clone().map_err(ApiError::application))
    }
}
