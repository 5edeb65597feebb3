use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::controller::{StoryController, SubmissionMode, UserAction};
use crate::model::{ClientConfig, Location, Vote};
use crate::page::PageModel;
use crate::remote::ApiClient;
use crate::section::VisibleSection;
use crate::session::{Session, SessionExit};
use crate::tui::TuiRunOptions;

use super::input::Input;
use super::time_utils::TimestampMode;

pub(super) struct App {
    config: ClientConfig,
    client: ApiClient,
    mode: SubmissionMode,

    pub(super) location: Location,
    pub(super) input: Input,
    pub(super) ts_mode: TimestampMode,
    pub(super) page: PageModel,
    pub(super) quit: bool,

    input_generation: u64,
    actions: mpsc::UnboundedSender<UserAction>,
    page_rx: watch::Receiver<PageModel>,
    session: JoinHandle<SessionExit>,
}

impl App {
    pub(super) fn start(runtime: &Runtime, opts: TuiRunOptions) -> Result<Self> {
        let client = ApiClient::new(opts.config.base_url.clone())?;
        let mode = if opts.linear || opts.config.linear {
            SubmissionMode::Linear
        } else {
            SubmissionMode::Reserved
        };
        let (actions, page_rx, session) =
            spawn_session(runtime, &client, &opts.config, opts.location, mode);
        Ok(Self {
            config: opts.config,
            client,
            mode,
            location: opts.location,
            input: Input::default(),
            ts_mode: TimestampMode::Relative,
            page: PageModel::default(),
            quit: false,
            input_generation: 0,
            actions,
            page_rx,
            session,
        })
    }

    pub(super) fn mode(&self) -> SubmissionMode {
        self.mode
    }

    /// Drops the current page and opens `location` in a fresh session.
    fn open(&mut self, runtime: &Runtime, location: Location) {
        let (actions, page_rx, session) =
            spawn_session(runtime, &self.client, &self.config, location, self.mode);
        self.location = location;
        self.actions = actions;
        self.page_rx = page_rx;
        self.session = session;
        self.page = PageModel::default();
        self.input.clear();
        self.input_generation = 0;
    }

    /// Pulls the latest page published by the session.
    fn sync(&mut self) {
        if !self.page_rx.has_changed().unwrap_or(false) {
            return;
        }
        self.page = self.page_rx.borrow_and_update().clone();
        if self.page.input_generation != self.input_generation {
            self.input_generation = self.page.input_generation;
            self.input.clear();
        }
    }

    fn send(&self, action: UserAction) {
        // A closed channel means the session already ended; the loop notices.
        let _ = self.actions.send(action);
    }

    fn send_edit(&self) {
        self.send(UserAction::Edit(self.input.buf.clone()));
    }

    pub(super) fn editing(&self) -> bool {
        self.page.visible_section() == VisibleSection::SuggestParagraph
            && self.page.controls_enabled
    }
}

fn spawn_session(
    runtime: &Runtime,
    client: &ApiClient,
    config: &ClientConfig,
    location: Location,
    mode: SubmissionMode,
) -> (
    mpsc::UnboundedSender<UserAction>,
    watch::Receiver<PageModel>,
    JoinHandle<SessionExit>,
) {
    let (actions_tx, actions_rx) = mpsc::unbounded_channel();
    let (page_tx, page_rx) = watch::channel(PageModel::default());
    let controller = StoryController::new(location, mode, config.intervals());
    let session = Session::new(client.clone(), controller, PageModel::default());
    let handle = runtime.spawn(session.run(actions_rx, move |page: &PageModel| {
        page_tx.send_replace(page.clone());
    }));
    (actions_tx, page_rx, handle)
}

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &Runtime,
    app: &mut App,
) -> Result<()> {
    loop {
        app.sync();

        if app.session.is_finished() {
            let exit = runtime
                .block_on(&mut app.session)
                .context("story session panicked")?;
            match exit {
                SessionExit::Navigate(location) => app.open(runtime, location),
                SessionExit::Quit => return Ok(()),
            }
        }

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;

        if app.quit {
            app.send(UserAction::Quit);
            runtime
                .block_on(&mut app.session)
                .context("story session panicked")?;
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if ctrl => app.quit = true,
        KeyCode::Char('b') if ctrl => app.send(UserAction::Branch),
        KeyCode::Char('t') if ctrl => app.ts_mode = app.ts_mode.toggle(),

        _ if app.editing() => handle_edit_key(app, key),

        KeyCode::Char('q') => app.quit = true,
        KeyCode::Char('y') if app.page.visible_section() == VisibleSection::Voting => {
            app.send(UserAction::Vote(Vote::Yes))
        }
        KeyCode::Char('n') if app.page.visible_section() == VisibleSection::Voting => {
            app.send(UserAction::Vote(Vote::No))
        }
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.send(UserAction::Submit),
        KeyCode::Char(c) => {
            app.input.insert_char(c);
            app.send_edit();
        }
        KeyCode::Backspace => {
            if app.input.backspace() {
                app.send_edit();
            }
        }
        KeyCode::Delete => {
            if app.input.delete() {
                app.send_edit();
            }
        }
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Home => app.input.home(),
        KeyCode::End => app.input.end(),
        _ => {}
    }
}
