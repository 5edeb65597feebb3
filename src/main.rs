use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use storyteller::model::{ClientConfig, Location, StoryId, Vote};

mod cli_exec;

#[derive(Parser)]
#[command(name = "storyteller")]
#[command(about = "Collaborative story-writing client", long_about = None)]
struct Cli {
    /// Base URL of the story server (overrides the config file)
    #[arg(long, global = true)]
    url: Option<String>,

    /// JSON client config
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append logs to this file (the TUI logs nowhere otherwise)
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a story in the interactive view
    Watch {
        /// Story page, e.g. /12 or /12/3 (defaults to the configured story)
        location: Option<Location>,
        /// Submit paragraphs directly instead of locking and voting
        #[arg(long)]
        linear: bool,
    },

    /// Show a story's current state
    Show {
        story: StoryId,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a paragraph and the branches that continue from it
    Paragraph {
        story: StoryId,
        number: u32,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Take the lock for writing a story's next paragraph
    Lock {
        story: StoryId,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest the next paragraph using a held lock
    Suggest {
        story: StoryId,
        /// Lock token from `storyteller lock`
        #[arg(long)]
        auth: String,
        text: String,
    },

    /// Vote on a story's pending paragraph
    Vote {
        story: StoryId,
        #[arg(value_enum)]
        vote: VoteArg,
    },

    /// Start a new story branching off an existing one
    Branch { story: StoryId },

    /// Add a paragraph after the given paragraph (may branch the story)
    Add {
        story: StoryId,
        /// Paragraph number to continue from
        after: u32,
        text: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VoteArg {
    Yes,
    No,
}

impl From<VoteArg> for Vote {
    fn from(v: VoteArg) -> Self {
        match v {
            VoteArg::Yes => Vote::Yes,
            VoteArg::No => Vote::No,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => ClientConfig::load(path)?,
        None => ClientConfig::default(),
    };
    if let Some(url) = cli.url {
        config.base_url = url;
    }

    let interactive = matches!(cli.command, None | Some(Commands::Watch { .. }));
    match (&cli.log_file, interactive) {
        (Some(path), _) => storyteller::logging::init_file(path)?,
        (None, false) => storyteller::logging::init_stderr()?,
        (None, true) => {}
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start tokio runtime")?;

    match cli.command {
        None => {
            let location = Location::story(config.story);
            run_tui(&runtime, config, location, false)
        }
        Some(Commands::Watch { location, linear }) => {
            let location = location.unwrap_or(Location::story(config.story));
            run_tui(&runtime, config, location, linear)
        }
        Some(command) => runtime.block_on(cli_exec::handle_command(command, &config)),
    }
}

fn run_tui(
    runtime: &tokio::runtime::Runtime,
    config: ClientConfig,
    location: Location,
    linear: bool,
) -> Result<()> {
    storyteller::tui::run_with_options(
        runtime,
        storyteller::tui::TuiRunOptions {
            config,
            location,
            linear,
        },
    )
}
