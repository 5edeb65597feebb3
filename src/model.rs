//! Story data exchanged with the server, plus client configuration.

mod config;
mod ids;
mod story;

pub use self::config::{ClientConfig, PollIntervals};
pub use self::ids::{Location, StoryId};
pub use self::story::{
    BranchPoint, LockGrant, NewParagraph, Paragraph, ParagraphDetail, StorySnapshot, StoryState,
    Vote,
};
