use serde::{Deserialize, Serialize};

use super::ids::{Location, StoryId};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryState {
    /// Anyone may take the lock and write the next paragraph.
    #[default]
    Open,
    /// Someone holds the lock.
    Locked,
    /// A suggested paragraph is up for review.
    Pending,
}

impl StoryState {
    pub fn as_str(self) -> &'static str {
        match self {
            StoryState::Open => "open",
            StoryState::Locked => "locked",
            StoryState::Pending => "pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub number: u32,
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_id: Option<StoryId>,

    /// Unix seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,

    #[serde(default)]
    pub num_branches: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchPoint {
    pub story_id: StoryId,
    pub paragraph_number: u32,
}

/// Full story state as returned by `get_story`. Each poll replaces the
/// previous snapshot; nothing is merged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<StoryId>,

    #[serde(default)]
    pub state: StoryState,

    #[serde(default)]
    pub can_vote: bool,

    /// Text of the paragraph under review, if any.
    #[serde(default)]
    pub paragraph: Option<String>,

    #[serde(default)]
    pub yes_votes: u32,

    #[serde(default)]
    pub no_votes: u32,

    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,

    #[serde(default)]
    pub length: u32,

    #[serde(default)]
    pub branches: Vec<BranchPoint>,
}

impl StorySnapshot {
    pub fn review_text(&self) -> &str {
        self.paragraph.as_deref().unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LockGrant {
    pub auth: String,
    /// Seconds until the server releases the lock.
    pub time: f64,
}

impl LockGrant {
    /// Whole seconds left on the lock, rounded to nearest.
    pub fn seconds(&self) -> i64 {
        if !self.time.is_finite() || self.time <= 0.0 {
            return 0;
        }
        self.time.round() as i64
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewParagraph {
    pub story_id: StoryId,
    pub paragraph_number: u32,

    /// True when the paragraph started a new branch instead of continuing
    /// the requested story.
    #[serde(default)]
    pub branched: bool,
}

impl NewParagraph {
    pub fn location(&self) -> Location {
        Location::paragraph(self.story_id, self.paragraph_number)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphDetail {
    pub story_id: StoryId,
    pub number: u32,
    pub text: String,

    #[serde(default)]
    pub created: Option<i64>,

    /// Paragraphs in other stories that continue from this one.
    #[serde(default)]
    pub branches: Vec<Paragraph>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vote {
    Yes,
    No,
}

impl Vote {
    pub fn method(self) -> &'static str {
        match self {
            Vote::Yes => "vote_yes",
            Vote::No => "vote_no",
        }
    }
}

#[cfg(test)]
#[path = "../tests/model/story_tests.rs"]
mod tests;
