use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoryId(pub i64);

impl fmt::Display for StoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StoryId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let id = s
            .trim()
            .parse::<i64>()
            .with_context(|| format!("invalid story id {:?}", s))?;
        Ok(StoryId(id))
    }
}

/// A page in the story: `/{story_id}` or `/{story_id}/{paragraph_number}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub story_id: StoryId,
    pub paragraph: Option<u32>,
}

impl Location {
    pub fn story(story_id: StoryId) -> Self {
        Self {
            story_id,
            paragraph: None,
        }
    }

    pub fn paragraph(story_id: StoryId, number: u32) -> Self {
        Self {
            story_id,
            paragraph: Some(number),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.paragraph {
            Some(n) => write!(f, "/{}/{}", self.story_id, n),
            None => write!(f, "/{}", self.story_id),
        }
    }
}

impl FromStr for Location {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let trimmed = s.trim().trim_matches('/');
        let mut parts = trimmed.split('/');
        let story_id = parts
            .next()
            .filter(|p| !p.is_empty())
            .with_context(|| format!("invalid location {:?}", s))?
            .parse::<StoryId>()?;
        let paragraph = match parts.next() {
            Some(p) => Some(
                p.parse::<u32>()
                    .with_context(|| format!("invalid paragraph number in {:?}", s))?,
            ),
            None => None,
        };
        if parts.next().is_some() {
            anyhow::bail!("invalid location {:?} (expected /STORY or /STORY/PARAGRAPH)", s);
        }
        Ok(Location {
            story_id,
            paragraph,
        })
    }
}

#[cfg(test)]
#[path = "../tests/model/ids_tests.rs"]
mod tests;
