use crate::model::StoryState;

/// The mutually exclusive regions of the story view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisibleSection {
    SuggestParagraph,
    Locked,
    Voting,
    Pending,
    #[default]
    None,
}

impl VisibleSection {
    pub fn element_id(self) -> Option<&'static str> {
        match self {
            VisibleSection::SuggestParagraph => Some("suggest-paragraph"),
            VisibleSection::Locked => Some("locked"),
            VisibleSection::Voting => Some("voting"),
            VisibleSection::Pending => Some("pending"),
            VisibleSection::None => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            VisibleSection::SuggestParagraph => "Write the next paragraph",
            VisibleSection::Locked => "Someone is writing",
            VisibleSection::Voting => "Vote on the next paragraph",
            VisibleSection::Pending => "Waiting for votes",
            VisibleSection::None => "",
        }
    }
}

/// Picks the section for a story state. `has_auth` is whether this client
/// currently holds the story's lock.
pub fn select_section(state: StoryState, can_vote: bool, has_auth: bool) -> VisibleSection {
    match state {
        StoryState::Open => VisibleSection::SuggestParagraph,
        StoryState::Locked if has_auth => VisibleSection::SuggestParagraph,
        StoryState::Locked => VisibleSection::Locked,
        StoryState::Pending if can_vote => VisibleSection::Voting,
        StoryState::Pending => VisibleSection::Pending,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionSwitch {
    pub hide: VisibleSection,
    pub show: VisibleSection,
}

/// Remembers which section is on screen.
#[derive(Debug, Default)]
pub struct SectionTracker {
    current: VisibleSection,
}

impl SectionTracker {
    pub fn current(&self) -> VisibleSection {
        self.current
    }

    /// Returns the hide/show pair to apply, or `None` if `next` is already
    /// showing.
    pub fn switch_to(&mut self, next: VisibleSection) -> Option<SectionSwitch> {
        if next == self.current {
            return None;
        }
        let switch = SectionSwitch {
            hide: self.current,
            show: next,
        };
        self.current = next;
        Some(switch)
    }
}

#[cfg(test)]
#[path = "tests/section_tests.rs"]
mod tests;
