//! Counted labels shown in the story view.

/// `1 second`, `0 seconds`, `-3 seconds`: only exactly one is singular.
pub fn pluralize(count: i64, noun: &str) -> String {
    pluralize_as(count, noun, &format!("{}s", noun))
}

/// [`pluralize`] for nouns whose plural is not a bare `s`.
pub fn pluralize_as(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

pub fn branches_label(count: u32) -> String {
    pluralize_as(i64::from(count), "branch", "branches")
}

pub fn vote_label(count: u32, kind: &str) -> String {
    pluralize(i64::from(count), &format!("{} vote", kind))
}

pub fn seconds_label(seconds: i64) -> String {
    pluralize(seconds, "second")
}

pub fn characters_left_label(remaining: i64) -> String {
    format!("{} left", pluralize(remaining, "character"))
}

#[cfg(test)]
#[path = "tests/labels_tests.rs"]
mod tests;
