use time::OffsetDateTime;
use time::macros::format_description;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TimestampMode {
    Relative,
    Absolute,
}

impl TimestampMode {
    pub(super) fn toggle(self) -> Self {
        match self {
            TimestampMode::Relative => TimestampMode::Absolute,
            TimestampMode::Absolute => TimestampMode::Relative,
        }
    }
}

fn fmt_abs(unix: i64) -> Option<String> {
    let dt = OffsetDateTime::from_unix_timestamp(unix).ok()?;
    dt.format(format_description!(
        "[year]-[month repr:numerical padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]Z"
    ))
    .ok()
}

fn fmt_since(unix: i64, now: OffsetDateTime) -> Option<String> {
    let secs = now.unix_timestamp() - unix;

    // Clock skew; fall back to the absolute form.
    if secs < 0 {
        return None;
    }

    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;

    let s = if secs < 60 {
        "just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 48 {
        format!("{}h ago", hours)
    } else if days < 14 {
        format!("{}d ago", days)
    } else {
        return None;
    };
    Some(s)
}

/// Paragraph timestamps arrive as unix seconds.
pub(super) fn fmt_created(unix: i64, mode: TimestampMode, now: OffsetDateTime) -> String {
    let abs = || fmt_abs(unix).unwrap_or_else(|| unix.to_string());
    match mode {
        TimestampMode::Relative => fmt_since(unix, now).unwrap_or_else(abs),
        TimestampMode::Absolute => abs(),
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/time_utils_tests.rs"]
mod tests;
