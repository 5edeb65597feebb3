use super::*;

const NOW: i64 = 1_700_000_000;

fn now() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(NOW).unwrap()
}

#[test]
fn relative_buckets() {
    let rel = |ago: i64| fmt_created(NOW - ago, TimestampMode::Relative, now());
    assert_eq!(rel(5), "just now");
    assert_eq!(rel(120), "2m ago");
    assert_eq!(rel(3 * 3600), "3h ago");
    assert_eq!(rel(3 * 86400), "3d ago");
}

#[test]
fn old_or_future_timestamps_fall_back_to_absolute() {
    let abs = fmt_created(NOW, TimestampMode::Absolute, now());
    assert_eq!(abs, "2023-11-14 22:13Z");

    assert_eq!(fmt_created(NOW + 60, TimestampMode::Relative, now()), "2023-11-14 22:14Z");
    let old = fmt_created(NOW - 30 * 86400, TimestampMode::Relative, now());
    assert!(old.ends_with('Z'));
}

#[test]
fn toggle_round_trips() {
    assert_eq!(TimestampMode::Relative.toggle(), TimestampMode::Absolute);
    assert_eq!(TimestampMode::Absolute.toggle(), TimestampMode::Relative);
}
