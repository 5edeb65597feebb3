use super::*;

use std::io::Write;

fn write_config(body: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(body.as_bytes()).unwrap();
    f
}

#[test]
fn defaults() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(cfg.story, StoryId(1));
    assert!(!cfg.linear);
    assert_eq!(
        cfg.intervals(),
        PollIntervals {
            success: Duration::from_millis(5000),
            retry: Duration::from_millis(2500),
        }
    );
}

#[test]
fn loads_partial_file() {
    let f = write_config(r#"{"base_url": "http://stories.test", "story": 3, "linear": true}"#);
    let cfg = ClientConfig::load(f.path()).unwrap();
    assert_eq!(cfg.base_url, "http://stories.test");
    assert_eq!(cfg.story, StoryId(3));
    assert!(cfg.linear);
    assert_eq!(cfg.poll_interval_ms, 5000);
}

#[test]
fn custom_intervals() {
    let f = write_config(r#"{"poll_interval_ms": 1000, "retry_interval_ms": 200}"#);
    let cfg = ClientConfig::load(f.path()).unwrap();
    assert_eq!(cfg.intervals().success, Duration::from_millis(1000));
    assert_eq!(cfg.intervals().retry, Duration::from_millis(200));
}

#[test]
fn zero_interval_is_rejected() {
    let f = write_config(r#"{"retry_interval_ms": 0}"#);
    let err = ClientConfig::load(f.path()).unwrap_err();
    assert!(err.to_string().contains("greater than zero"));
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    let err = ClientConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.json"));
}
