use super::*;

use reqwest::StatusCode;

use crate::model::LockGrant;

#[test]
fn success_envelope_yields_response() {
    let grant: LockGrant = decode_envelope(
        "lock_story",
        StatusCode::OK,
        r#"{"status":"success","response":{"auth":"abc","time":60.7}}"#,
    )
    .unwrap();
    assert_eq!(grant.auth, "abc");
    assert_eq!(grant.seconds(), 61);
}

#[test]
fn unit_response_accepts_null() {
    let () = decode_envelope("vote_yes", StatusCode::OK, r#"{"status":"success","response":null}"#)
        .unwrap();
}

#[test]
fn error_envelope_with_ok_status_is_application_error() {
    let err = decode_envelope::<LockGrant>(
        "lock_story",
        StatusCode::OK,
        r#"{"status":"error","response":"Story is locked"}"#,
    )
    .unwrap_err();
    assert!(err.is_application());
    assert_eq!(err.message(), "Story is locked");
}

#[test]
fn error_envelope_with_error_status_reads_the_same() {
    let err = decode_envelope::<()>(
        "add_paragraph",
        StatusCode::BAD_REQUEST,
        r#"{"status":"error","response":"too short","type":"ValueError"}"#,
    )
    .unwrap_err();
    match err {
        ApiError::Application { message, kind, .. } => {
            assert_eq!(message, "too short");
            assert_eq!(kind.as_deref(), Some("ValueError"));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn plain_text_error_is_http_error() {
    let err =
        decode_envelope::<()>("get_story", StatusCode::INTERNAL_SERVER_ERROR, "boom\n").unwrap_err();
    match &err {
        ApiError::Http { status, body } => {
            assert_eq!(*status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "boom");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(!err.is_application());
}

#[test]
fn garbage_success_body_is_decode_error() {
    let err = decode_envelope::<()>("get_story", StatusCode::OK, "<html>").unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));

    let err = decode_envelope::<LockGrant>(
        "lock_story",
        StatusCode::OK,
        r#"{"status":"success","response":{"auth":1}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::Decode { ref method, .. } if method == "lock_story"));
}
