use super::*;

#[test]
fn snapshot_tolerates_missing_fields() {
    let snap: StorySnapshot = serde_json::from_str(r#"{"state":"pending","paragraph":null}"#).unwrap();
    assert_eq!(snap.state, StoryState::Pending);
    assert_eq!(snap.review_text(), "");
    assert!(!snap.can_vote);
    assert!(snap.paragraphs.is_empty());
    assert_eq!(snap.length, 0);
}

#[test]
fn snapshot_reads_full_story() {
    let raw = r#"{
        "id": 4,
        "state": "open",
        "can_vote": false,
        "paragraph": "draft",
        "yes_votes": 2,
        "no_votes": 1,
        "length": 2,
        "paragraphs": [
            {"number": 1, "text": "It began.", "created": 1700000000, "num_branches": 2},
            {"number": 2, "text": "It went on.", "story_id": 4}
        ],
        "branches": [{"story_id": 1, "paragraph_number": 3}]
    }"#;
    let snap: StorySnapshot = serde_json::from_str(raw).unwrap();
    assert_eq!(snap.id, Some(StoryId(4)));
    assert_eq!(snap.paragraphs[0].num_branches, 2);
    assert_eq!(snap.paragraphs[1].story_id, Some(StoryId(4)));
    assert_eq!(snap.paragraphs[1].created, None);
    assert_eq!(snap.branches[0].paragraph_number, 3);
    assert_eq!(snap.review_text(), "draft");
}

#[test]
fn unknown_state_is_rejected() {
    assert!(serde_json::from_str::<StorySnapshot>(r#"{"state":"frozen"}"#).is_err());
}

#[test]
fn lock_seconds_round_to_nearest() {
    let grant = |time| LockGrant {
        auth: "t".to_string(),
        time,
    };
    assert_eq!(grant(60.7).seconds(), 61);
    assert_eq!(grant(60.2).seconds(), 60);
    assert_eq!(grant(0.0).seconds(), 0);
    assert_eq!(grant(-3.0).seconds(), 0);
    assert_eq!(grant(f64::NAN).seconds(), 0);
}

#[test]
fn new_paragraph_location() {
    let added: NewParagraph =
        serde_json::from_str(r#"{"story_id": 8, "paragraph_number": 3}"#).unwrap();
    assert!(!added.branched);
    assert_eq!(added.location().to_string(), "/8/3");
}

#[test]
fn vote_methods() {
    assert_eq!(Vote::Yes.method(), "vote_yes");
    assert_eq!(Vote::No.method(), "vote_no");
}
