use super::*;

#[test]
fn parses_story_and_paragraph_locations() {
    let story: Location = "/12".parse().unwrap();
    assert_eq!(story, Location::story(StoryId(12)));
    assert_eq!(story.to_string(), "/12");

    let para: Location = "12/3/".parse().unwrap();
    assert_eq!(para, Location::paragraph(StoryId(12), 3));
    assert_eq!(para.to_string(), "/12/3");
}

#[test]
fn rejects_malformed_locations() {
    assert!("".parse::<Location>().is_err());
    assert!("/".parse::<Location>().is_err());
    assert!("/abc".parse::<Location>().is_err());
    assert!("/1/x".parse::<Location>().is_err());
    assert!("/1/2/3".parse::<Location>().is_err());
}

#[test]
fn story_id_is_a_bare_number_on_the_wire() {
    assert_eq!(serde_json::to_string(&StoryId(5)).unwrap(), "5");
    let id: StoryId = serde_json::from_str("17").unwrap();
    assert_eq!(id, StoryId(17));
    assert!(" 9 ".parse::<StoryId>().is_ok());
}
