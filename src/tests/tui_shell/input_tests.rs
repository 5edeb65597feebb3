use super::*;

fn typed(s: &str) -> Input {
    let mut input = Input::default();
    for c in s.chars() {
        input.insert_char(c);
    }
    input
}

#[test]
fn edits_at_cursor() {
    let mut input = typed("hllo");
    input.home();
    input.move_right();
    input.insert_char('e');
    assert_eq!(input.buf, "hello");
    assert_eq!(input.split(), ("he", "llo"));

    input.end();
    assert!(input.backspace());
    assert_eq!(input.buf, "hell");
    assert!(!input.delete());
}

#[test]
fn multibyte_chars() {
    let mut input = typed("héé");
    input.move_left();
    assert!(input.backspace());
    assert_eq!(input.buf, "hé");
    assert_eq!(input.split(), ("h", "é"));
    assert!(input.delete());
    assert_eq!(input.buf, "h");
}

#[test]
fn cursor_stays_in_bounds() {
    let mut input = typed("ab");
    input.move_right();
    assert_eq!(input.cursor, 2);
    input.home();
    input.move_left();
    assert_eq!(input.cursor, 0);
    assert!(!input.backspace());

    input.clear();
    assert_eq!(input.buf, "");
    assert_eq!(input.cursor, 0);
}
