use lexi_core::messages;

use super::fake::FakeDictionary;
use crate::plain::lookup_once;

#[tokio::test]
async fn known_word_prints_heading_and_numbered_list() {
    let dictionary = FakeDictionary::default().with("mouse", &["a rodent", "to move stealthily"]);

    let lines = lookup_once(&dictionary, "mouse").await;

    assert_eq!(
        lines,
        vec![
            "Meanings of \"mouse\":".to_string(),
            "1. a rodent".to_string(),
            "2. to move stealthily".to_string(),
        ]
    );
}

#[tokio::test]
async fn unknown_word_prints_not_found() {
    let dictionary = FakeDictionary::default();

    let lines = lookup_once(&dictionary, "qwzx").await;

    assert_eq!(lines, vec![messages::NOT_FOUND_ERROR.to_string()]);
    assert_eq!(dictionary.calls(), 1);
}

#[tokio::test]
async fn blank_word_never_calls_dictionary() {
    let dictionary = FakeDictionary::default();

    let lines = lookup_once(&dictionary, "   ").await;

    assert_eq!(lines, vec![messages::ENTER_WORD_PROMPT.to_string()]);
    assert_eq!(dictionary.calls(), 0);
}

#[tokio::test]
async fn empty_result_prints_idle_prompt() {
    let dictionary = FakeDictionary::default().with("mouse", &[]);

    let lines = lookup_once(&dictionary, "mouse").await;

    assert_eq!(lines, vec![messages::IDLE_PROMPT.to_string()]);
}
