//! User-facing strings.

pub const ENTER_WORD_PROMPT: &str = "Please enter a word";
pub const EMPTY_INPUT_ERROR: &str = "Please enter a word!";
pub const NOT_FOUND_ERROR: &str = "Word not found!";
pub const SEARCHING: &str = "Searching...";
pub const IDLE_PROMPT: &str = "Start typing to find word meanings.";

pub fn meanings_heading(word: &str) -> String {
    format!("Meanings of \"{word}\":")
}
