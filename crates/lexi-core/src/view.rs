use crate::messages;
use crate::state::LookupState;

/// What the results panel shows. Exactly one panel at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View<'a> {
    /// Input is blank
    EnterWord,
    Error(&'a str),
    Definitions {
        word: &'a str,
        definitions: &'a [String],
    },
    Searching,
    Idle,
}

pub fn render(state: &LookupState) -> View<'_> {
    if state.word().trim().is_empty() {
        return View::EnterWord;
    }

    if let Some(error) = state.error() {
        return View::Error(error);
    }

    if !state.definitions().is_empty() {
        return View::Definitions {
            word: state.searched_word(),
            definitions: state.definitions(),
        };
    }

    if state.is_loading() {
        View::Searching
    } else {
        View::Idle
    }
}

impl View<'_> {
    /// Plain text rendering, one entry per line. Definitions are numbered.
    pub fn lines(&self) -> Vec<String> {
        match self {
            View::EnterWord => vec![messages::ENTER_WORD_PROMPT.to_string()],
            View::Error(error) => vec![error.to_string()],
            View::Definitions { word, definitions } => {
                let mut lines = Vec::with_capacity(definitions.len() + 1);
                lines.push(messages::meanings_heading(word));
                lines.extend(
                    definitions
                        .iter()
                        .enumerate()
                        .map(|(i, definition)| format!("{}. {}", i + 1, definition)),
                );
                lines
            }
            View::Searching => vec![messages::SEARCHING.to_string()],
            View::Idle => vec![messages::IDLE_PROMPT.to_string()],
        }
    }
}
