use lexi_types::{LookupOutcome, LookupRequest, RequestId};

use crate::messages::{EMPTY_INPUT_ERROR, NOT_FOUND_ERROR};

/// Lookup widget state. Every transition is a plain method; side effects
/// are returned to the caller instead of performed here.
#[derive(Debug, Clone)]
pub struct LookupState {
    word: String,
    error: Option<&'static str>,
    definitions: Vec<String>,
    /// Word the current definitions were fetched for
    searched_word: String,
    loading: bool,
    pending: Option<LookupRequest>,
    last_id: RequestId,
}

impl Default for LookupState {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupState {
    pub fn new() -> Self {
        Self {
            word: String::new(),
            error: None,
            definitions: Vec::new(),
            searched_word: String::new(),
            loading: false,
            pending: None,
            last_id: RequestId(0),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn definitions(&self) -> &[String] {
        &self.definitions
    }

    pub fn searched_word(&self) -> &str {
        &self.searched_word
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pending(&self) -> Option<RequestId> {
        self.pending.as_ref().map(|request| request.id)
    }

    /// Replace the query word. An in-flight request keeps running and may
    /// still land.
    pub fn input_changed(&mut self, text: impl Into<String>) {
        self.word = text.into();
        self.error = None;
        self.definitions.clear();
    }

    /// Explicit search (button or Enter). Returns the request to dispatch,
    /// or `None` when the word is blank.
    pub fn submit(&mut self) -> Option<LookupRequest> {
        if self.word.trim().is_empty() {
            self.error = Some(EMPTY_INPUT_ERROR);
            self.definitions.clear();
            return None;
        }

        self.last_id = self.last_id.next();
        let request = LookupRequest {
            id: self.last_id,
            word: self.word.clone(),
        };

        self.pending = Some(request.clone());
        self.loading = true;
        self.definitions.clear();
        self.error = None;

        Some(request)
    }

    /// Apply a settled lookup. Completions for anything but the latest
    /// request are dropped; returns whether the outcome was applied.
    pub fn complete(&mut self, id: RequestId, outcome: LookupOutcome) -> bool {
        let request = match self.pending.take() {
            Some(request) if request.id == id => request,
            other => {
                tracing::debug!("Dropping stale lookup {} (pending: {:?})", id, other);
                self.pending = other;
                return false;
            }
        };

        self.loading = false;

        match outcome {
            LookupOutcome::Found(definitions) => {
                self.definitions = definitions;
                self.error = None;
                self.searched_word = request.word;
            }
            LookupOutcome::NotFound => {
                self.error = Some(NOT_FOUND_ERROR);
                self.definitions.clear();
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(word: &str) -> LookupState {
        let mut state = LookupState::new();
        state.input_changed(word);
        state
    }

    #[test]
    fn blank_submit_sets_error_and_issues_nothing() {
        for input in ["", "   ", "\t\n"] {
            let mut state = typed(input);
            assert!(state.submit().is_none());
            assert_eq!(state.error(), Some(EMPTY_INPUT_ERROR));
            assert!(state.definitions().is_empty());
            assert!(!state.is_loading());
            assert_eq!(state.pending(), None);
        }
    }

    #[test]
    fn submit_passes_word_verbatim() {
        let mut state = typed("  Mouse ");
        let request = state.submit().expect("request");

        assert_eq!(request.word, "  Mouse ");
        assert_eq!(request.id, RequestId(1));
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn editing_clears_error_and_definitions() {
        let mut state = typed("");
        state.submit();
        assert!(state.error().is_some());

        state.input_changed("m");
        assert_eq!(state.error(), None);

        let request = state.submit().unwrap();
        state.complete(request.id, LookupOutcome::Found(vec!["x".into()]));
        assert_eq!(state.definitions().len(), 1);

        state.input_changed("mo");
        assert!(state.definitions().is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn editing_keeps_request_in_flight() {
        let mut state = typed("mouse");
        let request = state.submit().unwrap();

        state.input_changed("mous");
        assert!(state.is_loading());
        assert_eq!(state.pending(), Some(request.id));

        assert!(state.complete(request.id, LookupOutcome::NotFound));
        assert!(!state.is_loading());
    }

    #[test]
    fn found_stores_definitions_and_stops_loading() {
        let mut state = typed("mouse");
        let request = state.submit().unwrap();

        let applied = state.complete(
            request.id,
            LookupOutcome::Found(vec!["a rodent".into(), "to move stealthily".into()]),
        );

        assert!(applied);
        assert_eq!(state.definitions(), ["a rodent", "to move stealthily"]);
        assert_eq!(state.searched_word(), "mouse");
        assert!(!state.is_loading());
        assert_eq!(state.pending(), None);
    }

    #[test]
    fn not_found_sets_error_and_clears_definitions() {
        let mut state = typed("qwzx");
        let request = state.submit().unwrap();

        state.complete(request.id, LookupOutcome::NotFound);

        assert_eq!(state.error(), Some(NOT_FOUND_ERROR));
        assert!(state.definitions().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn empty_found_is_not_an_error() {
        let mut state = typed("mouse");
        let request = state.submit().unwrap();

        state.complete(request.id, LookupOutcome::Found(vec![]));

        assert_eq!(state.error(), None);
        assert!(state.definitions().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut state = typed("cat");
        let first = state.submit().unwrap();

        state.input_changed("dog");
        let second = state.submit().unwrap();
        assert!(second.id > first.id);

        assert!(!state.complete(first.id, LookupOutcome::Found(vec!["feline".into()])));
        assert!(state.definitions().is_empty());
        assert!(state.is_loading());

        assert!(state.complete(second.id, LookupOutcome::Found(vec!["canine".into()])));
        assert_eq!(state.definitions(), ["canine"]);
        assert_eq!(state.searched_word(), "dog");
    }

    #[test]
    fn duplicate_completion_is_dropped() {
        let mut state = typed("cat");
        let request = state.submit().unwrap();

        assert!(state.complete(request.id, LookupOutcome::Found(vec!["feline".into()])));
        assert!(!state.complete(request.id, LookupOutcome::NotFound));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn loading_stays_false_until_next_submit() {
        let mut state = typed("cat");
        let request = state.submit().unwrap();
        state.complete(request.id, LookupOutcome::Found(vec!["feline".into()]));

        state.input_changed("cats");
        assert!(!state.is_loading());

        state.submit();
        assert!(state.is_loading());
    }

    #[test]
    fn found_after_blank_submit_clears_error() {
        let mut state = typed("cat");
        let request = state.submit().unwrap();

        // blank resubmit while "cat" is still in flight
        state.input_changed("");
        assert!(state.submit().is_none());
        assert_eq!(state.error(), Some(EMPTY_INPUT_ERROR));

        assert!(state.complete(request.id, LookupOutcome::Found(vec!["feline".into()])));
        assert_eq!(state.error(), None);
        assert_eq!(state.definitions(), ["feline"]);
    }
}
