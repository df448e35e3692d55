//! Non-interactive mode: one lookup per word, printed as plain lines.

use lexi_core::{LookupState, render};
use lexi_dictionary::DictionaryApi;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::events::lookup::lookup_outcome;

/// Run one submit/lookup cycle and return the rendered panel
pub async fn lookup_once(dictionary: &dyn DictionaryApi, word: &str) -> Vec<String> {
    let mut state = LookupState::new();
    state.input_changed(word);

    if let Some(request) = state.submit() {
        let outcome = lookup_outcome(dictionary, &request.word).await;
        state.complete(request.id, outcome);
    }

    render(&state).lines()
}

/// Look up `word`, or every line of stdin when no word is given
pub async fn run_plain(dictionary: &dyn DictionaryApi, word: Option<String>) -> anyhow::Result<()> {
    if let Some(word) = word {
        print_lines(&lookup_once(dictionary, &word).await);
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        print_lines(&lookup_once(dictionary, &line).await);
    }

    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}
