use std::sync::Arc;
use std::sync::atomic::Ordering;

use kanal::AsyncSender;
use lexi_dictionary::DictionaryApi;
use lexi_types::{AppEvent, LookupOutcome, LookupRequest};

use crate::state::AppState;

/// Spawn the request and report back with its id. Overlapping lookups run
/// side by side; the UI keeps only the latest.
pub fn handle_lookup(
    state: Arc<AppState>,
    dictionary: Arc<dyn DictionaryApi>,
    request: LookupRequest,
    app_to_ui_tx: AsyncSender<AppEvent>,
) {
    let in_flight = state.lookups_in_flight.fetch_add(1, Ordering::SeqCst);
    if in_flight > 0 {
        tracing::debug!(
            "Lookup {} started with {} still in flight",
            request.id,
            in_flight
        );
    }

    tokio::spawn(async move {
        let outcome = lookup_outcome(dictionary.as_ref(), &request.word).await;
        state.lookups_in_flight.fetch_sub(1, Ordering::SeqCst);

        let event = AppEvent::LookupFinished {
            id: request.id,
            outcome,
        };
        if let Err(e) = app_to_ui_tx.send(event).await {
            tracing::debug!("Dropping result of lookup {}: {}", request.id, e);
        }
    });
}

/// Every failure folds into `NotFound`; the cause is only logged
pub async fn lookup_outcome(dictionary: &dyn DictionaryApi, word: &str) -> LookupOutcome {
    match dictionary.define(word).await {
        Ok(definitions) => {
            tracing::info!("'{}': {} definitions", word, definitions.len());
            LookupOutcome::Found(definitions)
        }
        Err(e) => {
            tracing::warn!("Lookup for '{}' failed: {}", word, e);
            LookupOutcome::NotFound
        }
    }
}
