use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexi_dictionary::DictionaryApi;
use lexi_types::AppEvent;
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod lookup;

use lookup::handle_lookup;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    dictionary: Arc<dyn DictionaryApi>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let metadata = dictionary.metadata();
    tracing::info!(
        "[EVENT_LOOP] Using {} at {}",
        metadata.name,
        metadata.base_url
    );

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                return Ok(());
            }
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );
        handle_events(&state, &dictionary, &app_to_ui_tx, &cancel, event).await?;
    }
}

async fn handle_events(
    state: &Arc<AppState>,
    dictionary: &Arc<dyn DictionaryApi>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    cancel: &CancellationToken,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Lookup(request) => {
            handle_lookup(state.clone(), dictionary.clone(), request, app_to_ui_tx.clone());
        }
        AppEvent::Quit => {
            tracing::info!("[EVENT_LOOP] Quit requested");
            cancel.cancel();
        }
        AppEvent::LookupFinished { .. } | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
