use kanal::{AsyncReceiver, AsyncSender};
use lexi_config::ui::UiConfig;
use lexi_types::AppEvent;
use tokio_util::sync::CancellationToken;

/// Run the terminal UI on a blocking thread. The UI stops when `cancel`
/// fires and cancels the app when it exits on its own.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let rx = app_to_ui_rx.clone_sync();
    let tx = ui_to_app_tx.clone_sync();
    let shutdown = cancel.clone();
    let result =
        tokio::task::spawn_blocking(move || lexi_ui::ui_loop(rx, tx, config, shutdown)).await;

    cancel.cancel();
    result?
}
