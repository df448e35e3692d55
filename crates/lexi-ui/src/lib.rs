use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use kanal::{Receiver, Sender};
use lexi_config::ui::UiConfig;
use lexi_types::AppEvent;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tokio_util::sync::CancellationToken;

pub mod app;
pub mod draw;
pub mod input;

pub use app::UiApp;

/// Terminal UI loop. Blocking; run it off the async runtime. Returns when
/// the user quits, the backend channel closes or `shutdown` is cancelled.
pub fn ui_loop(
    app_to_ui_rx: Receiver<AppEvent>,
    ui_to_app_tx: Sender<AppEvent>,
    config: UiConfig,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::try_init()?;
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;

    let mut app = UiApp::new(config.placeholder.clone());
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let result = run(
        &mut terminal,
        &mut app,
        &app_to_ui_rx,
        &ui_to_app_tx,
        &shutdown,
        || {
            if event::poll(tick_rate)? {
                Ok(Some(event::read()?))
            } else {
                Ok(None)
            }
        },
    );

    if let Err(e) = crossterm::execute!(std::io::stdout(), DisableMouseCapture) {
        tracing::warn!("[UI] Failed to disable mouse capture: {}", e);
    }
    ratatui::restore();

    tracing::info!("[UI] Terminal restored");
    result
}

/// Draw/input/apply cycle. `next_input` blocks for at most one tick.
fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut UiApp,
    app_to_ui_rx: &Receiver<AppEvent>,
    ui_to_app_tx: &Sender<AppEvent>,
    shutdown: &CancellationToken,
    mut next_input: impl FnMut() -> anyhow::Result<Option<Event>>,
) -> anyhow::Result<()>
where
    B::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        if shutdown.is_cancelled() {
            tracing::info!("[UI] Shutdown requested");
            return Ok(());
        }

        terminal.draw(|frame| draw::draw(frame, app))?;

        let outgoing = match next_input()? {
            Some(Event::Key(key)) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Some(Event::Mouse(mouse)) => app.handle_mouse(mouse),
            _ => None,
        };

        if let Some(event) = outgoing {
            // Never block the UI thread on a stalled backend
            match ui_to_app_tx.try_send(event) {
                Ok(true) => {}
                Ok(false) => tracing::warn!("[UI] Backend queue full, dropping event"),
                Err(e) => {
                    if app.should_quit {
                        return Ok(());
                    }
                    return Err(e.into());
                }
            }
        }

        loop {
            match app_to_ui_rx.try_recv() {
                Ok(Some(event)) => app.apply(event),
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("[UI] Backend channel closed: {}", e);
                    app.should_quit = true;
                    break;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
