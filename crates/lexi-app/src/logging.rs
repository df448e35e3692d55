use std::fs::OpenOptions;
use std::sync::Mutex;

use lexi_config::Config;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// The interactive UI owns the terminal, so there logs only go to
/// `config.log_file` (or nowhere when it is unset). Plain mode falls back
/// to stderr.
pub fn init_logging(config: &Config, interactive: bool) -> anyhow::Result<()> {
    let writer = match (&config.log_file, interactive) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        (None, true) => return Ok(()),
        (None, false) => BoxMakeWriter::new(std::io::stderr),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer().with_writer(writer).with_ansi(false);
    let layer = if config.log_json {
        layer.json().boxed()
    } else {
        layer.boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()?;

    Ok(())
}
