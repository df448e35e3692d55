use std::sync::Arc;

use clap::Parser;
use lexi_dictionary::{DictionaryApi, FreeDictionaryClient};
use tokio::signal;

pub mod controller;
pub mod events;
pub mod logging;
pub mod plain;
pub mod profile;
pub mod state;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::profile::ProfileStore;
use self::state::AppState;

/// Look up English words in a public dictionary
#[derive(Parser, Debug)]
#[command(name = "lexi", version, about)]
struct Cli {
    /// Look up a single word and print the result
    word: Option<String>,

    /// Profile to load
    #[arg(long, default_value = "main")]
    profile: String,

    /// Override the dictionary API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Line-oriented mode: read words from stdin, print results
    #[arg(long)]
    plain: bool,

    /// Create a profile cloned from main and exit
    #[arg(long, value_name = "NAME")]
    new_profile: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let store = ProfileStore::from_env();
    if let Some(name) = &cli.new_profile {
        let path = store.add_from_main(name)?;
        println!("{}", path.display());
        return Ok(());
    }

    if let Err(e) = store.init() {
        eprintln!("Could not create profile folder: {e}");
    }
    let mut config = store.load(&cli.profile)?;
    config.apply_env();
    if let Some(base_url) = cli.base_url {
        config.dictionary.base_url = base_url;
    }

    let interactive = cli.word.is_none() && !cli.plain && atty::is(atty::Stream::Stdout);
    logging::init_logging(&config, interactive)?;
    tracing::info!("Starting lexi (profile: {}, interactive: {})", cli.profile, interactive);

    let dictionary: Arc<dyn DictionaryApi> =
        Arc::new(FreeDictionaryClient::new(config.dictionary.clone())?);

    if !interactive {
        return plain::run_plain(dictionary.as_ref(), cli.word).await;
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state, dictionary);
    let mut tasks = controller.spawn_tasks();

    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                tracing::info!("Shutdown requested");
                controller.shutdown();
            }
            joined = tasks.join_next() => {
                match joined {
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => {
                        tracing::error!("task exited with error: {e}");
                        controller.shutdown();
                    }
                    Some(Err(e)) => {
                        tracing::error!("task panicked: {e}");
                        controller.shutdown();
                    }
                    None => break,
                }
            }
        }
    }

    tracing::info!("Bye");
    Ok(())
}
