use std::sync::atomic::AtomicUsize;

use lexi_config::Config;

pub struct AppState {
    /// Resolved once at startup (profile, env, CLI); read-only afterwards
    pub config: Config,
    /// Lookups spawned but not yet settled. Overlap is allowed.
    pub lookups_in_flight: AtomicUsize,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            lookups_in_flight: AtomicUsize::new(0),
        }
    }
}
