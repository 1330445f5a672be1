use mongodb::Database;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Opened at startup and pinged once; no handler reads or writes records yet.
    #[allow(dead_code)]
    pub db: Database,
    #[allow(dead_code)]
    pub config: Config,
}
