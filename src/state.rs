use std::sync::Arc;

use crate::{config::Config, records::Db, store::SheetsApi};

/// Shared application state. The store client is constructed exactly once at
/// startup and reused by every request; there is no other process-wide state.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(client: Arc<dyn SheetsApi>, config: Config) -> Self {
        Self {
            db: Db::new(client),
            config: Arc::new(config),
        }
    }
}
