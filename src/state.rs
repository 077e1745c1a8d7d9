use std::sync::Arc;
use crate::config::Config;
use crate::services::UserStore;

/// Shared per-process context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: UserStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
