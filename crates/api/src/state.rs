use std::sync::Arc;

use tpx_core::store::StatusStore;

use crate::config::ServerConfig;
use crate::engine::dispatcher::StatusDispatcher;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Nothing in it is
/// mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Status store, also used for health checks.
    pub store: Arc<dyn StatusStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Category dispatcher handling every status report.
    pub dispatcher: Arc<StatusDispatcher>,
}

impl AppState {
    /// Wire the dispatcher to the store using the configured registry and
    /// update switches.
    pub fn new(config: ServerConfig, store: Arc<dyn StatusStore>) -> Self {
        let dispatcher = StatusDispatcher::new(
            Arc::new(config.instruments.clone()),
            Arc::clone(&store),
            config.updater,
        );
        Self {
            store,
            config: Arc::new(config),
            dispatcher: Arc::new(dispatcher),
        }
    }
}
