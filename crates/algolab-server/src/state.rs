//! Shared application state.

use std::time::Instant;

use algolab_core::ExecutionLog;

use crate::config::ServerConfig;

/// State shared by all handlers.
#[derive(Debug)]
pub struct AppState {
    /// Log of every successful algorithm run.
    pub history: ExecutionLog,
    /// Server configuration.
    pub config: ServerConfig,
    /// Server start time.
    pub start_time: Instant,
}

impl AppState {
    /// Creates new app state with the given config.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            history: ExecutionLog::new(config.history_capacity),
            config,
            start_time: Instant::now(),
        }
    }
}
