//! # algolab-server
//!
//! JSON HTTP API over the AlgoLab algorithms. Each algorithm has a POST
//! endpoint under `/api/algorithms/`; the catalog, listings, and the
//! execution log are exposed read-only.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod types;

pub use config::{ServerConfig, ServerConfigBuilder};
pub use error::ApiError;
pub use server::{router, Server};
pub use state::AppState;
