//! Request and response bodies.

use serde::{Deserialize, Serialize};

use algolab_core::{listing, Algorithm, Language, Outcome};

/// Successful algorithm response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResponse {
    pub result: Outcome,
    /// Milliseconds spent computing.
    pub execution_time: f64,
    pub implementation: Language,
    pub execution_id: u64,
}

/// Catalog summary of one algorithm.
#[derive(Debug, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub endpoint: String,
}

impl From<Algorithm> for CatalogEntry {
    fn from(algorithm: Algorithm) -> Self {
        Self {
            id: algorithm.id(),
            title: algorithm.title(),
            description: algorithm.description(),
            endpoint: algorithm.endpoint(),
        }
    }
}

/// Listings of one algorithm in both languages.
#[derive(Debug, Serialize)]
pub struct Listings {
    pub javascript: &'static str,
    pub java: &'static str,
}

/// Catalog entry with its listings.
#[derive(Debug, Serialize)]
pub struct CatalogDetail {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub listings: Listings,
}

impl From<Algorithm> for CatalogDetail {
    fn from(algorithm: Algorithm) -> Self {
        Self {
            entry: CatalogEntry::from(algorithm),
            listings: Listings {
                javascript: listing(algorithm, Language::JavaScript),
                java: listing(algorithm, Language::Java),
            },
        }
    }
}

/// Query string of `GET /api/executions`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<usize>,
}

/// Body of `GET /api/status`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub algorithms: usize,
    pub executions_retained: usize,
    pub history_capacity: usize,
}
