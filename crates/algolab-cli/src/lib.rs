//! # algolab-cli
//!
//! Terminal output for AlgoLab: result presenters, the catalog table, and
//! side-by-side code listings.

pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CliPresenter, JsonPresenter, ResultPresenter};
