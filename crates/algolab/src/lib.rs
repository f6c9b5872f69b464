//! AlgoLab library — command-line application logic.

pub mod app;
pub mod config;
pub mod errors;
