//! Application configuration from CLI flags and environment.

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

use algolab_core::DEFAULT_HISTORY_CAPACITY;
use algolab_server::config::{DEFAULT_ADDR, DEFAULT_MAX_BODY_BYTES};

/// AlgoLab — classic algorithms with side-by-side JavaScript and Java listings.
#[derive(Parser, Debug)]
#[command(name = "algolab", version, about)]
pub struct AppConfig {
    /// Verbose output (full sequences, debug logs).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only print the result).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API.
    Serve(ServeArgs),
    /// Run one algorithm and print the result.
    Run(RunArgs),
    /// List the available algorithms.
    List,
    /// Show the code listing of an algorithm.
    Show(ShowArgs),
    /// Generate shell completion.
    Completion {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Listen address.
    #[arg(long, default_value_t = DEFAULT_ADDR, env = "ALGOLAB_ADDR")]
    pub addr: SocketAddr,

    /// Disable permissive CORS headers.
    #[arg(long, env = "ALGOLAB_NO_CORS")]
    pub no_cors: bool,

    /// Number of executions kept in the in-memory log.
    #[arg(long, default_value_t = DEFAULT_HISTORY_CAPACITY, env = "ALGOLAB_HISTORY_CAPACITY")]
    pub history_capacity: usize,

    /// Largest accepted request body in bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_BODY_BYTES, env = "ALGOLAB_MAX_BODY_BYTES")]
    pub max_body_bytes: usize,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Algorithm id: prime, summation, fibonacci, gcd, quicksort, or count.
    pub algorithm: String,

    /// Input values, space- or comma-separated.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Upper bound N for `count`.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub upper: Option<String>,

    /// Listing language recorded with the run: javascript or java.
    #[arg(short, long, default_value = "javascript")]
    pub language: String,

    /// Print the JSON body the HTTP API would return.
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON result to this file.
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Algorithm id.
    pub algorithm: String,

    /// Only show this language (javascript or java); both side by side otherwise.
    #[arg(short, long)]
    pub language: Option<String>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

impl RunArgs {
    /// Values split on commas, trimmed, with empty pieces dropped.
    #[must_use]
    pub fn tokens(&self) -> Vec<&str> {
        self.values
            .iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect()
    }
}
