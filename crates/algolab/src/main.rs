//! AlgoLab — classic algorithms from the terminal or over HTTP.

use std::process::ExitCode;

use algolab_lib::config::{AppConfig, Command};
use algolab_lib::{app, errors};

fn main() -> ExitCode {
    let config = AppConfig::parse();

    // Logs go to stderr so quiet output stays machine-readable.
    let default_level = if config.verbose {
        "debug"
    } else if matches!(config.command, Command::Serve(_)) {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            app::report_error(&config, &err);
            ExitCode::from(errors::exit_code(&err))
        }
    }
}
