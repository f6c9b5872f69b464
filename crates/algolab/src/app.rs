//! Application entry point and dispatch.

use anyhow::{Context, Result};
use serde_json::{json, Value};

use algolab_cli::output::write_to_file;
use algolab_cli::{CliPresenter, JsonPresenter, ResultPresenter};
use algolab_core::{AlgoError, Algorithm, AlgorithmInput, Execution, Language};
use algolab_server::{Server, ServerConfig};

use crate::config::{AppConfig, Command, RunArgs, ServeArgs};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    match &config.command {
        Command::Serve(args) => serve(args),
        Command::Run(args) => run_algorithm(config, args),
        Command::List => {
            print!("{}", presenter(config).render_catalog());
            Ok(())
        }
        Command::Show(args) => {
            let algorithm: Algorithm = args.algorithm.parse()?;
            let language = args
                .language
                .as_deref()
                .map(str::parse::<Language>)
                .transpose()?;
            print!("{}", presenter(config).render_listing(algorithm, language));
            Ok(())
        }
        Command::Completion { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            clap_complete::generate(*shell, &mut cmd, "algolab", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Print `err` the way the selected output mode expects.
pub fn report_error(config: &AppConfig, err: &anyhow::Error) {
    let message = format!("{err:#}");
    match &config.command {
        Command::Run(args) if args.json => JsonPresenter.present_error(&message),
        _ => presenter(config).present_error(&message),
    }
}

fn presenter(config: &AppConfig) -> CliPresenter {
    CliPresenter::new(config.verbose, config.quiet)
}

fn serve(args: &ServeArgs) -> Result<()> {
    let server_config = ServerConfig::builder()
        .addr(args.addr)
        .cors(!args.no_cors)
        .history_capacity(args.history_capacity)
        .max_body_bytes(args.max_body_bytes)
        .build();

    let runtime = tokio::runtime::Runtime::new().context("failed to start the async runtime")?;
    runtime
        .block_on(Server::new(server_config).run())
        .with_context(|| format!("server on {} failed", args.addr))
}

fn run_algorithm(config: &AppConfig, args: &RunArgs) -> Result<()> {
    let algorithm: Algorithm = args.algorithm.parse()?;
    let language: Language = args.language.parse()?;
    let body = request_body(algorithm, args)?;
    let input = AlgorithmInput::from_json(algorithm, &body)?;
    let execution = Execution::run(&input);
    tracing::debug!(%algorithm, %language, input = %input.to_json(), "ran from the command line");

    if args.json {
        JsonPresenter.present_execution(&input, &execution, language);
    } else {
        presenter(config).present_execution(&input, &execution, language);
    }

    if let Some(path) = &args.output {
        let rendered = JsonPresenter::render_execution(&execution, language).to_string();
        write_to_file(path, &rendered).with_context(|| format!("failed to write {path}"))?;
    }
    Ok(())
}

/// Builds the request body the HTTP API would receive for these arguments.
///
/// Tokens that are not JSON numbers are passed through as strings so that
/// validation rejects them with the usual message.
fn request_body(algorithm: Algorithm, args: &RunArgs) -> Result<Value, AlgoError> {
    let values: Vec<Value> = args.tokens().into_iter().map(parse_token).collect();
    let upper = args.upper.as_deref().map(|s| parse_token(s.trim()));

    let expect = |count: usize| -> Result<(), AlgoError> {
        if values.len() == count {
            Ok(())
        } else {
            Err(AlgoError::InvalidInput(format!(
                "Invalid input: {algorithm} expects {count} value(s), got {}",
                values.len()
            )))
        }
    };

    let body = match algorithm {
        Algorithm::Prime => {
            expect(1)?;
            json!({ "number": values[0] })
        }
        Algorithm::Fibonacci => {
            expect(1)?;
            json!({ "n": values[0] })
        }
        Algorithm::Gcd => {
            expect(2)?;
            json!({ "a": values[0], "b": values[1] })
        }
        Algorithm::Summation | Algorithm::QuickSort => json!({ "numbers": values }),
        Algorithm::Count => json!({ "data": values, "n": upper }),
    };
    Ok(body)
}

fn parse_token(token: &str) -> Value {
    serde_json::from_str::<Value>(token)
        .ok()
        .filter(Value::is_number)
        .unwrap_or_else(|| Value::String(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(args: &[&str]) -> RunArgs {
        let config =
            AppConfig::try_parse_from(std::iter::once("algolab").chain(args.iter().copied()))
                .unwrap();
        match config.command {
            Command::Run(args) => args,
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn body_for_scalar_algorithms() {
        let args = run_args(&["run", "gcd", "48", "18"]);
        assert_eq!(
            request_body(Algorithm::Gcd, &args).unwrap(),
            json!({"a": 48, "b": 18})
        );
    }

    #[test]
    fn body_for_count() {
        let args = run_args(&["run", "count", "5,10,15", "--upper", "12"]);
        assert_eq!(
            request_body(Algorithm::Count, &args).unwrap(),
            json!({"data": [5, 10, 15], "n": 12})
        );
    }

    #[test]
    fn count_without_upper_fails_validation() {
        let args = run_args(&["run", "count", "5,10,15"]);
        let body = request_body(Algorithm::Count, &args).unwrap();
        assert!(AlgorithmInput::from_json(Algorithm::Count, &body).is_err());
    }

    #[test]
    fn wrong_arity_is_invalid_input() {
        let args = run_args(&["run", "prime", "3", "5"]);
        assert!(matches!(
            request_body(Algorithm::Prime, &args),
            Err(AlgoError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_numeric_tokens_become_strings() {
        assert_eq!(parse_token("abc"), json!("abc"));
        assert_eq!(parse_token("true"), json!("true"));
        assert_eq!(parse_token("2.5"), json!(2.5));
        assert_eq!(parse_token("-7"), json!(-7));
    }
}
