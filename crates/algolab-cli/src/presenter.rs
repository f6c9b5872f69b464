//! Result presenters for the terminal.

use algolab_core::{listing, Algorithm, AlgorithmInput, Execution, Language};

use crate::output::{format_duration, format_outcome, side_by_side};
use crate::ui;

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present one finished run.
    fn present_execution(&self, input: &AlgorithmInput, execution: &Execution, language: Language);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Human-readable presenter.
pub struct CliPresenter {
    verbose: bool,
    quiet: bool,
}

impl CliPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Text printed for one run.
    #[must_use]
    pub fn render_execution(&self, input: &AlgorithmInput, execution: &Execution) -> String {
        if self.quiet {
            return format_outcome(&execution.outcome, self.verbose);
        }
        let algorithm = execution.algorithm;
        [
            ui::heading(algorithm.title()),
            format!("{} {}", ui::label("Input"), input.to_json()),
            format!("{} {}", ui::label("Duration"), format_duration(execution.duration)),
            format!(
                "{} {}",
                ui::label("Result"),
                format_outcome(&execution.outcome, self.verbose)
            ),
        ]
        .join("\n")
    }

    /// The catalog as a table.
    #[must_use]
    pub fn render_catalog(&self) -> String {
        let mut out = String::new();
        if !self.quiet {
            out.push_str(&ui::heading("Algorithms"));
            out.push('\n');
        }
        for algorithm in Algorithm::ALL {
            if self.quiet {
                out.push_str(algorithm.id());
            } else {
                out.push_str(&format!(
                    "  {:<10} {:<26} {}",
                    algorithm.id(),
                    algorithm.title(),
                    algorithm.description()
                ));
            }
            out.push('\n');
        }
        out
    }

    /// One listing, or both side by side when `language` is `None`.
    #[must_use]
    pub fn render_listing(&self, algorithm: Algorithm, language: Option<Language>) -> String {
        let body = match language {
            Some(language) => format!("{}\n", listing(algorithm, language)),
            None => side_by_side(
                Language::JavaScript.label(),
                listing(algorithm, Language::JavaScript),
                Language::Java.label(),
                listing(algorithm, Language::Java),
            ),
        };
        if self.quiet {
            body
        } else {
            format!("{}\n{body}", ui::heading(algorithm.title()))
        }
    }
}

impl ResultPresenter for CliPresenter {
    fn present_execution(&self, input: &AlgorithmInput, execution: &Execution, _language: Language) {
        println!("{}", self.render_execution(input, execution));
    }

    fn present_error(&self, error: &str) {
        eprintln!("{} {error}", ui::error_tag());
    }
}

/// Presenter printing the same JSON body the HTTP API returns.
pub struct JsonPresenter;

impl JsonPresenter {
    #[must_use]
    pub fn render_execution(execution: &Execution, language: Language) -> serde_json::Value {
        serde_json::json!({
            "result": execution.outcome,
            "executionTime": execution.execution_time_ms(),
            "implementation": language,
        })
    }
}

impl ResultPresenter for JsonPresenter {
    fn present_execution(&self, _input: &AlgorithmInput, execution: &Execution, language: Language) {
        println!("{}", Self::render_execution(execution, language));
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", serde_json::json!({ "error": error }));
    }
}
