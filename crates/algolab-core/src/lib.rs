//! # algolab-core
//!
//! Six textbook algorithms (primality, summation, Fibonacci, GCD, quicksort,
//! count-in-range) together with their catalog entries, reference listings
//! in JavaScript and Java, request validation, timed execution, and an
//! in-memory execution log.

pub mod algorithm;
pub mod constants;
pub mod count;
pub mod error;
pub mod execution;
pub mod fibonacci;
pub mod gcd;
pub mod history;
pub mod input;
pub mod listing;
pub mod outcome;
pub mod prime;
pub mod quicksort;
pub mod summation;

// Re-exports
pub use algorithm::Algorithm;
pub use constants::{exit_codes, DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_LIMIT, MAX_FIBONACCI_TERMS};
pub use error::AlgoError;
pub use execution::{execute, Execution};
pub use history::{ExecutionLog, ExecutionRecord, NewExecution};
pub use input::AlgorithmInput;
pub use listing::{listing, Language};
pub use outcome::{JsNumber, Outcome};

/// Validates `body` for `algorithm` and runs it.
///
/// # Example
/// ```
/// use algolab_core::{run, Algorithm, Outcome};
/// let execution = run(Algorithm::Gcd, &serde_json::json!({"a": 48, "b": 18})).unwrap();
/// assert_eq!(execution.outcome, Outcome::Integer(6));
/// ```
pub fn run(algorithm: Algorithm, body: &serde_json::Value) -> Result<Execution, AlgoError> {
    let input = AlgorithmInput::from_json(algorithm, body)?;
    Ok(Execution::run(&input))
}
