//! Dispatch and timing of algorithm runs.

use std::time::{Duration, Instant};

use crate::algorithm::Algorithm;
use crate::count::count_in_range;
use crate::fibonacci::fibonacci;
use crate::gcd::gcd;
use crate::input::AlgorithmInput;
use crate::outcome::Outcome;
use crate::prime::is_prime;
use crate::quicksort::quick_sort;
use crate::summation::summation;

/// Runs the algorithm selected by `input`.
#[must_use]
pub fn execute(input: &AlgorithmInput) -> Outcome {
    match input {
        AlgorithmInput::Prime { number } => Outcome::Bool(is_prime(*number)),
        AlgorithmInput::Summation { numbers } => Outcome::Number(summation(numbers)),
        AlgorithmInput::Fibonacci { n } => Outcome::Sequence(fibonacci(*n)),
        AlgorithmInput::Gcd { a, b } => Outcome::Integer(gcd(*a, *b)),
        AlgorithmInput::QuickSort { numbers } => Outcome::Sequence(quick_sort(numbers)),
        AlgorithmInput::Count { data, n } => {
            Outcome::Integer(count_in_range(data, *n) as u64)
        }
    }
}

/// Result of a single timed run.
#[derive(Debug, Clone)]
pub struct Execution {
    /// Algorithm that ran.
    pub algorithm: Algorithm,
    /// The computed value.
    pub outcome: Outcome,
    /// Wall-clock time spent computing.
    pub duration: Duration,
}

impl Execution {
    /// Runs `input` and measures how long the computation took.
    #[must_use]
    pub fn run(input: &AlgorithmInput) -> Self {
        let algorithm = input.algorithm();
        let start = Instant::now();
        let outcome = execute(input);
        let duration = start.elapsed();
        tracing::debug!(%algorithm, ?duration, "algorithm executed");
        Self {
            algorithm,
            outcome,
            duration,
        }
    }

    /// Elapsed time in fractional milliseconds.
    #[must_use]
    pub fn execution_time_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatches_each_algorithm() {
        assert_eq!(
            execute(&AlgorithmInput::Prime { number: 97 }),
            Outcome::Bool(true)
        );
        assert_eq!(
            execute(&AlgorithmInput::Summation {
                numbers: vec![1.0, 2.0, 3.5]
            }),
            Outcome::Number(6.5)
        );
        assert_eq!(
            execute(&AlgorithmInput::Fibonacci { n: 5 }),
            Outcome::Sequence(vec![0.0, 1.0, 1.0, 2.0, 3.0])
        );
        assert_eq!(
            execute(&AlgorithmInput::Gcd { a: 48, b: 18 }),
            Outcome::Integer(6)
        );
        assert_eq!(
            execute(&AlgorithmInput::QuickSort {
                numbers: vec![3.0, 1.0, 2.0]
            }),
            Outcome::Sequence(vec![1.0, 2.0, 3.0])
        );
        assert_eq!(
            execute(&AlgorithmInput::Count {
                data: vec![5.0, 10.0, 15.0, 20.0, 25.0],
                n: 20.0
            }),
            Outcome::Integer(4)
        );
    }

    #[test]
    fn run_records_algorithm_and_time() {
        let execution = Execution::run(&AlgorithmInput::Gcd { a: 270, b: 192 });
        assert_eq!(execution.algorithm, Algorithm::Gcd);
        assert_eq!(execution.outcome, Outcome::Integer(6));
        assert!(execution.execution_time_ms() >= 0.0);
    }
}
