//! Limits, defaults, and exit codes shared across the workspace.

/// Largest `n` accepted for a Fibonacci request.
///
/// Terms past F(1476) are already infinite; the cap only bounds the size
/// of the response.
pub const MAX_FIBONACCI_TERMS: usize = 10_000;

/// Default number of records kept by the execution log.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// Default number of records returned when listing executions.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Validation messages returned to callers.
pub mod messages {
    pub const POSITIVE_INTEGER: &str = "Invalid input: Please provide a positive integer";
    pub const NUMBER_ARRAY: &str = "Invalid input: Please provide an array of numbers";
    pub const TWO_POSITIVE_INTEGERS: &str = "Invalid input: Please provide two positive integers";
    pub const COUNT_INPUT: &str =
        "Invalid input: Please provide an array of integers and an upper limit";
    pub const OBJECT_BODY: &str = "Invalid input: Request body must be a JSON object";
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Rejected input or unknown algorithm/language.
    pub const ERROR_INPUT: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_distinct() {
        assert_ne!(exit_codes::SUCCESS, exit_codes::ERROR_GENERIC);
        assert_ne!(exit_codes::ERROR_GENERIC, exit_codes::ERROR_INPUT);
    }
}
