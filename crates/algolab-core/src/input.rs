//! Validation of request bodies into typed algorithm inputs.
//!
//! A field counts as a number only when it is a JSON number. Strings,
//! booleans, `null` and missing fields are rejected the same way a
//! non-numeric value would be.

use serde_json::{json, Map, Value};

use crate::algorithm::Algorithm;
use crate::constants::{messages, MAX_FIBONACCI_TERMS};
use crate::error::AlgoError;
use crate::outcome::JsNumber;

/// Exclusive upper bound of `u64` as an `f64` (2^64).
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Validated input for one algorithm run.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgorithmInput {
    Prime { number: u64 },
    Summation { numbers: Vec<f64> },
    Fibonacci { n: usize },
    Gcd { a: u64, b: u64 },
    QuickSort { numbers: Vec<f64> },
    Count { data: Vec<f64>, n: f64 },
}

impl AlgorithmInput {
    /// Validates `body` as the request for `algorithm`.
    pub fn from_json(algorithm: Algorithm, body: &Value) -> Result<Self, AlgoError> {
        let Some(fields) = body.as_object() else {
            return Err(AlgoError::invalid(messages::OBJECT_BODY));
        };

        match algorithm {
            Algorithm::Prime => {
                let number = positive_integer(fields, "number")
                    .ok_or_else(|| AlgoError::invalid(messages::POSITIVE_INTEGER))?;
                Ok(Self::Prime { number })
            }
            Algorithm::Summation => {
                let numbers = number_array(fields, "numbers")
                    .ok_or_else(|| AlgoError::invalid(messages::NUMBER_ARRAY))?;
                Ok(Self::Summation { numbers })
            }
            Algorithm::Fibonacci => {
                let n = positive_integer(fields, "n")
                    .ok_or_else(|| AlgoError::invalid(messages::POSITIVE_INTEGER))?;
                let n = usize::try_from(n)
                    .ok()
                    .filter(|&n| n <= MAX_FIBONACCI_TERMS)
                    .ok_or_else(|| {
                        AlgoError::InvalidInput(format!(
                            "Invalid input: n must be at most {MAX_FIBONACCI_TERMS}"
                        ))
                    })?;
                Ok(Self::Fibonacci { n })
            }
            Algorithm::Gcd => {
                let a = positive_integer(fields, "a");
                let b = positive_integer(fields, "b");
                match (a, b) {
                    (Some(a), Some(b)) => Ok(Self::Gcd { a, b }),
                    _ => Err(AlgoError::invalid(messages::TWO_POSITIVE_INTEGERS)),
                }
            }
            Algorithm::QuickSort => {
                let numbers = number_array(fields, "numbers")
                    .ok_or_else(|| AlgoError::invalid(messages::NUMBER_ARRAY))?;
                Ok(Self::QuickSort { numbers })
            }
            Algorithm::Count => {
                let data = number_array(fields, "data");
                let n = fields.get("n").and_then(number);
                match (data, n) {
                    (Some(data), Some(n)) => Ok(Self::Count { data, n }),
                    _ => Err(AlgoError::invalid(messages::COUNT_INPUT)),
                }
            }
        }
    }

    /// The algorithm this input is for.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Prime { .. } => Algorithm::Prime,
            Self::Summation { .. } => Algorithm::Summation,
            Self::Fibonacci { .. } => Algorithm::Fibonacci,
            Self::Gcd { .. } => Algorithm::Gcd,
            Self::QuickSort { .. } => Algorithm::QuickSort,
            Self::Count { .. } => Algorithm::Count,
        }
    }

    /// Renders the input back into its request shape.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let numbers = |values: &[f64]| -> Vec<JsNumber> {
            values.iter().map(|&v| JsNumber(v)).collect()
        };
        match self {
            Self::Prime { number } => json!({ "number": number }),
            Self::Summation { numbers: values } | Self::QuickSort { numbers: values } => {
                json!({ "numbers": numbers(values) })
            }
            Self::Fibonacci { n } => json!({ "n": n }),
            Self::Gcd { a, b } => json!({ "a": a, "b": b }),
            Self::Count { data, n } => json!({ "data": numbers(data), "n": JsNumber(*n) }),
        }
    }
}

fn number(value: &Value) -> Option<f64> {
    if value.is_number() {
        value.as_f64()
    } else {
        None
    }
}

fn number_array(fields: &Map<String, Value>, name: &str) -> Option<Vec<f64>> {
    fields.get(name)?.as_array()?.iter().map(number).collect()
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn positive_integer(fields: &Map<String, Value>, name: &str) -> Option<u64> {
    let value = fields.get(name)?;
    if let Some(n) = value.as_u64() {
        return (n > 0).then_some(n);
    }
    // Integral floats such as 7.0 are still integers.
    let f = number(value)?;
    (f.fract() == 0.0 && f > 0.0 && f < U64_LIMIT).then_some(f as u64)
}
