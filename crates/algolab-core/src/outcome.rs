//! Algorithm results and their JSON rendering.

use std::fmt;

use serde::{Serialize, Serializer};

/// Largest magnitude below which every integral `f64` is exact (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The value produced by one algorithm run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Primality verdict.
    Bool(bool),
    /// A single floating-point value (summation).
    Number(f64),
    /// A single exact integer (GCD, count).
    Integer(u64),
    /// Floating-point values (Fibonacci, quicksort).
    Sequence(Vec<f64>),
}

impl Outcome {
    /// Renders the outcome as a JSON value.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// An `f64` that serializes the way a JavaScript JSON encoder prints it:
/// integral values without a fractional part, non-finite values as `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JsNumber(pub f64);

impl Serialize for JsNumber {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

impl fmt::Display for JsNumber {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
            write!(f, "{}", value as i64)
        } else {
            write!(f, "{value}")
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => JsNumber(*n).serialize(serializer),
            Self::Integer(n) => serializer.serialize_u64(*n),
            Self::Sequence(values) => serializer.collect_seq(values.iter().map(|&v| JsNumber(v))),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{}", JsNumber(*n)),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Sequence(values) => {
                let parts: Vec<String> = values.iter().map(|&v| JsNumber(v).to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}
