//! Algorithm catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlgoError;

/// One of the six algorithms the lab can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Prime,
    Summation,
    Fibonacci,
    Gcd,
    QuickSort,
    Count,
}

impl Algorithm {
    /// All algorithms, in catalog order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Prime,
        Algorithm::Summation,
        Algorithm::Fibonacci,
        Algorithm::Gcd,
        Algorithm::QuickSort,
        Algorithm::Count,
    ];

    /// Stable identifier, also the last segment of the endpoint path.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Prime => "prime",
            Self::Summation => "summation",
            Self::Fibonacci => "fibonacci",
            Self::Gcd => "gcd",
            Self::QuickSort => "quicksort",
            Self::Count => "count",
        }
    }

    /// Human-readable title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Prime => "Prime Number Check",
            Self::Summation => "Summation",
            Self::Fibonacci => "Fibonacci Sequence",
            Self::Gcd => "Greatest Common Divisor",
            Self::QuickSort => "QuickSort",
            Self::Count => "Count Integers in Range",
        }
    }

    /// One-line description of what the algorithm computes.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Prime => "Checks whether a positive integer is prime using trial division.",
            Self::Summation => "Adds up a list of numbers.",
            Self::Fibonacci => "Generates the first N numbers of the Fibonacci sequence.",
            Self::Gcd => "Finds the greatest common divisor of two positive integers using the Euclidean algorithm.",
            Self::QuickSort => "Sorts a list of numbers in ascending order with quicksort.",
            Self::Count => "Counts how many integers in a data set lie between the first value (inclusive) and N (inclusive).",
        }
    }

    /// Path of the POST endpoint that runs this algorithm.
    #[must_use]
    pub fn endpoint(self) -> String {
        format!("/api/algorithms/{}", self.id())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = AlgoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|algo| algo.id() == needle)
            .ok_or_else(|| AlgoError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.id().parse::<Algorithm>().unwrap(), algo);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("QuickSort".parse::<Algorithm>().unwrap(), Algorithm::QuickSort);
        assert_eq!(" GCD ".parse::<Algorithm>().unwrap(), Algorithm::Gcd);
    }

    #[test]
    fn unknown_id() {
        let err = "bogosort".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, AlgoError::UnknownAlgorithm("bogosort".into()));
    }

    #[test]
    fn endpoints() {
        assert_eq!(Algorithm::Prime.endpoint(), "/api/algorithms/prime");
        assert_eq!(Algorithm::QuickSort.endpoint(), "/api/algorithms/quicksort");
    }

    #[test]
    fn serde_uses_ids() {
        let json = serde_json::to_string(&Algorithm::QuickSort).unwrap();
        assert_eq!(json, "\"quicksort\"");
        let back: Algorithm = serde_json::from_str("\"count\"").unwrap();
        assert_eq!(back, Algorithm::Count);
    }
}
