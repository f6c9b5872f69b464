//! Golden file integration tests.
//!
//! Reads tests/testdata/algorithms_golden.json and checks every case
//! against the library, in the same JSON shape the HTTP API uses.

use serde::Deserialize;
use serde_json::Value;

use algolab_core::{run, AlgoError, Algorithm};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    algorithm: Algorithm,
    input: Value,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<String>,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/algorithms_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Golden: results and validation errors
// ---------------------------------------------------------------------------

#[test]
fn golden_results() {
    let data = load_golden_data();
    let mut checked = 0;
    for case in data.cases.iter().filter(|c| c.result.is_some()) {
        let execution = run(case.algorithm, &case.input)
            .unwrap_or_else(|e| panic!("{} {} failed: {e}", case.algorithm, case.input));
        assert_eq!(
            Some(execution.outcome.to_json()),
            case.result,
            "{} mismatch for {}",
            case.algorithm,
            case.input,
        );
        checked += 1;
    }
    assert!(checked > 20);
}

#[test]
fn golden_validation_errors() {
    let data = load_golden_data();
    for case in data.cases.iter() {
        let Some(expected) = &case.error else {
            continue;
        };
        match run(case.algorithm, &case.input) {
            Err(AlgoError::InvalidInput(message)) => assert_eq!(&message, expected),
            other => panic!(
                "{} {}: expected validation error, got {other:?}",
                case.algorithm, case.input
            ),
        }
    }
}

#[test]
fn golden_covers_every_algorithm() {
    let data = load_golden_data();
    for algorithm in Algorithm::ALL {
        assert!(
            data.cases.iter().any(|c| c.algorithm == algorithm),
            "no golden case for {algorithm}"
        );
    }
}
