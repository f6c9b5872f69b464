#![no_main]

use libfuzzer_sys::fuzz_target;

use algolab_core::{execute, Algorithm, AlgorithmInput};

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    for algorithm in Algorithm::ALL {
        let Ok(input) = AlgorithmInput::from_json(algorithm, &body) else {
            continue;
        };
        // Trial division on huge inputs is too slow for fuzzing
        if matches!(input, AlgorithmInput::Prime { number } if number > 1 << 40) {
            continue;
        }
        let outcome = execute(&input);
        let _ = outcome.to_json();
    }
});
