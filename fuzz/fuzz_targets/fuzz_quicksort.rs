#![no_main]

use libfuzzer_sys::fuzz_target;

use algolab_core::quicksort::quick_sort;

fuzz_target!(|data: &[u8]| {
    let values: Vec<i32> = data
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let sorted = quick_sort(&values);
    let mut expected = values.clone();
    expected.sort_unstable();
    assert_eq!(sorted, expected);
});
