//! Property-based tests for the six algorithms.

use proptest::prelude::*;

use algolab_core::count::count_in_range;
use algolab_core::fibonacci::fibonacci;
use algolab_core::gcd::gcd;
use algolab_core::prime::is_prime;
use algolab_core::quicksort::quick_sort;
use algolab_core::summation::summation;

/// Sieve of Eratosthenes up to and including `limit`.
fn sieve(limit: usize) -> Vec<bool> {
    let mut is_prime = vec![true; limit + 1];
    is_prime[0] = false;
    if limit >= 1 {
        is_prime[1] = false;
    }
    let mut i = 2;
    while i * i <= limit {
        if is_prime[i] {
            let mut j = i * i;
            while j <= limit {
                is_prime[j] = false;
                j += i;
            }
        }
        i += 1;
    }
    is_prime
}

#[test]
fn is_prime_matches_sieve_up_to_one_million() {
    let expected = sieve(1_000_000);
    for (n, &want) in expected.iter().enumerate() {
        assert_eq!(is_prime(n as u64), want, "is_prime({n})");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Summation does not depend on the order of the inputs.
    #[test]
    fn summation_order_independent(values in prop::collection::vec(-1_000_000i64..1_000_000, 0..64)) {
        let forward: Vec<f64> = values.iter().map(|&v| v as f64).collect();
        let mut backward = forward.clone();
        backward.reverse();
        prop_assert_eq!(summation(&forward), summation(&backward));
    }

    /// Quicksort output is sorted and a permutation of the input.
    #[test]
    fn quick_sort_sorts(values in prop::collection::vec(-1_000i32..1_000, 0..200)) {
        let sorted = quick_sort(&values);
        prop_assert_eq!(sorted.len(), values.len());
        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(sorted, expected);
    }

    /// Sorting an already sorted sequence returns it unchanged.
    #[test]
    fn quick_sort_idempotent(values in prop::collection::vec(-1e6f64..1e6, 0..100)) {
        let once = quick_sort(&values);
        let twice = quick_sort(&once);
        prop_assert_eq!(once, twice);
    }

    /// gcd is symmetric and divides both arguments.
    #[test]
    fn gcd_symmetric_and_divides(a in 1u64..1_000_000_000, b in 1u64..1_000_000_000) {
        let g = gcd(a, b);
        prop_assert_eq!(g, gcd(b, a));
        prop_assert_eq!(a % g, 0);
        prop_assert_eq!(b % g, 0);
    }

    /// fibonacci(n) has n terms and each term is the sum of the previous two.
    #[test]
    fn fibonacci_shape(n in 0usize..=2_000) {
        let seq = fibonacci(n);
        prop_assert_eq!(seq.len(), n);
        for w in seq.windows(3) {
            prop_assert_eq!(w[0] + w[1], w[2]);
        }
    }

    /// count_in_range agrees with the literal rule over the first element.
    #[test]
    fn count_in_range_literal_rule(
        data in prop::collection::vec(-50i64..50, 1..40),
        n in -60i64..60,
    ) {
        let as_f64: Vec<f64> = data.iter().map(|&v| v as f64).collect();
        let first = data[0];
        let expected = data.iter().filter(|&&v| v >= first && v <= n).count();
        prop_assert_eq!(count_in_range(&as_f64, n as f64), expected);
    }
}
