//! Leading terms of the Fibonacci sequence.

/// Returns the first `n` Fibonacci numbers, starting `0, 1`.
///
/// Terms are `f64` sums of the two previous terms, so every term up to
/// F(78) is exact. Later terms carry the usual double rounding, and terms
/// past F(1476) overflow to infinity.
///
/// # Example
/// ```
/// assert_eq!(
///     algolab_core::fibonacci::fibonacci(5),
///     vec![0.0, 1.0, 1.0, 2.0, 3.0]
/// );
/// ```
#[must_use]
pub fn fibonacci(n: usize) -> Vec<f64> {
    let mut seq = Vec::with_capacity(n);
    for i in 0..n {
        let term = match i {
            0 => 0.0,
            1 => 1.0,
            _ => seq[i - 1] + seq[i - 2],
        };
        seq.push(term);
    }
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_terms() {
        assert!(fibonacci(0).is_empty());
    }

    #[test]
    fn one_term() {
        assert_eq!(fibonacci(1), vec![0.0]);
    }

    #[test]
    fn two_terms() {
        assert_eq!(fibonacci(2), vec![0.0, 1.0]);
    }

    #[test]
    fn ten_terms() {
        assert_eq!(
            fibonacci(10),
            vec![0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0]
        );
    }

    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn exact_through_f78() {
        let seq = fibonacci(79);
        let (mut a, mut b) = (0u64, 1u64);
        for &term in &seq {
            assert_eq!(term, a as f64);
            (a, b) = (b, a + b);
        }
        assert_eq!(seq[78], 8_944_394_323_791_464.0);
    }

    #[test]
    fn returns_every_requested_term() {
        let seq = fibonacci(100);
        assert_eq!(seq.len(), 100);
        assert!(seq[99] > 2.1e20 && seq[99] < 2.2e20);
    }

    #[test]
    fn overflows_to_infinity() {
        let seq = fibonacci(1_500);
        assert!(seq[1476].is_finite());
        assert!(seq[1477].is_infinite());
        assert_eq!(seq.len(), 1_500);
    }
}
