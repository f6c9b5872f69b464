//! Primality test by trial division.

/// Returns `true` iff `n` is prime.
///
/// Rules out 2 and 3 as factors first, then tries the 6k±1 candidates
/// `i` and `i + 2` for `i = 5, 11, 17, ...` up to the square root of `n`.
///
/// # Example
/// ```
/// assert!(algolab_core::prime::is_prime(97));
/// assert!(!algolab_core::prime::is_prime(1));
/// ```
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i: u64 = 5;
    // i <= n / i is i * i <= n without the overflow near u64::MAX.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(is_prime(5));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(49));
    }

    #[test]
    fn first_primes() {
        let primes: Vec<u64> = (0..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn squares_of_primes_are_composite() {
        for p in [5u64, 7, 11, 13, 101, 7919] {
            assert!(!is_prime(p * p), "{} should be composite", p * p);
        }
    }

    #[test]
    fn large_values() {
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(1_000_000_007 * 3));
        // Largest prime below 2^64.
        assert!(is_prime(18_446_744_073_709_551_557));
        assert!(!is_prime(u64::MAX));
    }
}
