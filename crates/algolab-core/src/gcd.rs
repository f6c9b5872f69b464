//! Greatest common divisor.

/// Euclidean algorithm: replace `(a, b)` with `(b, a % b)` until `b` is 0.
#[must_use]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}
