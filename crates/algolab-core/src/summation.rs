//! Summation of a sequence of numbers.

/// Sums `numbers` with plain floating-point addition, starting from 0.
#[must_use]
pub fn summation(numbers: &[f64]) -> f64 {
    numbers.iter().fold(0.0, |sum, number| sum + number)
}
