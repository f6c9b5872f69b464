//! Count of integers between the first element and an upper bound.

/// Counts the integral elements of `data` lying in `[data[0], n]`.
///
/// The lower bound is the first element of `data`, not its minimum. An
/// empty slice counts as 0, and a first element above `n` leaves an empty
/// range.
///
/// # Example
/// ```
/// use algolab_core::count::count_in_range;
/// assert_eq!(count_in_range(&[5.0, 10.0, 15.0, 20.0, 25.0], 20.0), 4);
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn count_in_range(data: &[f64], n: f64) -> usize {
    let Some(&first) = data.first() else {
        return 0;
    };
    data.iter()
        .filter(|&&value| value.fract() == 0.0 && value >= first && value <= n)
        .count()
}
