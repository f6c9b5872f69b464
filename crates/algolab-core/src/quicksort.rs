//! Three-way partitioning quicksort.

use std::ops::Range;

/// Sorts `items` ascending into a new vector.
///
/// Uses the middle element of each range as pivot and splits the range into
/// elements strictly less than, equal to, and strictly greater than it.
/// The outer two parts are sorted from an explicit work stack: the larger
/// one is deferred and the loop continues on the smaller, so at most
/// log2(n) ranges are ever pending and the call stack stays flat however
/// unlucky the pivots are.
///
/// Values that compare unordered with the pivot (`NaN`) stay with the
/// equal part, so the output always has the length of the input.
#[must_use]
pub fn quick_sort<T: PartialOrd + Copy>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    let mut pending: Vec<Range<usize>> = vec![0..sorted.len()];

    while let Some(mut range) = pending.pop() {
        while range.len() > 1 {
            let (lt, gt) = partition(&mut sorted[range.clone()]);
            let less = range.start..range.start + lt;
            let greater = range.start + gt..range.end;
            if less.len() < greater.len() {
                pending.push(greater);
                range = less;
            } else {
                pending.push(less);
                range = greater;
            }
        }
    }
    sorted
}

/// Partitions `slice` in place around its middle element.
///
/// Returns `(lt, gt)` such that `slice[..lt]` is less than the pivot,
/// `slice[gt..]` is greater, and everything between is neither.
fn partition<T: PartialOrd + Copy>(slice: &mut [T]) -> (usize, usize) {
    let pivot = slice[slice.len() / 2];
    let (mut lt, mut i, mut gt) = (0, 0, slice.len());
    while i < gt {
        if slice[i] < pivot {
            slice.swap(lt, i);
            lt += 1;
            i += 1;
        } else if slice[i] > pivot {
            gt -= 1;
            slice.swap(i, gt);
        } else {
            i += 1;
        }
    }
    (lt, gt)
}
