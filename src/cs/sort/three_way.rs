//! # Iterative Three-Way Quicksort
//!
//! The partitioning engine shared by [`deterministic_quicksort`] and
//! [`randomized_quicksort`]. Each variant only decides *which* index becomes the
//! pivot; everything else lives here.
//!
//! A range is split in a single left-to-right pass into three bands:
//!
//! ```text
//!   lo        lt          gt        hi
//!   | < pivot | == pivot  | > pivot |
//! ```
//!
//! The `== pivot` band is final and never revisited, so inputs with many
//! duplicate keys sort in linear time instead of quadratic.
//!
//! Instead of recursing, the larger of the two remaining bands is pushed onto an
//! explicit stack and the loop continues on the smaller one. The stack therefore
//! never holds more than `O(log n)` ranges, whatever the input looks like.
//!
//! [`deterministic_quicksort`]: super::quicksort::deterministic_quicksort
//! [`randomized_quicksort`]: super::randomized_quicksort::randomized_quicksort

use std::cmp::Ordering;
use std::ops::Range;

/// Sorts `arr` in place, asking `choose_pivot` for the pivot index of every
/// range that needs partitioning.
///
/// `choose_pivot` receives a half-open range of length at least 2 and must
/// return an index inside it.
///
/// Returns the largest number of ranges the work stack held at once.
pub(crate) fn sort_by_pivot<T, F>(arr: &mut [T], mut choose_pivot: F) -> usize
where
    T: Ord,
    F: FnMut(Range<usize>) -> usize,
{
    if arr.len() < 2 {
        return 0;
    }

    let mut stack: Vec<Range<usize>> = vec![0..arr.len()];
    let mut peak = stack.len();
    while let Some(mut range) = stack.pop() {
        while range.len() > 1 {
            let pivot = choose_pivot(range.clone());
            debug_assert!(range.contains(&pivot), "pivot {} outside {:?}", pivot, range);
            arr.swap(range.start, pivot);

            let (lt, gt) = partition(arr, range.clone());
            let left = range.start..lt;
            let right = gt..range.end;

            // Keep working on the smaller side, defer the larger one.
            let (smaller, larger) = if left.len() < right.len() {
                (left, right)
            } else {
                (right, left)
            };
            if larger.len() > 1 {
                stack.push(larger);
                peak = peak.max(stack.len());
            }
            range = smaller;
        }
    }
    peak
}

/// Three-way partition of `arr[range]` around the element at `range.start`.
///
/// Returns `(lt, gt)` such that `arr[range.start..lt] < pivot`,
/// `arr[lt..gt] == pivot` and `arr[gt..range.end] > pivot`.
///
/// The pivot is never copied out. `arr[lt]` always holds an element equal to it:
/// `arr[lt..i]` is the equal band seen so far and is never empty.
pub(crate) fn partition<T: Ord>(arr: &mut [T], range: Range<usize>) -> (usize, usize) {
    let mut lt = range.start;
    let mut i = range.start + 1;
    let mut gt = range.end;

    while i < gt {
        match arr[i].cmp(&arr[lt]) {
            Ordering::Less => {
                arr.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                arr.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
