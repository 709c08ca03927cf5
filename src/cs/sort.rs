//! In-place quicksort with three-way partitioning.
//!
//! Both variants share one iterative partitioning engine and differ only in
//! how a pivot is picked: [`deterministic_quicksort`] always takes the first
//! element of the range, [`randomized_quicksort`] picks one uniformly at
//! random.

pub mod quicksort;
pub mod randomized_quicksort;
mod three_way;

pub use quicksort::deterministic_quicksort;
pub use randomized_quicksort::{randomized_quicksort, randomized_quicksort_with_rng};

/// Returns `true` if `arr` is in non-decreasing order.
///
/// ```
/// use algos_partition::sort::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2, 5]));
/// assert!(!is_sorted(&[2, 1]));
/// assert!(is_sorted::<u8>(&[]));
/// ```
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}
