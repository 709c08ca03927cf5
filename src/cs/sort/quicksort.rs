use super::three_way::sort_by_pivot;

/// Sorts `arr` in place using quicksort with the first element of each range
/// as the pivot.
///
/// Partitioning is three-way, so runs of equal keys are settled in one pass,
/// and the work list is an explicit stack bounded to `O(log n)` entries.
/// Already sorted or reverse sorted input still costs `O(n^2)` comparisons;
/// use [`randomized_quicksort`](super::randomized_quicksort::randomized_quicksort)
/// when the input may be adversarial.
///
/// The sort is not stable.
///
/// # Examples
/// ```
/// use algos_partition::sort::deterministic_quicksort;
///
/// let mut data = vec![3, 1, 2, 5, 4, 3, 3];
/// deterministic_quicksort(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 3, 3, 4, 5]);
/// ```
pub fn deterministic_quicksort<T: Ord>(arr: &mut [T]) {
    sort_by_pivot(arr, |range| range.start);
}
