use rand::Rng;

use super::three_way::sort_by_pivot;

/// Sorts `arr` in place using quicksort with a uniformly random pivot, drawn
/// from the thread-local generator.
///
/// Random pivots make sorted, reverse sorted and duplicate-heavy inputs behave
/// like random ones, giving expected `O(n log n)` time. The sort is not stable.
///
/// # Examples
/// ```
/// use algos_partition::sort::randomized_quicksort;
///
/// let mut data = vec![3, 1, 2, 5, 4, 3, 3];
/// randomized_quicksort(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 3, 3, 4, 5]);
/// ```
pub fn randomized_quicksort<T: Ord>(arr: &mut [T]) {
    randomized_quicksort_with_rng(arr, &mut rand::thread_rng());
}

/// Like [`randomized_quicksort`], but draws pivots from `rng`.
///
/// Two calls starting from the same generator state on the same input perform
/// the same swaps, so a seeded generator makes the run reproducible.
///
/// ```
/// use algos_partition::sort::randomized_quicksort_with_rng;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut data = vec![9, 4, 7, 1];
/// randomized_quicksort_with_rng(&mut data, &mut StdRng::seed_from_u64(42));
/// assert_eq!(data, vec![1, 4, 7, 9]);
/// ```
pub fn randomized_quicksort_with_rng<T, R>(arr: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    sort_by_pivot(arr, |range| rng.gen_range(range));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::sort::is_sorted;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_randomized_quicksort() {
        let mut arr = vec![3, 6, 2, 7, 1, 8, 5, 4];
        randomized_quicksort(&mut arr);
        assert_eq!(arr, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let mut arr = vec![3, 1, 2, 5, 4, 3, 3];
        randomized_quicksort(&mut arr);
        assert_eq!(arr, vec![1, 2, 3, 3, 3, 4, 5]);
    }

    #[test]
    fn test_trivial_inputs() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut empty: Vec<u8> = vec![];
        randomized_quicksort_with_rng(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec!['z'];
        randomized_quicksort_with_rng(&mut single, &mut rng);
        assert_eq!(single, vec!['z']);

        let mut equal = vec![-1i64; 257];
        randomized_quicksort_with_rng(&mut equal, &mut rng);
        assert_eq!(equal, vec![-1i64; 257]);
    }

    #[test]
    fn test_adversarial_distributions() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 10_000;

        let mut sorted: Vec<usize> = (0..n).collect();
        randomized_quicksort_with_rng(&mut sorted, &mut rng);
        assert_eq!(sorted, (0..n).collect::<Vec<_>>());

        let mut reversed: Vec<usize> = (1..=n).rev().collect();
        randomized_quicksort_with_rng(&mut reversed, &mut rng);
        assert_eq!(reversed, (1..=n).collect::<Vec<_>>());

        let input: Vec<usize> = (0..n).map(|_| rng.gen_range(0..=50)).collect();
        let mut expected = input.clone();
        expected.sort_unstable();
        let mut repeated = input;
        randomized_quicksort_with_rng(&mut repeated, &mut rng);
        assert_eq!(repeated, expected);
    }

    #[test]
    fn test_random_inputs_are_permutations() {
        let mut rng = StdRng::seed_from_u64(1);
        for len in [2usize, 3, 10, 100, 1000] {
            let input: Vec<i32> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
            let mut expected = input.clone();
            expected.sort();

            let mut arr = input;
            randomized_quicksort_with_rng(&mut arr, &mut rng);
            assert!(is_sorted(&arr));
            assert_eq!(arr, expected, "length {}", len);
        }
    }

    #[test]
    fn test_same_seed_same_generator_state() {
        let input: Vec<u64> = (0..500).map(|i| (i * 7919) % 211).collect();

        let mut a = input.clone();
        let mut rng_a = StdRng::seed_from_u64(99);
        randomized_quicksort_with_rng(&mut a, &mut rng_a);

        let mut b = input;
        let mut rng_b = StdRng::seed_from_u64(99);
        randomized_quicksort_with_rng(&mut b, &mut rng_b);

        assert_eq!(a, b);
        // Both runs consumed the same number of draws.
        assert_eq!(rng_a.gen::<u64>(), rng_b.gen::<u64>());
    }

    #[test]
    fn test_unsized_rng_handle() {
        let mut rng = StdRng::seed_from_u64(3);
        let dyn_rng: &mut dyn rand::RngCore = &mut rng;
        let mut arr = vec![4, 2, 9, 2];
        randomized_quicksort_with_rng(&mut arr, dyn_rng);
        assert_eq!(arr, vec![2, 2, 4, 9]);
    }
}
