mod array;
mod error;
mod fixed_store;
mod mode;

pub use array::{DynamicArray, Iter};
pub use error::{ArrayError, Result};
pub use fixed_store::FixedStore;
pub use mode::find_mode;

/// Capacity management knobs for [`DynamicArray`].
///
/// A removal shrinks the store when it holds more than `min_shrink_capacity`
/// slots and fewer than `capacity / shrink_divisor` elements. The new capacity
/// is `max(min_shrink_capacity, growth_factor * len)`.
#[derive(Clone, Copy, Debug)]
pub struct CapacityPolicy {
    pub initial_capacity: usize,
    pub growth_factor: usize,
    pub shrink_divisor: usize,
    pub min_shrink_capacity: usize,
}

pub const CAPACITY_POLICY: CapacityPolicy = CapacityPolicy {
    initial_capacity: 4,
    growth_factor: 2,
    shrink_divisor: 4,
    min_shrink_capacity: 10,
};

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use crate::DynamicArray;

    const MAX_LEN: usize = 200;

    proptest!(
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn slice_matches_subslice(
            values in proptest::collection::vec(-100i64..100, 1..MAX_LEN),
            start_frac in 0.0f64..1.0,
            len_frac in 0.0f64..=1.0,
        ) {
            let array = DynamicArray::from(values.clone());
            let start = ((values.len() as f64) * start_frac) as usize;
            let length = (((values.len() - start) as f64) * len_frac) as usize;
            let sliced = array.slice(start, length).unwrap();
            prop_assert_eq!(sliced.iter().copied().collect::<Vec<_>>(), values[start..start + length].to_vec());
            prop_assert!(array.slice(start, values.len() - start + 1).is_err());
        }

        #[test]
        fn merge_concatenates(
            left in proptest::collection::vec(any::<i32>(), 0..MAX_LEN),
            right in proptest::collection::vec(any::<i32>(), 0..MAX_LEN),
        ) {
            let mut array = DynamicArray::from(left.clone());
            array.merge(&DynamicArray::from(right.clone()));
            let expected: Vec<i32> = left.into_iter().chain(right).collect();
            prop_assert_eq!(array.iter().copied().collect::<Vec<_>>(), expected);
            prop_assert!(array.length() <= array.capacity());
        }

        #[test]
        fn map_filter_reduce_agree_with_iterators(
            values in proptest::collection::vec(-1000i64..1000, 0..MAX_LEN),
            init in proptest::option::of(-1000i64..1000),
        ) {
            let array = DynamicArray::from(values.clone());

            let mapped: Vec<i64> = array.map(|x| x * 3 - 1).iter().copied().collect();
            prop_assert_eq!(mapped, values.iter().map(|x| x * 3 - 1).collect::<Vec<_>>());

            let kept: Vec<i64> = array.filter(|x| *x > 0).iter().copied().collect();
            prop_assert_eq!(kept, values.iter().copied().filter(|x| *x > 0).collect::<Vec<_>>());

            let expected = match init {
                Some(init) => Some(values.iter().fold(init, |acc, x| acc.wrapping_sub(*x))),
                None => values.iter().copied().reduce(|acc, x| acc.wrapping_sub(x)),
            };
            let expected = if values.is_empty() { init } else { expected };
            prop_assert_eq!(array.reduce(|acc, x| acc.wrapping_sub(*x), init), expected);
        }

        #[test]
        fn removals_respect_shrink_bounds(len in 1usize..MAX_LEN, seed in any::<u64>()) {
            let mut array: DynamicArray<usize> = (0..len).collect();
            let mut index_source = seed;
            while !array.is_empty() {
                let before = array.capacity();
                let len_before = array.length();
                index_source = index_source.wrapping_mul(6364136223846793005).wrapping_add(1);
                let index = (index_source >> 33) as usize % len_before;
                array.remove_at_index(index).unwrap();

                let shrank = before > 10 && before > 4 * len_before;
                if shrank {
                    prop_assert_eq!(array.capacity(), (2 * len_before).max(10));
                } else {
                    prop_assert_eq!(array.capacity(), before);
                }
                prop_assert!(array.length() <= array.capacity());
            }
        }
    );
}
