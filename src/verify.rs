//! Stateless checks over the output of a sort, for use by test harnesses.
//!
//! None of these are called by the sorts themselves.

use crate::RadixKey;
use std::cmp::Ordering;

/// Whether `data` is in non-decreasing key order. Stops at the first inversion.
pub fn is_sorted<T: RadixKey>(data: &[T]) -> bool {
    data.windows(2)
        .all(|w| w[0].key_cmp(&w[1]) != Ordering::Greater)
}

/// Whether `sorted` holds exactly the keys of `original`, ignoring order.
pub fn is_permutation_of<T>(original: &[T], sorted: &[T]) -> bool
where
    T: RadixKey + Copy,
{
    if original.len() != sorted.len() {
        return false;
    }

    let mut a = original.to_vec();
    let mut b = sorted.to_vec();
    a.sort_unstable_by(|x, y| x.key_cmp(y));
    b.sort_unstable_by(|x, y| x.key_cmp(y));

    a.iter()
        .zip(b.iter())
        .all(|(x, y)| x.key_cmp(y) == Ordering::Equal)
}

/// Whether `sorted` is `original` in key order with equal keys left in their original relative
/// order. Keys must be distinguishable through `PartialEq` (e.g. carry a payload) for the
/// stability half of this check to mean anything.
pub fn is_stable_sort_of<T>(original: &[T], sorted: &[T]) -> bool
where
    T: RadixKey + Copy + PartialEq,
{
    if original.len() != sorted.len() {
        return false;
    }

    // The standard library sort is stable
    let mut expected = original.to_vec();
    expected.sort_by(|a, b| a.key_cmp(b));

    expected == sorted
}
