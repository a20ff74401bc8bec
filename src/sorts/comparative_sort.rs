use crate::RadixKey;

/// Stable comparison sort by full key order. Used for sub-ranges too small to be worth a bucket
/// table.
pub fn comparative_sort<T>(bucket: &mut [T])
where
    T: RadixKey + Copy,
{
    bucket.sort_by(|a, b| a.key_cmp(b));
}
