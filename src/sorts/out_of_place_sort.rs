//! `out_of_place_sort` is the stable counting partition every strategy in this crate is built
//! from. Given per-bucket counts for one positional power, it scatters a source bucket into a
//! destination bucket of the same length so that the destination is ordered by that digit.
//!
//! There are two variants, differing only in scan direction and which offsets they track.
//!
//! ### out_of_place_sort
//!
//! Starts from the exclusive prefix sums (the start offset of each bucket) and walks the source
//! from the left, incrementing a bucket's offset after each placement. Used by the MSD sort, which
//! needs the start offsets again afterwards to split the output into sub-buckets.
//!
//! ### rev_out_of_place_sort
//!
//! Starts from the inclusive prefix sums (the end offset of each bucket) and walks the source from
//! the right, decrementing a bucket's offset before each placement. Used by the LSD sort.
//!
//! Both preserve the relative order of keys that share a digit. Scanning forward from end offsets,
//! or backward from start offsets, would reverse equal keys and is never done.
//!
//! ## Characteristics
//!
//!  * out-of-place
//!  * single-threaded
//!  * stable

use crate::radix::Radix;
use crate::utils::*;
use crate::RadixKey;

#[inline]
pub fn out_of_place_sort<T>(
    src_bucket: &[T],
    dst_bucket: &mut [T],
    counts: &[usize],
    radix: &Radix,
    power: u128,
) where
    T: RadixKey + Copy,
{
    debug_assert_eq!(src_bucket.len(), dst_bucket.len());
    debug_assert_eq!(counts.len(), radix.bucket_count());

    if src_bucket.len() < 2 {
        dst_bucket.copy_from_slice(src_bucket);
        return;
    }

    let mut prefix_sums = get_prefix_sums(counts);

    let chunks = src_bucket.chunks_exact(4);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        let a = radix.bucket(&chunk[0], power);
        let b = radix.bucket(&chunk[1], power);
        let c = radix.bucket(&chunk[2], power);
        let d = radix.bucket(&chunk[3], power);

        dst_bucket[prefix_sums[a]] = chunk[0];
        prefix_sums[a] += 1;
        dst_bucket[prefix_sums[b]] = chunk[1];
        prefix_sums[b] += 1;
        dst_bucket[prefix_sums[c]] = chunk[2];
        prefix_sums[c] += 1;
        dst_bucket[prefix_sums[d]] = chunk[3];
        prefix_sums[d] += 1;
    });

    rem.iter().for_each(|val| {
        let b = radix.bucket(val, power);
        dst_bucket[prefix_sums[b]] = *val;
        prefix_sums[b] += 1;
    });
}

#[inline]
pub fn rev_out_of_place_sort<T>(
    src_bucket: &[T],
    dst_bucket: &mut [T],
    counts: &[usize],
    radix: &Radix,
    power: u128,
) where
    T: RadixKey + Copy,
{
    debug_assert_eq!(src_bucket.len(), dst_bucket.len());
    debug_assert_eq!(counts.len(), radix.bucket_count());

    if src_bucket.len() < 2 {
        dst_bucket.copy_from_slice(src_bucket);
        return;
    }

    let mut ends = get_end_offsets(counts);

    let chunks = src_bucket.rchunks_exact(4);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        let d = radix.bucket(&chunk[3], power);
        let c = radix.bucket(&chunk[2], power);
        let b = radix.bucket(&chunk[1], power);
        let a = radix.bucket(&chunk[0], power);

        ends[d] -= 1;
        dst_bucket[ends[d]] = chunk[3];
        ends[c] -= 1;
        dst_bucket[ends[c]] = chunk[2];
        ends[b] -= 1;
        dst_bucket[ends[b]] = chunk[1];
        ends[a] -= 1;
        dst_bucket[ends[a]] = chunk[0];
    });

    rem.iter().rev().for_each(|val| {
        let b = radix.bucket(val, power);
        ends[b] -= 1;
        dst_bucket[ends[b]] = *val;
    });
}
