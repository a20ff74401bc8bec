//! `msd_sort` is a recursive most-significant-digit-first radix sort over two buffers.
//!
//! Each level partitions the current source into the current destination by one digit, then
//! splits both buffers into the same per-bucket chunks and recurses into each chunk with the roles
//! swapped and the positional power divided by the base. The chunks handed to sibling calls are
//! disjoint, so no state is shared between them.
//!
//! The "home" buffer is the one the caller reads the result from. Each scatter moves the data to
//! the other buffer, so `src_is_home` flips at every partitioned level. When a call bottoms out
//! (fewer than two keys, or no digits left) while its data sits in the non-home buffer, it copies
//! that chunk home once. A level where every key falls in the same bucket is skipped without a
//! scatter, and so without flipping.
//!
//! A sub-range shorter than an eighth of the bucket table is finished with a stable comparison
//! sort instead of another level. Counting it would cost a full table of `bucket_count()` slots
//! for only a handful of keys, which at large bases dominates the whole sort.
//!
//! ## Characteristics
//!
//!  * out-of-place, two buffers
//!  * single-threaded
//!  * stable
//!  * msb-first

use crate::radix::Radix;
use crate::sorts::comparative_sort::comparative_sort;
use crate::sorts::out_of_place_sort::out_of_place_sort;
use crate::utils::*;
use crate::RadixKey;
use arbitrary_chunks::ArbitraryChunks;

pub fn msd_sort<T>(
    src_bucket: &mut [T],
    dst_bucket: &mut [T],
    radix: &Radix,
    power: u128,
    src_is_home: bool,
) where
    T: RadixKey + Copy,
{
    debug_assert_eq!(src_bucket.len(), dst_bucket.len());

    if src_bucket.len() < 2 || power == 0 {
        if !src_is_home {
            dst_bucket.copy_from_slice(src_bucket);
        }

        return;
    }

    if src_bucket.len() < radix.bucket_count() / 8 {
        comparative_sort(src_bucket);

        if !src_is_home {
            dst_bucket.copy_from_slice(src_bucket);
        }

        return;
    }

    let next_power = power / radix.base() as u128;
    let counts = get_counts(src_bucket, radix, power);

    if is_homogenous_bucket(&counts) {
        msd_sort(src_bucket, dst_bucket, radix, next_power, src_is_home);
        return;
    }

    out_of_place_sort(src_bucket, dst_bucket, &counts, radix, power);

    dst_bucket
        .arbitrary_chunks_mut(&counts)
        .zip(src_bucket.arbitrary_chunks_mut(&counts))
        .for_each(|(next_src, next_dst)| {
            msd_sort(next_src, next_dst, radix, next_power, !src_is_home)
        });
}

/// Sorts `bucket` in place using a single temporary buffer of the same length.
pub fn msd_sort_adapter<T>(bucket: &mut [T], radix: &Radix)
where
    T: RadixKey + Copy,
{
    if bucket.len() < 2 {
        return;
    }

    let power = radix.top_power(bucket);
    let mut tmp_bucket = get_tmp_bucket(bucket);

    tracing::trace!(len = bucket.len(), power, "msd top level");

    msd_sort(bucket, &mut tmp_bucket, radix, power, true);
}
