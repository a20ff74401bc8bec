//! `lsd_sort` is an iterative least-significant-digit-first radix sort. Every pass partitions the
//! entire input by one digit, starting at the units digit, and passes continue while the largest
//! magnitude still has a non-zero quotient at the current positional power.
//!
//! Each pass scatters between the input and a single scratch buffer of the same length, swapping
//! their roles. If the last pass leaves the result in the scratch buffer it is copied back once.
//!
//! ## Characteristics
//!
//!  * out-of-place, one scratch buffer
//!  * single-threaded
//!  * stable
//!  * lsb-first

use crate::radix::Radix;
use crate::sorts::out_of_place_sort::rev_out_of_place_sort;
use crate::utils::*;
use crate::RadixKey;

pub fn lsd_sort<T>(bucket: &mut [T], tmp_bucket: &mut [T], radix: &Radix)
where
    T: RadixKey + Copy,
{
    debug_assert_eq!(bucket.len(), tmp_bucket.len());

    if bucket.len() < 2 {
        return;
    }

    let max = Radix::max_magnitude(bucket);
    let base = radix.base() as u128;
    let mut power = 1u128;
    let mut invert = false;

    while max / power > 0 {
        let counts = if invert {
            get_counts(tmp_bucket, radix, power)
        } else {
            get_counts(bucket, radix, power)
        };

        // A stable partition into one bucket changes nothing
        let skip = is_homogenous_bucket(&counts);

        tracing::trace!(power, skip, "lsd pass");

        if !skip {
            if invert {
                rev_out_of_place_sort(tmp_bucket, bucket, &counts, radix, power);
            } else {
                rev_out_of_place_sort(bucket, tmp_bucket, &counts, radix, power);
            }

            invert = !invert;
        }

        power = match power.checked_mul(base) {
            Some(p) => p,
            None => break,
        };
    }

    if invert {
        bucket.copy_from_slice(tmp_bucket);
    }
}

pub fn lsd_sort_adapter<T>(bucket: &mut [T], radix: &Radix)
where
    T: RadixKey + Copy,
{
    if bucket.len() < 2 {
        return;
    }

    let mut tmp_bucket = get_tmp_bucket(bucket);
    lsd_sort(bucket, &mut tmp_bucket, radix);
}
