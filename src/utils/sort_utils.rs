use crate::radix::Radix;
use crate::RadixKey;

/// Exclusive prefix sums: the offset at which each bucket starts.
#[inline]
pub fn get_prefix_sums(counts: &[usize]) -> Vec<usize> {
    let mut sums = Vec::with_capacity(counts.len());

    let mut running_total = 0;
    for c in counts.iter() {
        sums.push(running_total);
        running_total += c;
    }

    sums
}

/// Inclusive prefix sums: the offset one past the end of each bucket.
#[inline]
pub fn get_end_offsets(counts: &[usize]) -> Vec<usize> {
    let mut ends = Vec::with_capacity(counts.len());

    let mut running_total = 0;
    for c in counts.iter() {
        running_total += c;
        ends.push(running_total);
    }

    ends
}

#[inline]
pub fn get_counts<T>(bucket: &[T], radix: &Radix, power: u128) -> Vec<usize>
where
    T: RadixKey,
{
    let mut counts_1 = vec![0usize; radix.bucket_count()];
    let mut counts_2 = vec![0usize; radix.bucket_count()];

    let chunks = bucket.chunks_exact(2);
    let rem = chunks.remainder();

    chunks.into_iter().for_each(|chunk| {
        let a = radix.bucket(&chunk[0], power);
        let b = radix.bucket(&chunk[1], power);

        counts_1[a] += 1;
        counts_2[b] += 1;
    });

    rem.iter().for_each(|v| {
        counts_1[radix.bucket(v, power)] += 1;
    });

    for (c1, c2) in counts_1.iter_mut().zip(counts_2) {
        *c1 += c2;
    }

    counts_1
}

/// A second working buffer of the same length as `bucket`. Its contents are never read before
/// being overwritten, so copying `bucket` just avoids uninitialized memory.
#[inline]
pub fn get_tmp_bucket<T: Copy>(bucket: &[T]) -> Vec<T> {
    bucket.to_vec()
}

#[inline]
pub fn is_homogenous_bucket(counts: &[usize]) -> bool {
    let mut seen = false;
    for c in counts {
        if *c > 0 {
            if seen {
                return false;
            } else {
                seen = true;
            }
        }
    }

    true
}
