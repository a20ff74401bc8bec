//! `Radix` is the digit model shared by every sort in this crate. It turns a key into the bucket
//! index used at a given positional power of the base.
//!
//! ## Digits
//!
//! The digit of a key at positional power `p` is `(|key| / p) % base`. Digits are always taken
//! from the magnitude of a key (see `RadixKey::magnitude`), which is a `u128`. Every supported
//! key type fits in a `u128` magnitude, so neither digit extraction nor the top positional power
//! of an input can overflow.
//!
//! ## Negative keys
//!
//! When negative handling is enabled, the bucket table doubles to `2 * base` and keys are mapped
//! as follows:
//!
//!  * non-negative: `base + digit`, in `[base, 2 * base)`
//!  * negative: `base - 1 - digit`, in `[0, base)`
//!
//! All negative buckets come before all non-negative buckets, and within the negative half a
//! larger digit lands in an earlier bucket, so a larger magnitude sorts first.

use crate::error::SortError;
use crate::RadixKey;

/// Largest base accepted. Bucket tables are allocated per partition step, so this bounds their
/// size.
pub const MAX_BASE: usize = 65_536;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix {
    base: usize,
    negatives: bool,
}

impl Default for Radix {
    /// Base 10 with negatives handled, the same as `Radix::new(10)?.with_negatives(true)`. This
    /// matches `SortConfig::default()`, unlike `Radix::new`, which leaves negatives off.
    fn default() -> Self {
        Self {
            base: 10,
            negatives: true,
        }
    }
}

impl Radix {
    /// A digit model for `base` with negative handling disabled. Enable it with
    /// `with_negatives(true)`.
    pub fn new(base: usize) -> Result<Self, SortError> {
        if !(2..=MAX_BASE).contains(&base) {
            return Err(SortError::InvalidBase { base });
        }

        Ok(Self {
            base,
            negatives: false,
        })
    }

    pub fn with_negatives(mut self, negatives: bool) -> Self {
        self.negatives = negatives;

        self
    }

    #[inline]
    pub fn base(&self) -> usize {
        self.base
    }

    #[inline]
    pub fn handles_negatives(&self) -> bool {
        self.negatives
    }

    /// Number of buckets in one partition step.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        if self.negatives {
            self.base * 2
        } else {
            self.base
        }
    }

    /// Number of base digits needed to write `magnitude`. Anything below the base, including
    /// zero, has one digit.
    #[inline]
    pub fn digit_count(&self, mut magnitude: u128) -> u32 {
        let base = self.base as u128;
        let mut digits = 1;

        while magnitude >= base {
            magnitude /= base;
            digits += 1;
        }

        digits
    }

    #[inline]
    pub fn key_digit_count<T: RadixKey>(&self, key: &T) -> u32 {
        self.digit_count(key.magnitude())
    }

    /// `base^n`, or `None` if it does not fit in a `u128`.
    pub fn power(&self, n: u32) -> Option<u128> {
        let base = self.base as u128;
        let mut value = 1u128;

        for _ in 0..n {
            value = value.checked_mul(base)?;
        }

        Some(value)
    }

    /// Digit of `magnitude` at positional power `power`.
    ///
    /// # Panics
    ///
    /// Panics if `power` is zero.
    #[inline]
    pub fn digit(&self, magnitude: u128, power: u128) -> usize {
        debug_assert!(power > 0, "positional power must be non-zero");

        ((magnitude / power) % self.base as u128) as usize
    }

    /// Bucket index of `key` at `power`, in `[0, bucket_count())`.
    ///
    /// # Panics
    ///
    /// Panics if `power` is zero.
    #[inline]
    pub fn bucket<T: RadixKey>(&self, key: &T, power: u128) -> usize {
        let digit = self.digit(key.magnitude(), power);

        if !self.negatives {
            digit
        } else if key.is_negative() {
            self.base - 1 - digit
        } else {
            self.base + digit
        }
    }

    /// Largest magnitude in `bucket`, or 0 if it is empty.
    #[inline]
    pub fn max_magnitude<T: RadixKey>(bucket: &[T]) -> u128 {
        bucket.iter().map(|v| v.magnitude()).max().unwrap_or(0)
    }

    /// Digit count of the largest magnitude in `bucket`. This is the depth of an MSD sort and the
    /// number of passes of an LSD sort.
    #[inline]
    pub fn max_digit_count<T: RadixKey>(&self, bucket: &[T]) -> u32 {
        self.digit_count(Self::max_magnitude(bucket))
    }

    /// Positional power of the most significant digit of `bucket`.
    #[inline]
    pub fn top_power<T: RadixKey>(&self, bucket: &[T]) -> u128 {
        let max = Self::max_magnitude(bucket);
        let base = self.base as u128;
        let mut power = 1u128;

        // power * base <= max cannot overflow, as max fits in a u128
        while max / power >= base {
            power *= base;
        }

        power
    }
}
