//! # basesort
//!
//! basesort is a stable radix sort over a configurable numeric base. Keys are split into digits
//! of any base from 2 to 65,536, and sorted either most-significant-digit first (recursive) or
//! least-significant-digit first (iterative).
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.radix_sorted()`, which sorts a copy in base 10 using the MSD
//! strategy. To pick the base or strategy, use the builder:
//!
//! ```ignore
//! use basesort::RadixSort;
//!
//! let data: Vec<i32> = vec![9, -8, 7, -1, 2, -3, 1000, -100, 1234, -5678];
//! let sorted = data
//!     .radix_sort_builder()
//!     .with_base(16)
//!     .with_lsd()
//!     .sort()?;
//! ```
//!
//! The free function `sort` takes the same options positionally. Neither ever modifies its input.
//!
//! ## Negative keys
//!
//! Negative keys are handled by doubling the bucket table of each pass, placing every negative
//! key before every non-negative one. This is on by default and can be turned off with
//! `with_negatives(false)`, in which case any negative key in the input is reported as
//! `SortError::NegativeKey` before anything is allocated.
//!
//! ## Default Implementations
//!
//! `RadixKey` is implemented for the following types out-of-the-box:
//!
//!  * `u8`, `u16`, `u32`, `u64`, `u128`, `usize`
//!  * `i8`, `i16`, `i32`, `i64`, `i128`, `isize`
//!  * `char`, `bool`
//!
//! ### Implementing `RadixKey`
//!
//! To sort custom types, implement `RadixKey` and return the absolute value of the key from
//! `magnitude`, plus `is_negative` if the key can be negative. Payload fields are carried along
//! and keep their relative order for equal keys.
//!
//! ```ignore
//! use basesort::RadixKey;
//!
//! #[derive(Clone, Copy)]
//! struct Reading {
//!     celsius: i16,
//!     sensor: u32,
//! }
//!
//! impl RadixKey for Reading {
//!     fn magnitude(&self) -> u128 {
//!         self.celsius.unsigned_abs() as u128
//!     }
//!
//!     fn is_negative(&self) -> bool {
//!         self.celsius < 0
//!     }
//! }
//! ```
//!
//! ## Verification
//!
//! `is_sorted`, `is_permutation_of` and `is_stable_sort_of` check the output of any sort.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.
//!
//! ### Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.


mod error;
mod radix;
mod radix_key;
mod radix_key_impl;
mod radix_sort_builder;
mod sort_config;
mod sorter;
mod sorts;
mod utils;
mod verify;

#[cfg(test)]
pub(crate) use utils::test_utils;

pub use error::SortError;
pub use radix::{Radix, MAX_BASE};
pub use radix_key::RadixKey;
pub use radix_sort_builder::RadixSortBuilder;
pub use sort_config::{SortConfig, Strategy};
pub use sorter::Sorter;
pub use verify::{is_permutation_of, is_sorted, is_stable_sort_of};

/// Returns a stably sorted copy of `data`.
///
/// Fails if `base` is outside `2..=MAX_BASE`, or if `data` holds a negative key while
/// `handle_negative` is false. Both are checked before any allocation.
pub fn sort<T>(
    data: &[T],
    base: usize,
    strategy: Strategy,
    handle_negative: bool,
) -> Result<Vec<T>, SortError>
where
    T: RadixKey + Copy,
{
    Sorter::new(SortConfig::new(base, strategy, handle_negative))?.sort(data)
}

pub trait RadixSort<T> {
    /// radix_sorted returns a sorted copy using the default `SortConfig`: base 10, MSD, negatives
    /// handled.
    fn radix_sorted(&self) -> Vec<T>;

    /// radix_sort_builder returns a builder for choosing the base, strategy and negative handling
    /// of the sort.
    fn radix_sort_builder(&self) -> RadixSortBuilder<'_, T>;
}

impl<T> RadixSort<T> for [T]
where
    T: RadixKey + Copy,
{
    fn radix_sorted(&self) -> Vec<T> {
        Sorter::default().run_sort(self)
    }

    fn radix_sort_builder(&self) -> RadixSortBuilder<'_, T> {
        RadixSortBuilder::new(self)
    }
}

impl<T> RadixSort<T> for Vec<T>
where
    T: RadixKey + Copy,
{
    fn radix_sorted(&self) -> Vec<T> {
        self.as_slice().radix_sorted()
    }

    fn radix_sort_builder(&self) -> RadixSortBuilder<'_, T> {
        RadixSortBuilder::new(self)
    }
}
