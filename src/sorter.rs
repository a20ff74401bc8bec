use crate::error::SortError;
use crate::radix::Radix;
use crate::sort_config::{SortConfig, Strategy};
use crate::sorts::{lsd_sort_adapter, msd_sort_adapter};
use crate::RadixKey;

/// A validated sort configuration that can be applied to any number of inputs.
///
/// Holds no buffers of its own; each call to `sort` allocates its working buffers and drops them
/// before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sorter {
    radix: Radix,
    strategy: Strategy,
}

impl Sorter {
    pub fn new(config: SortConfig) -> Result<Self, SortError> {
        Ok(Self {
            radix: config.radix()?,
            strategy: config.strategy,
        })
    }

    #[inline]
    pub fn radix(&self) -> &Radix {
        &self.radix
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Returns a sorted copy of `data`. Fails if `data` holds a negative key and this sorter does
    /// not handle negatives.
    pub fn sort<T>(&self, data: &[T]) -> Result<Vec<T>, SortError>
    where
        T: RadixKey + Copy,
    {
        if !self.radix.handles_negatives() {
            if let Some(index) = data.iter().position(|v| v.is_negative()) {
                return Err(SortError::NegativeKey { index });
            }
        }

        Ok(self.run_sort(data))
    }

    pub(crate) fn run_sort<T>(&self, data: &[T]) -> Vec<T>
    where
        T: RadixKey + Copy,
    {
        tracing::debug!(
            len = data.len(),
            base = self.radix.base(),
            strategy = ?self.strategy,
            negatives = self.radix.handles_negatives(),
            "radix sort"
        );

        let mut bucket = data.to_vec();

        match self.strategy {
            Strategy::Msd => msd_sort_adapter(&mut bucket, &self.radix),
            Strategy::Lsd => lsd_sort_adapter(&mut bucket, &self.radix),
        }

        bucket
    }
}
