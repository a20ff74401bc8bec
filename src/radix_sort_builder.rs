use crate::error::SortError;
use crate::sort_config::{SortConfig, Strategy};
use crate::sorter::Sorter;
use crate::RadixKey;

pub struct RadixSortBuilder<'a, T> {
    data: &'a [T],
    config: SortConfig,
}

impl<'a, T> RadixSortBuilder<'a, T>
where
    T: RadixKey + Copy,
{
    pub(crate) fn new(data: &'a [T]) -> Self {
        Self {
            data,
            config: SortConfig::default(),
        }
    }

    pub fn with_base(mut self, base: usize) -> Self {
        self.config.base = base;

        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;

        self
    }

    pub fn with_msd(self) -> Self {
        self.with_strategy(Strategy::Msd)
    }

    pub fn with_lsd(self) -> Self {
        self.with_strategy(Strategy::Lsd)
    }

    pub fn with_negatives(mut self, handle_negative: bool) -> Self {
        self.config.handle_negative = handle_negative;

        self
    }

    pub fn with_config(mut self, config: SortConfig) -> Self {
        self.config = config;

        self
    }

    /// Validates the configuration against the data, then returns a sorted copy of it.
    pub fn sort(self) -> Result<Vec<T>, SortError> {
        Sorter::new(self.config)?.sort(self.data)
    }
}
