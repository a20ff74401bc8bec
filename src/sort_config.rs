use crate::error::SortError;
use crate::radix::Radix;

/// Which digit order a sort processes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Strategy {
    /// Most significant digit first, recursing into each bucket.
    #[default]
    Msd,
    /// Least significant digit first, one pass over the full input per digit.
    Lsd,
}

/// Everything a sort needs to know besides the data itself.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SortConfig {
    pub base: usize,
    pub strategy: Strategy,
    /// Allow negative keys. When disabled, inputs containing one are rejected.
    pub handle_negative: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            base: 10,
            strategy: Strategy::Msd,
            handle_negative: true,
        }
    }
}

impl SortConfig {
    pub fn new(base: usize, strategy: Strategy, handle_negative: bool) -> Self {
        Self {
            base,
            strategy,
            handle_negative,
        }
    }

    /// Checks the configuration and builds the digit model for it.
    pub fn radix(&self) -> Result<Radix, SortError> {
        Ok(Radix::new(self.base)?.with_negatives(self.handle_negative))
    }
}
