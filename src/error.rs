use thiserror::Error;

/// Errors returned when a sort is configured or invoked incorrectly.
///
/// Every variant is detected before any working buffer is allocated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The base is below 2 or above `MAX_BASE`.
    #[error("invalid base {base}: must be between 2 and {max}", max = crate::radix::MAX_BASE)]
    InvalidBase { base: usize },

    /// A negative key was found while negative handling is disabled.
    #[error("negative key at index {index} while negative handling is disabled")]
    NegativeKey { index: usize },
}
