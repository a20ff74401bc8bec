use std::cmp::Ordering;

/// A key that can be decomposed into digits of an arbitrary base.
///
/// Digits are taken from `magnitude()`, the absolute value of the key, and
/// `is_negative()` selects which half of the bucket table a key lands in when
/// negative handling is enabled.
///
/// Implementations must guarantee that `magnitude()` does not overflow for
/// any representable value (in particular `MIN` of a signed type), and that
/// `key_cmp` agrees with `(is_negative, magnitude)` as described on that
/// method.
pub trait RadixKey {
    /// Absolute value of the key.
    fn magnitude(&self) -> u128;

    #[inline]
    fn is_negative(&self) -> bool {
        false
    }

    /// Natural numeric order of two keys: negative keys first with the
    /// larger magnitude earlier, then non-negative keys by magnitude.
    #[inline]
    fn key_cmp(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (true, true) => other.magnitude().cmp(&self.magnitude()),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.magnitude().cmp(&other.magnitude()),
        }
    }
}
