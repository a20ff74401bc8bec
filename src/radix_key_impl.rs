use crate::RadixKey;

macro_rules! impl_unsigned { ($($t:ty)*) => ($(
    impl RadixKey for $t {
        #[inline]
        fn magnitude(&self) -> u128 {
            *self as u128
        }
    }
)*) }

// `unsigned_abs` never negates the value itself, so `MIN` is safe.
macro_rules! impl_signed { ($($t:ty)*) => ($(
    impl RadixKey for $t {
        #[inline]
        fn magnitude(&self) -> u128 {
            self.unsigned_abs() as u128
        }

        #[inline]
        fn is_negative(&self) -> bool {
            *self < 0
        }
    }
)*) }

impl_unsigned! { u8 u16 u32 u64 u128 usize }
impl_signed! { i8 i16 i32 i64 i128 isize }

impl RadixKey for char {
    #[inline]
    fn magnitude(&self) -> u128 {
        *self as u128
    }
}

impl RadixKey for bool {
    #[inline]
    fn magnitude(&self) -> u128 {
        *self as u128
    }
}
