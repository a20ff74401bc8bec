use crate::radix::Radix;
use crate::RadixKey;
use nanorand::{Rng, WyRand};
use std::fmt::Debug;
use std::ops::{Shl, Shr};

/// Bases every strategy is exercised against.
pub const TEST_BASES: [usize; 9] = [2, 3, 4, 5, 10, 16, 20, 100, 256];

pub trait NumericTest:
    RadixKey + Sized + Copy + Debug + PartialEq + Ord + Shl<u32, Output = Self> + Shr<u32, Output = Self>
{
    /// Truncating conversion from random bits.
    fn from_bits(bits: u128) -> Self;
}

macro_rules! impl_numeric_test { ($($t:ty)*) => ($(
    impl NumericTest for $t {
        #[inline]
        fn from_bits(bits: u128) -> Self {
            bits as $t
        }
    }
)*) }

impl_numeric_test! { u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize }

pub fn gen_inputs<T>(n: usize, shift: u32) -> Vec<T>
where
    T: NumericTest,
{
    let mut rng = WyRand::new_seed(0x5eed_0000 + n as u64);
    let mut inputs: Vec<T> = (0..n)
        .map(|_| {
            let hi = rng.generate::<u64>() as u128;
            let lo = rng.generate::<u64>() as u128;

            T::from_bits((hi << 64) | lo)
        })
        .collect();

    inputs[0..(n / 2)].iter_mut().for_each(|v| *v = *v >> shift);
    inputs[(n / 2)..n].iter_mut().for_each(|v| *v = *v << shift);

    inputs
}

pub fn gen_input_set<T>(shift: u32) -> Vec<Vec<T>>
where
    T: NumericTest,
{
    let n = 20_000;
    let half = n / 2;
    let inputs = gen_inputs(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[(half - 1)..(half + 1)].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 500)..(half + 500)].to_vec(),
        inputs[(half - 2_500)..(half + 2_500)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

pub fn validate_sort<T, F>(mut inputs: Vec<T>, radix: &Radix, sort_fn: F)
where
    T: NumericTest,
    F: Fn(&mut [T], &Radix),
{
    let mut inputs_clone = inputs.clone();

    sort_fn(&mut inputs, radix);
    inputs_clone.sort_unstable();

    assert_eq!(
        inputs,
        inputs_clone,
        "len {} base {}",
        inputs.len(),
        radix.base()
    );
}

pub fn sort_comparison_suite<T, F>(shift: u32, sort_fn: F)
where
    F: Fn(&mut [T], &Radix),
    T: NumericTest,
{
    let input_set = gen_input_set(shift);

    for base in TEST_BASES {
        let radix = Radix::new(base).unwrap();

        for s in input_set.iter() {
            validate_sort(s.clone(), &radix, &sort_fn);
        }
    }
}

/// Mixed-sign inputs, including the extremes of `i64`, for every test base.
pub fn validate_signed_sort<F>(sort_fn: F)
where
    F: Fn(&mut [i64], &Radix),
{
    let mut patterns: Vec<Vec<i64>> = vec![
        vec![9, -8, 7, -1, 2, -3, 1000, -100, 1234, -5678],
        vec![i64::MIN, i64::MAX, 0, -1, 1, i64::MIN + 1, i64::MAX - 1],
        vec![-1; 64],
        vec![-7, -70, -700, -7, -70, -700, 7, 70, 700],
    ];

    let random: Vec<i64> = gen_inputs(5_000, 0);
    patterns.push(random.clone());
    patterns.push(random.iter().map(|v| v % 1_000).collect());

    for base in TEST_BASES {
        let radix = Radix::new(base).unwrap().with_negatives(true);

        for p in patterns.iter() {
            validate_sort(p.clone(), &radix, &sort_fn);
        }
    }
}
