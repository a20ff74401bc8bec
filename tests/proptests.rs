use basesort::{
    is_permutation_of, is_sorted, is_stable_sort_of, sort, RadixKey, SortError,
    Strategy as SortStrategy, MAX_BASE,
};
use proptest::prelude::*;

const TEST_BASES: [usize; 9] = [2, 3, 4, 5, 10, 16, 20, 100, 256];

fn sort_strategy() -> impl Strategy<Value = SortStrategy> {
    prop_oneof![Just(SortStrategy::Msd), Just(SortStrategy::Lsd)]
}

fn base() -> impl Strategy<Value = usize> {
    prop::sample::select(TEST_BASES.to_vec())
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Keyed {
    key: i16,
    pos: usize,
}

impl RadixKey for Keyed {
    fn magnitude(&self) -> u128 {
        self.key.unsigned_abs() as u128
    }

    fn is_negative(&self) -> bool {
        self.key < 0
    }
}

proptest! {
    #[test]
    fn prop_sorted_permutation_unsigned(
        data in prop::collection::vec(any::<u32>(), 0..300),
        base in base(),
        strategy in sort_strategy(),
    ) {
        let sorted = sort(&data, base, strategy, false).unwrap();

        let mut expected = data.clone();
        expected.sort_unstable();

        prop_assert!(is_sorted(&sorted));
        prop_assert!(is_permutation_of(&data, &sorted));
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_sorted_permutation_signed(
        data in prop::collection::vec(any::<i64>(), 0..300),
        base in base(),
        strategy in sort_strategy(),
    ) {
        let sorted = sort(&data, base, strategy, true).unwrap();

        let mut expected = data.clone();
        expected.sort_unstable();

        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn prop_stable(
        keys in prop::collection::vec(-50i16..50, 0..300),
        base in base(),
        strategy in sort_strategy(),
    ) {
        let data: Vec<Keyed> = keys
            .iter()
            .enumerate()
            .map(|(pos, key)| Keyed { key: *key, pos })
            .collect();

        let sorted = sort(&data, base, strategy, true).unwrap();

        prop_assert!(is_stable_sort_of(&data, &sorted));

        for w in sorted.windows(2) {
            if w[0].key == w[1].key {
                prop_assert!(w[0].pos < w[1].pos);
            }
        }
    }

    #[test]
    fn prop_idempotent(
        data in prop::collection::vec(any::<i32>(), 0..200),
        base in base(),
        strategy in sort_strategy(),
    ) {
        let once = sort(&data, base, strategy, true).unwrap();
        let twice = sort(&once, base, strategy, true).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_rejects_negatives_when_disabled(
        data in prop::collection::vec(any::<i32>(), 1..100),
        base in base(),
        strategy in sort_strategy(),
    ) {
        let first_negative = data.iter().position(|v| *v < 0);

        match sort(&data, base, strategy, false) {
            Ok(sorted) => {
                prop_assert!(first_negative.is_none());
                prop_assert!(is_sorted(&sorted));
            }
            Err(e) => {
                prop_assert_eq!(e, SortError::NegativeKey { index: first_negative.unwrap() });
            }
        }
    }

    #[test]
    fn prop_invalid_base(
        data in prop::collection::vec(any::<u8>(), 0..10),
        base in prop_oneof![Just(0usize), Just(1usize), (MAX_BASE + 1)..usize::MAX],
    ) {
        prop_assert_eq!(
            sort(&data, base, SortStrategy::Msd, false),
            Err(SortError::InvalidBase { base })
        );
    }
}
