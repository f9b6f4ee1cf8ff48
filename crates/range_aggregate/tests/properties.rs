use proptest::prelude::*;
use proptest::test_runner::Config;

use range_aggregate::{
    Error, FenwickTree, Max, Min, RangeAggregate, RecursiveSegmentTree, SegmentTree, SparseTable,
    Sum,
};

fn values_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000_i64..=1_000_000, 1..200)
}

/// Values plus an in-bounds index.
fn values_and_index() -> impl Strategy<Value = (Vec<i64>, usize)> {
    values_strategy().prop_flat_map(|values| {
        let n = values.len();
        (Just(values), 0..n)
    })
}

/// Values plus an inclusive in-bounds range.
fn values_and_range() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
    values_strategy().prop_flat_map(|values| {
        let n = values.len();
        (Just(values), 0..n).prop_flat_map(move |(values, l)| (Just(values), Just(l), l..n))
    })
}

fn check_leaves<T>(values: &[i64], tree: &T) -> Result<(), TestCaseError>
where
    T: RangeAggregate,
    T::Monoid: range_aggregate::Monoid<Value = i64>,
{
    for (i, &v) in values.iter().enumerate() {
        prop_assert_eq!(tree.query(i, i), Ok(v));
    }
    Ok(())
}

proptest! {
    #![proptest_config(Config {
        cases: 128,
        ..Config::default()
    })]

    #[test]
    fn identity_leaves_fold_to_identity(n in 1_usize..500) {
        let sums = SegmentTree::with_len(Sum::<i64>::new(), n).unwrap();
        let mins = RecursiveSegmentTree::with_len(Min::<i64>::new(), n).unwrap();
        prop_assert_eq!(sums.query(0, n - 1), Ok(0));
        prop_assert_eq!(mins.query(0, n - 1), Ok(i64::MAX));
    }

    #[test]
    fn construction_preserves_leaves(values in values_strategy()) {
        let iterative = SegmentTree::from_values(Sum::<i64>::new(), values.clone()).unwrap();
        let recursive =
            RecursiveSegmentTree::from_values(Sum::<i64>::new(), values.clone()).unwrap();
        check_leaves(&values, &iterative)?;
        check_leaves(&values, &recursive)?;
    }

    #[test]
    fn set_round_trips((mut values, i) in values_and_index(), x in -1_000_i64..=1_000) {
        let mut iterative = SegmentTree::from_values(Sum::<i64>::new(), values.clone()).unwrap();
        let mut recursive =
            RecursiveSegmentTree::from_values(Sum::<i64>::new(), values.clone()).unwrap();
        iterative.set(i, x).unwrap();
        recursive.set(i, x).unwrap();
        values[i] = x;

        let total: i64 = values.iter().sum();
        let n = values.len();
        prop_assert_eq!(iterative.query(i, i), Ok(x));
        prop_assert_eq!(recursive.query(i, i), Ok(x));
        prop_assert_eq!(iterative.query(0, n - 1), Ok(total));
        prop_assert_eq!(recursive.query(0, n - 1), Ok(total));
    }

    #[test]
    fn set_is_idempotent((values, i) in values_and_index(), x in any::<i64>()) {
        let mut once = SegmentTree::from_values(Max::<i64>::new(), values.clone()).unwrap();
        once.set(i, x).unwrap();
        let mut twice = once.clone();
        twice.set(i, x).unwrap();
        prop_assert_eq!(once.leaves(), twice.leaves());
        prop_assert_eq!(once.fold(..), twice.fold(..));
    }

    #[test]
    fn all_structures_agree_on_ranges((values, l, r) in values_and_range()) {
        let expected_sum: i64 = values[l..=r].iter().sum();
        let expected_min = values[l..=r].iter().copied().min();

        let seg = SegmentTree::from_values(Sum::<i64>::new(), values.clone()).unwrap();
        let rec = RecursiveSegmentTree::from_values(Sum::<i64>::new(), values.clone()).unwrap();
        let fenwick = FenwickTree::from_values(Sum::<i64>::new(), values.clone()).unwrap();
        let sparse = SparseTable::from_values(Min::<i64>::new(), values).unwrap();

        prop_assert_eq!(seg.query(l, r), Ok(expected_sum));
        prop_assert_eq!(rec.query(l, r), Ok(expected_sum));
        prop_assert_eq!(fenwick.query(l, r), Ok(expected_sum));
        prop_assert_eq!(sparse.query(l, r).ok(), expected_min);
    }

    #[test]
    fn out_of_bounds_is_rejected(values in values_strategy(), extra in 0_usize..10) {
        let n = values.len();
        let mut seg = SegmentTree::from_values(Sum::<i64>::new(), values).unwrap();
        prop_assert!(
            matches!(seg.query(0, n + extra), Err(Error::OutOfRange { .. })),
            "expected OutOfRange"
        );
        prop_assert!(
            matches!(seg.set(n + extra, 1), Err(Error::OutOfRange { .. })),
            "expected OutOfRange"
        );
        prop_assert!(
            matches!(seg.accumulate(n + extra, 1), Err(Error::OutOfRange { .. })),
            "expected OutOfRange"
        );
        if n > 1 {
            prop_assert!(
                matches!(seg.query(n - 1, 0), Err(Error::OutOfRange { .. })),
                "expected OutOfRange"
            );
        }
    }
}
