//! Property-based tests for the pipe and currying laws

use proptest::prelude::*;

use crate::{
    efilter, emap, ereduce, ereversed, esorted, esum, filter, fold, map, reversed, sorted_by_key,
    sum_from,
    test_utils::{add, is_odd, square},
    Error, Pipe, PipedIter, PipedVec, Transform,
};

proptest! {
    #[test]
    fn pipe_equals_call_equals_base_operation(numbers in prop::collection::vec(-1000i32..1000, 0..50)) {
        let square_all = emap(square);
        let pick_odd = efilter(is_odd);

        let piped: Vec<_> = (numbers.clone() | &square_all).collect();
        let called: Vec<_> = square_all.apply(numbers.clone()).collect();
        let base: Vec<_> = map(square, numbers.clone()).collect();
        prop_assert_eq!(&piped, &called);
        prop_assert_eq!(&called, &base);

        let piped: Vec<_> = (numbers.clone() | &pick_odd).collect();
        let called: Vec<_> = pick_odd.apply(numbers.clone()).collect();
        let base: Vec<_> = filter(is_odd, numbers).collect();
        prop_assert_eq!(&piped, &called);
        prop_assert_eq!(&called, &base);
    }

    #[test]
    fn chaining_is_associative(numbers in prop::collection::vec(-1000i32..1000, 0..50)) {
        let square_all = emap(square);
        let pick_odd = efilter(is_odd);

        let grouped: Vec<_> = ((numbers.clone() | &square_all) | &pick_odd).collect();
        let chained: Vec<_> = (numbers.clone() | &square_all | &pick_odd).collect();
        let nested: Vec<_> = pick_odd.apply(square_all.apply(numbers)).collect();

        prop_assert_eq!(&grouped, &chained);
        prop_assert_eq!(&chained, &nested);
    }

    #[test]
    fn currying_round_trip(numbers in prop::collection::vec(-1000i32..1000, 0..50), start in -1000i32..1000) {
        prop_assert_eq!(esum().start(start).apply(numbers.clone()), sum_from(numbers.clone(), start));
        prop_assert_eq!(numbers.clone() | esum().start(start), sum_from(numbers.clone(), start));
        prop_assert_eq!(ereduce(add).initial(start).apply(numbers.clone()), fold(add, numbers, start));
    }

    #[test]
    fn sorted_key_and_reverse(numbers in prop::collection::vec(-1000i32..1000, 0..50)) {
        let descending = numbers.clone() | esorted().reverse(true);
        let by_negation = sorted_by_key(numbers.clone(), |x: &i32| -x);

        prop_assert_eq!(&descending, &by_negation);
        prop_assert!(descending.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn reversed_reverses(numbers in prop::collection::vec(any::<i32>(), 0..50)) {
        let backwards: Vec<_> = reversed(numbers.clone()).unwrap().collect();
        let piped: Vec<_> = numbers.clone().pipe(ereversed()).unwrap().collect();

        let mut expected = numbers;
        expected.reverse();

        prop_assert_eq!(&backwards, &expected);
        prop_assert_eq!(&piped, &expected);
    }

    #[test]
    fn wrappers_agree_with_plain_chaining(numbers in prop::collection::vec(-1000i32..1000, 0..50)) {
        use crate::meta::{Filter, Map};

        let plain: Vec<_> = (numbers.clone() | emap(square) | efilter(is_odd)).collect();
        let eager = PipedVec::from(numbers.clone()) | (Map, square) | (Filter, is_odd);
        let lazy: Vec<_> = (PipedIter::new(numbers) | (Map, square) | (Filter, is_odd)).collect();

        prop_assert_eq!(&eager.into_inner(), &plain);
        prop_assert_eq!(&lazy, &plain);
    }

    #[test]
    fn wrappers_hand_back_errors(numbers in prop::collection::vec(-1000i32..1000, 0..50)) {
        use crate::meta::Map;

        let eager = PipedVec::from(numbers.clone()) | (Map, square) | ereversed();
        let lazy = PipedIter::new(numbers.clone()) | (Map, square) | ereversed();
        let reduced = PipedVec::from(numbers.clone()).pipe(ereduce(add));

        let mut expected: Vec<_> = map(square, numbers.clone()).collect();
        expected.reverse();

        prop_assert_eq!(eager.map(PipedVec::into_inner), Ok(expected));
        let lazy_not_reversible = matches!(lazy, Err(Error::NotReversible { kind: "iterator" }));
        prop_assert!(lazy_not_reversible);
        prop_assert_eq!(reduced.is_err(), numbers.is_empty());
    }
}
