//! Laws that must hold for every constructed outcome.
use proptest::prelude::*;
use std::cell::Cell;
use terminus_outcome::Outcome;

fn arb_outcome() -> impl Strategy<Value = Outcome<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Outcome::success),
        ".*".prop_map(Outcome::failure),
    ]
}

fn arb_error_outcome() -> impl Strategy<Value = Outcome<i64, String>> {
    ".*".prop_map(Outcome::failure)
}

proptest! {
    #[test]
    fn exactly_one_side_is_populated(outcome in arb_outcome()) {
        prop_assert_ne!(outcome.has_value(), outcome.has_error());
        prop_assert_eq!(outcome.value_opt().is_some(), outcome.has_value());
        prop_assert_eq!(outcome.error_opt().is_some(), outcome.has_error());
    }

    #[test]
    fn value_or_returns_held_value_or_default(outcome in arb_outcome(), default in any::<i64>()) {
        let expected = outcome.value_opt().copied().unwrap_or(default);
        prop_assert_eq!(outcome.value_or(default), expected);
    }

    #[test]
    fn map_fuses(outcome in arb_outcome(), a in any::<i64>(), b in any::<i64>()) {
        let f = |x: i64| x.wrapping_mul(a);
        let g = |x: i64| x.wrapping_sub(b);

        let chained = outcome.clone().map(f).map(g);
        let fused = outcome.map(|x| g(f(x)));
        prop_assert_eq!(chained, fused);
    }

    #[test]
    fn map_on_error_is_identity(outcome in arb_error_outcome()) {
        let calls = Cell::new(0);
        let mapped = outcome.clone().map(|x| {
            calls.set(calls.get() + 1);
            x
        });
        prop_assert_eq!(mapped, outcome);
        prop_assert_eq!(calls.get(), 0);
    }

    #[test]
    fn and_then_never_calls_on_error_and_keeps_error(outcome in arb_error_outcome()) {
        let expected = outcome.error().clone();
        let calls = Cell::new(0);

        let chained: Outcome<bool, String> = outcome.and_then(|_| {
            calls.set(calls.get() + 1);
            Outcome::success(true)
        });

        prop_assert_eq!(calls.get(), 0);
        prop_assert_eq!(chained.error(), &expected);
    }

    #[test]
    fn value_round_trips(value in any::<i64>()) {
        prop_assert_eq!(*Outcome::<i64, String>::success(value).value(), value);
    }

    #[test]
    fn error_round_trips(error in ".*") {
        let outcome = Outcome::<i64, String>::failure(error.clone());
        prop_assert_eq!(outcome.error(), &error);
    }

    #[test]
    fn only_one_callback_of_a_pair_runs(outcome in arb_outcome()) {
        let value_calls = Cell::new(0);
        let error_calls = Cell::new(0);
        let had_value = outcome.has_value();

        let _ = outcome
            .map(|v| {
                value_calls.set(value_calls.get() + 1);
                v
            })
            .map_error(|e| {
                error_calls.set(error_calls.get() + 1);
                e
            });

        prop_assert_eq!(value_calls.get(), usize::from(had_value));
        prop_assert_eq!(error_calls.get(), usize::from(!had_value));
    }

    #[test]
    fn ordering_puts_values_before_errors(value in any::<i64>(), error in ".*") {
        prop_assert!(Outcome::<i64, String>::success(value) < Outcome::failure(error));
    }
}
