use std::cell::Cell;
use terminus_outcome::Outcome;

#[test]
fn map_transforms_value() {
    let a = Outcome::<i32, String>::success(42);
    let b = a.map(|x| x + 1);

    assert!(b.has_value());
    assert_eq!(*b.value(), 43);
}

#[test]
fn map_passes_error_through_without_calling() {
    let calls = Cell::new(0);
    let outcome = Outcome::<i32, &str>::failure("e").map(|x| {
        calls.set(calls.get() + 1);
        x + 1
    });

    assert_eq!(outcome, Outcome::failure("e"));
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_error_transforms_error_and_skips_values() {
    let mapped = Outcome::<i32, u16>::failure(500).map_error(|c| format!("HTTP {c}"));
    assert_eq!(mapped.error(), "HTTP 500");

    let calls = Cell::new(0);
    let untouched = Outcome::<i32, u16>::success(1).map_error(|c| {
        calls.set(calls.get() + 1);
        c.to_string()
    });
    assert_eq!(untouched, Outcome::success(1));
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_short_circuits_on_error() {
    let b = Outcome::<i32, String>::failure("not found".into());
    let calls = Cell::new(0);

    let result = b.and_then(|x| {
        calls.set(calls.get() + 1);
        Outcome::success(x * 2)
    });

    assert!(result.has_error());
    assert_eq!(result.error(), "not found");
    assert_eq!(calls.get(), 0);
}

#[test]
fn and_then_sequences_fallible_steps() {
    fn parse(raw: &str) -> Outcome<i32, String> {
        raw.parse::<i32>().map_err(|e| e.to_string()).into()
    }

    fn positive(x: i32) -> Outcome<u32, String> {
        if x > 0 {
            Outcome::success(x as u32)
        } else {
            Outcome::failure(format!("{x} is not positive"))
        }
    }

    assert_eq!(parse("12").and_then(positive), Outcome::success(12));
    assert_eq!(parse("-3").and_then(positive).error(), "-3 is not positive");
    assert!(parse("x").and_then(positive).has_error());
}

#[test]
fn and_then_result_decides_discriminant() {
    let flipped = Outcome::<i32, &str>::success(1).and_then(|_| Outcome::<i32, &str>::failure("late"));
    assert_eq!(flipped, Outcome::failure("late"));
}

#[test]
fn or_else_recovers_and_translates() {
    let recovered = Outcome::<i32, &str>::failure("miss").or_else(|_| Outcome::<i32, String>::success(0));
    assert_eq!(recovered, Outcome::success(0));

    let translated =
        Outcome::<i32, &str>::failure("miss").or_else(|e| Outcome::<i32, usize>::failure(e.len()));
    assert_eq!(translated, Outcome::failure(4));

    let calls = Cell::new(0);
    let untouched = Outcome::<i32, &str>::success(9).or_else(|_| {
        calls.set(calls.get() + 1);
        Outcome::<i32, &str>::success(0)
    });
    assert_eq!(untouched, Outcome::success(9));
    assert_eq!(calls.get(), 0);
}

#[test]
fn map_both_runs_exactly_one_side() {
    let value_calls = Cell::new(0);
    let error_calls = Cell::new(0);

    let mapped = Outcome::<i32, &str>::success(2).map_both(
        |v| {
            value_calls.set(value_calls.get() + 1);
            v * 10
        },
        |e| {
            error_calls.set(error_calls.get() + 1);
            e.len()
        },
    );

    assert_eq!(mapped, Outcome::success(20));
    assert_eq!((value_calls.get(), error_calls.get()), (1, 0));
}

#[test]
fn folding_combinators() {
    assert_eq!(Outcome::<i32, &str>::success(2).map_or(0, |v| v * 3), 6);
    assert_eq!(Outcome::<i32, &str>::failure("e").map_or(0, |v| v * 3), 0);
    assert_eq!(
        Outcome::<i32, &str>::failure("four").map_or_else(|e| e.len() as i32, |v| v),
        4
    );
}

#[test]
fn inspect_observes_without_changing() {
    let seen = Cell::new(0);
    let outcome = Outcome::<i32, &str>::success(5)
        .inspect(|v| seen.set(*v))
        .inspect_error(|_| seen.set(-1));

    assert_eq!(seen.get(), 5);
    assert_eq!(outcome, Outcome::success(5));

    let outcome = Outcome::<i32, &str>::failure("e").inspect_error(|e| seen.set(e.len() as i32));
    assert_eq!(seen.get(), 1);
    assert!(outcome.has_error());
}

#[test]
fn and_or_select_outcomes() {
    let first = Outcome::<i32, &str>::success(1);
    assert_eq!(first.and(Outcome::<&str, &str>::success("next")), Outcome::success("next"));

    let failed = Outcome::<i32, &str>::failure("first");
    assert_eq!(failed.and(Outcome::<&str, &str>::success("next")), Outcome::failure("first"));
    assert_eq!(failed.or(Outcome::<i32, u8>::success(7)), Outcome::success(7));
    assert_eq!(first.or(Outcome::<i32, u8>::failure(0)), Outcome::success(1));
}

#[test]
fn flatten_removes_nesting() {
    let nested = Outcome::<Outcome<i32, &str>, &str>::success(Outcome::success(3));
    assert_eq!(nested.flatten(), Outcome::success(3));

    let inner_error = Outcome::<Outcome<i32, &str>, &str>::success(Outcome::failure("inner"));
    assert_eq!(inner_error.flatten(), Outcome::failure("inner"));

    let outer_error = Outcome::<Outcome<i32, &str>, &str>::failure("outer");
    assert_eq!(outer_error.flatten(), Outcome::failure("outer"));
}

#[test]
fn collect_stops_at_first_error() {
    let pulled = Cell::new(0);
    let inputs = vec![
        Outcome::<i32, &str>::success(1),
        Outcome::failure("second"),
        Outcome::failure("third"),
    ];

    let collected: Outcome<Vec<i32>, &str> = inputs
        .into_iter()
        .inspect(|_| pulled.set(pulled.get() + 1))
        .collect();

    assert_eq!(collected, Outcome::failure("second"));
    assert_eq!(pulled.get(), 2);

    let all: Outcome<Vec<i32>, &str> = (1..=3).map(Outcome::success).collect();
    assert_eq!(all, Outcome::success(vec![1, 2, 3]));
}
