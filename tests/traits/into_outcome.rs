use terminus_outcome::traits::{IntoOutcome, OptionExt};
use terminus_outcome::{Narrow, Outcome, Unchecked};

#[test]
fn results_become_outcomes() {
    let ok: Outcome<i32, &str> = Ok(1).into_outcome();
    assert_eq!(ok, Outcome::success(1));

    let err: Unchecked<i32, &str> = Err("bad").into_outcome::<Narrow>();
    assert_eq!(*err.error(), "bad");
}

#[test]
fn options_name_their_missing_error() {
    let present: Outcome<u8, &str> = Some(4).ok_or_fail("missing");
    assert_eq!(present, Outcome::success(4));

    let absent: Outcome<u8, &str> = None.ok_or_fail("missing");
    assert_eq!(absent, Outcome::failure("missing"));
}

#[test]
fn lazy_option_error_is_only_built_when_needed() {
    let mut built = 0;
    let present: Outcome<u8, String> = Some(1).ok_or_else_fail(|| {
        built += 1;
        "missing".to_string()
    });
    assert!(present.has_value());
    assert_eq!(built, 0);

    let absent: Outcome<u8, String> = None.ok_or_else_fail(|| {
        built += 1;
        "missing".to_string()
    });
    assert_eq!(absent.error(), "missing");
    assert_eq!(built, 1);
}
