use terminus_outcome::types::{StatusCode, StatusOutcome};
use terminus_outcome::{attempt, Narrow};

fn read_header(bytes: &[u8]) -> StatusOutcome<u8> {
    match bytes.first() {
        Some(&version) if version > 0 => StatusOutcome::success(version),
        Some(_) => StatusOutcome::failure(StatusCode::InvalidInput),
        None => StatusOutcome::failure(StatusCode::IncorrectSize),
    }
}

fn read_version(bytes: &[u8]) -> StatusOutcome<String> {
    let version = attempt!(read_header(bytes));
    StatusOutcome::success(format!("v{version}"))
}

#[test]
fn status_outcomes_report_codes() {
    assert_eq!(read_version(&[2]).value(), "v2");
    assert_eq!(*read_version(&[0]).error(), StatusCode::InvalidInput);
    assert_eq!(*read_version(&[]).error(), StatusCode::IncorrectSize);
}

#[test]
fn status_outcomes_accept_a_policy() {
    let outcome: StatusOutcome<u8, Narrow> = StatusOutcome::failure(StatusCode::NotImplemented);
    assert_eq!(outcome.error().to_string(), "Error: NOT_IMPLEMENTED");
}

#[cfg(feature = "serde")]
#[test]
fn status_codes_serialize_by_name() {
    let json = serde_json::to_string(&StatusCode::FileNotFound).unwrap();
    assert_eq!(json, r#""FileNotFound""#);
}
