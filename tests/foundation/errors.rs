//! Integration tests for error types

use sortboard_foundation::{Error, ErrorKind};

#[test]
fn helper_constructors_set_the_kind() {
    assert!(matches!(
        Error::index_out_of_bounds(3, 2).kind,
        ErrorKind::IndexOutOfBounds {
            index: 3,
            length: 2
        }
    ));
    assert!(matches!(
        Error::unknown_algorithm("bogo").kind,
        ErrorKind::UnknownAlgorithm(_)
    ));
    assert!(matches!(
        Error::run_in_progress().kind,
        ErrorKind::RunInProgress
    ));
    assert!(matches!(Error::no_active_run().kind, ErrorKind::NoActiveRun));
}

#[test]
fn messages_are_human_readable() {
    assert_eq!(
        Error::unknown_algorithm("bogo").to_string(),
        "unknown algorithm: bogo"
    );
    assert_eq!(
        Error::index_out_of_bounds(5, 4).to_string(),
        "index out of bounds: 5 (length 4)"
    );
}
