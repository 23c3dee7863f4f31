use gln_io::{Error, ErrorKind, ParseFailed, Position};
use std::io;

#[test]
fn test_parse_failed_exposes_location() {
    let err = Error::parse_failed("config.gln", Position::new(5, 2, 3), "unexpected ']'");
    let failure = err.location().expect("parse failure carries a location");

    assert_eq!(failure.pos(), 5);
    assert_eq!(failure.line(), 2);
    assert_eq!(failure.row(), 3);
    assert_eq!(failure.source_desc(), "config.gln");
    assert_eq!(failure.message(), "unexpected ']'");
    assert!(err.description().contains("unexpected ']'"));
}

#[test]
fn test_parse_failed_description_format() {
    let failure = ParseFailed::new("<string>", Position::new(5, 2, 3), "bad token");
    assert_eq!(failure.description(), "<string>(2,3,5) : bad token");
    assert_eq!(failure.to_string(), failure.description());
}

#[test]
fn test_parse_failed_copies_source_desc() {
    let failure = {
        let name = String::from("temporary.gln");
        ParseFailed::new(name.as_str(), Position::START, "boom")
    };
    assert_eq!(failure.source_desc(), "temporary.gln");
}

#[test]
fn test_parse_failed_converts_into_error() {
    let err: Error = ParseFailed::new("<string>", Position::new(1, 1, 2), "boom").into();
    assert_eq!(err.kind(), ErrorKind::ParseFailed);
    assert_eq!(err.location().map(|f| f.row()), Some(2));
}

#[test]
fn test_description_is_stable() {
    let err = Error::invalid_argument(format!("argument {} is out of range", 3));
    let first = err.description().to_string();
    assert_eq!(err.description(), first);
    assert_eq!(err.description(), first);
    assert_eq!(first, "argument 3 is out of range");
}

#[test]
fn test_empty_messages_are_never_observable() {
    let errors = [
        Error::generic(""),
        Error::invalid_argument(""),
        Error::parse_failed("<string>", Position::START, ""),
    ];
    for err in &errors {
        assert!(!err.description().is_empty(), "{:?}", err);
    }

    let failure = ParseFailed::new("<string>", Position::START, "");
    assert!(!failure.message().is_empty());
}

#[test]
fn test_kinds() {
    assert_eq!(Error::generic("x").kind(), ErrorKind::Generic);
    assert_eq!(Error::invalid_argument("x").kind(), ErrorKind::InvalidArgument);
    let open = Error::file_open_failed("/missing", io::Error::from(io::ErrorKind::NotFound));
    assert_eq!(open.kind(), ErrorKind::FileOpenFailed);
    assert_eq!(
        Error::parse_failed("<string>", Position::START, "x").kind(),
        ErrorKind::ParseFailed
    );
}

#[test]
fn test_location_only_for_parse_failures() {
    assert!(Error::generic("x").location().is_none());
    assert!(Error::invalid_argument("x").location().is_none());
    let open = Error::file_open_failed("/missing", io::Error::from(io::ErrorKind::NotFound));
    assert!(open.location().is_none());
}

#[test]
fn test_file_open_failed_names_path_and_source() {
    let not_found = io::Error::from(io::ErrorKind::NotFound);
    let err = Error::file_open_failed("/no/such/file.gln", not_found);
    assert!(err.description().contains("/no/such/file.gln"));
    assert!(std::error::Error::source(&err).is_some());

    match &err {
        Error::FileOpenFailed { path, .. } => assert_eq!(path.to_str(), Some("/no/such/file.gln")),
        _ => panic!("Expected FileOpenFailed, got {:?}", err),
    }
}

#[test]
fn test_display_matches_description() {
    let errors = [
        Error::generic("something broke"),
        Error::invalid_argument("bad input"),
        Error::parse_failed("a.gln", Position::new(9, 3, 4), "unterminated string"),
    ];
    for err in &errors {
        assert_eq!(err.to_string(), err.description());
    }
}

#[test]
fn test_position_display_and_default() {
    assert_eq!(Position::new(10, 2, 3).to_string(), "line 2, column 3");
    assert_eq!(Position::default(), Position::new(0, 1, 1));
}
