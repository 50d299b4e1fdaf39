use json_borrow::{from_str, from_str_with_options, ErrorKind, ParseOptions};

fn failure(input: &str) -> (ErrorKind, usize) {
    let err = from_str(input).unwrap_err();
    (err.kind().clone(), err.offset())
}

#[test]
fn test_unexpected_token() {
    assert_eq!(failure(""), (ErrorKind::UnexpectedToken, 0));
    assert_eq!(failure("  @"), (ErrorKind::UnexpectedToken, 2));
    assert_eq!(failure("[1, }"), (ErrorKind::UnexpectedToken, 4));
    assert_eq!(failure("nil"), (ErrorKind::UnexpectedToken, 0));
}

#[test]
fn test_expected_string_key() {
    assert_eq!(failure("{"), (ErrorKind::ExpectedStringKey, 1));
    assert_eq!(failure("{ a: 1 }"), (ErrorKind::ExpectedStringKey, 2));
    assert_eq!(failure(r#"{"a": 1, }"#), (ErrorKind::ExpectedStringKey, 9));
}

#[test]
fn test_expected_colon() {
    assert_eq!(failure(r#"{"a" 1}"#), (ErrorKind::ExpectedColon, 5));
    assert_eq!(failure(r#"{"a""#), (ErrorKind::ExpectedColon, 4));
}

#[test]
fn test_expected_comma_or_end() {
    assert_eq!(
        failure(r#"{"a":1"#),
        (ErrorKind::ExpectedCommaOrEndOfObject, 6)
    );
    assert_eq!(
        failure(r#"{"a":1]"#),
        (ErrorKind::ExpectedCommaOrEndOfObject, 6)
    );
    assert_eq!(failure("[1}"), (ErrorKind::ExpectedCommaOrEndOfArray, 2));
    assert_eq!(failure("[true"), (ErrorKind::ExpectedCommaOrEndOfArray, 5));
}

#[test]
fn test_string_failures_point_at_end_of_input() {
    assert_eq!(failure(r#"["abc"#), (ErrorKind::UnterminatedString, 5));
    assert_eq!(failure(r#"{"ke"#), (ErrorKind::UnterminatedString, 4));
    assert_eq!(failure(r#""ab\"#), (ErrorKind::UnexpectedEndOfEscape, 4));
}

#[test]
fn test_trailing_characters() {
    assert_eq!(failure("{} x"), (ErrorKind::TrailingCharacters, 3));
    assert_eq!(failure("1 2"), (ErrorKind::TrailingCharacters, 2));
    assert_eq!(failure("[]]"), (ErrorKind::TrailingCharacters, 2));
    assert_eq!(failure("truex"), (ErrorKind::TrailingCharacters, 4));
}

#[test]
fn test_max_depth_exceeded() {
    let options = ParseOptions::new().with_max_depth(2);
    let err = from_str_with_options(r#"{"a": {"b": [1]}}"#, options).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MaxDepthExceeded { limit: 2 });
    assert_eq!(err.offset(), 12);
}

#[test]
fn test_unlimited_depth_accepts_what_fits_on_the_stack() {
    let depth = 500;
    let input = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    assert!(from_str(&input).is_err());
    assert!(from_str_with_options(&input, ParseOptions::unlimited()).is_ok());
}

#[test]
fn test_line_and_column() {
    let input = "{\n  \"a\": 1,\n  \"b\" 2\n}";
    let err = from_str(input).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ExpectedColon);
    assert_eq!(err.line(), 3);
    assert_eq!(err.column(), 7);
    assert_eq!(
        err.to_string(),
        "expected ':' after object key at line 3, column 7 (byte 18)"
    );
}

#[test]
fn test_errors_are_recoverable() {
    let inputs = ["[1,2]", "[1,", "{\"ok\":true}", "{} {}"];
    let parsed: Vec<bool> = inputs.iter().map(|s| from_str(s).is_ok()).collect();
    assert_eq!(parsed, vec![true, false, true, false]);
}
