use rstest::rstest;

use crate::{Expectation, ParseError, ParseOptions, TokenKind, parse};

#[rstest]
#[case::missing_value("{\"a\":}", 5, Expectation::Value, TokenKind::Punctuator)]
#[case::bare_comma_value("[,]", 1, Expectation::Value, TokenKind::Punctuator)]
#[case::colon_for_value("[:]", 1, Expectation::Value, TokenKind::Punctuator)]
#[case::number_key("{1:2}", 1, Expectation::Key, TokenKind::Number)]
#[case::literal_key("{null:1}", 1, Expectation::Key, TokenKind::Literal)]
#[case::brace_key("{[]:1}", 1, Expectation::Key, TokenKind::Punctuator)]
#[case::missing_colon("{\"a\" 1}", 5, Expectation::Colon, TokenKind::Number)]
#[case::comma_for_colon("{\"a\",1}", 4, Expectation::Colon, TokenKind::Punctuator)]
#[case::missing_comma_array("[1 2]", 3, Expectation::CommaOrClose(b']'), TokenKind::Number)]
#[case::missing_comma_object(
    "{\"a\":1\"b\":2}",
    6,
    Expectation::CommaOrClose(b'}'),
    TokenKind::String
)]
#[case::mismatched_closer("{\"a\": 1]", 7, Expectation::CommaOrClose(b'}'), TokenKind::Punctuator)]
#[case::trailing_comma_object("{\"a\": 1,}", 8, Expectation::Key, TokenKind::Punctuator)]
#[case::trailing_comma_array("[1,]", 3, Expectation::Value, TokenKind::Punctuator)]
#[case::double_comma("[1,,2]", 3, Expectation::Value, TokenKind::Punctuator)]
fn grammar_violations_carry_offset_and_kinds(
    #[case] source: &str,
    #[case] offset: usize,
    #[case] expected: Expectation,
    #[case] actual: TokenKind,
) {
    assert_eq!(
        parse(source, ParseOptions::default()),
        Err(ParseError::UnexpectedToken {
            offset,
            expected,
            actual,
        })
    );
}

#[rstest]
#[case::bare_open_brace("{", 1)]
#[case::bare_open_bracket("[", 1)]
#[case::key_without_rest("{\"a\"", 4)]
#[case::colon_without_value("{\"a\":", 5)]
#[case::value_without_close("{\"a\":1", 6)]
#[case::element_without_close("[true", 5)]
#[case::dangling_comma("[1,", 3)]
#[case::open_after_whitespace("[ ", 2)]
fn truncated_input_reports_the_sequence_end(#[case] source: &str, #[case] offset: usize) {
    assert_eq!(
        parse(source, ParseOptions::default()),
        Err(ParseError::UnexpectedEnd { offset })
    );
}

#[rstest]
#[case::two_roots("{} {}", 3)]
#[case::two_numbers("1 2", 2)]
#[case::leading_zero_split("01", 1)]
#[case::stray_closer("[] ]", 3)]
#[case::root_then_comma("null,", 4)]
fn trailing_content_is_rejected(#[case] source: &str, #[case] offset: usize) {
    assert_eq!(
        parse(source, ParseOptions::default()),
        Err(ParseError::TrailingCharacters { offset })
    );
}

#[rstest]
#[case::empty("")]
#[case::space(" ")]
#[case::newlines("\n\n")]
#[case::mixed(" \t\r\n ")]
fn blank_input_is_rejected_before_tokenizing(#[case] source: &str) {
    assert_eq!(
        parse(source, ParseOptions::default()),
        Err(ParseError::EmptyInput)
    );
}

#[rstest]
#[case::bad_escape("\"\\x\"", ParseError::InvalidEscape { ch: 'x', offset: 1 })]
#[case::capital_u_escape("\"\\U0041\"", ParseError::InvalidEscape { ch: 'U', offset: 1 })]
#[case::short_unicode("[\"\\u12\"]", ParseError::InvalidUnicodeEscape { offset: 2 })]
#[case::lone_high_surrogate("\"\\ud83d\"", ParseError::InvalidUnicodeEscape { offset: 1 })]
#[case::unterminated("\"abc", ParseError::UnterminatedString { offset: 0 })]
#[case::bad_number("-x", ParseError::InvalidNumber { offset: 0 })]
#[case::dangling_exponent("[1e]", ParseError::InvalidNumber { offset: 1 })]
#[case::stray_character(".5", ParseError::InvalidCharacter { ch: '.', offset: 0 })]
#[case::truncated_literal("tru", ParseError::InvalidCharacter { ch: 't', offset: 0 })]
#[case::control_in_string("\"a\u{0002}\"", ParseError::InvalidCharacter { ch: '\u{0002}', offset: 2 })]
fn lexical_violations_surface_through_parse(#[case] source: &str, #[case] expected: ParseError) {
    assert_eq!(parse(source, ParseOptions::default()), Err(expected));
}

#[test]
fn depth_overflow_identifies_the_opening_punctuator() {
    let options = ParseOptions {
        max_depth: 3,
        ..ParseOptions::default()
    };

    assert!(parse("[[[1]]]", options).is_ok());
    assert_eq!(
        parse("[[[[1]]]]", options),
        Err(ParseError::DepthLimitExceeded {
            offset: 3,
            limit: 3,
        })
    );
}

#[test]
fn errors_render_offsets_for_editor_cursors() {
    use alloc::string::ToString;

    let err = parse("{\"a\":}", ParseOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected punctuator at offset 5, expected a value"
    );

    let err = parse("[1 2]", ParseOptions::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected number at offset 3, expected ',' or ']'"
    );
}
