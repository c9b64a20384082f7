use redirects_file::parser::{QueryFieldError, TargetError};
use redirects_file::path::PathError;
use redirects_file::{MAX_INPUT_SIZE, ParseError, ParseResult, Rule, parse, parse_string};
use std::io::{self, Read};

fn expect_error(result: ParseResult<Vec<Rule>>) -> ParseError {
    result.expect_err("expected parse error")
}

#[test]
fn parser_when_status_is_forced_then_returns_error() {
    let err = expect_error(parse_string("\n    /home / 301!\n    "));
    match &err {
        ParseError::ForcedRedirectUnsupported { line, token } => {
            assert_eq!(*line, 2);
            assert_eq!(token, "301!");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("forced redirects"));
}

#[test]
fn parser_when_status_is_unknown_then_returns_error() {
    let err = expect_error(parse_string("\n    /home / 42\n    "));
    assert!(matches!(err, ParseError::UnsupportedStatusCode { line: 2, .. }));
    assert!(err.to_string().contains("status code 42 is not supported"));

    let err = expect_error(parse_string("/a /b 999\n"));
    assert!(matches!(err, ParseError::UnsupportedStatusCode { .. }));
}

#[test]
fn parser_when_input_exceeds_limit_then_returns_size_error() {
    let line = "/from /to 301\n";
    let text = line.repeat(MAX_INPUT_SIZE / line.len() + 1);
    assert!(text.len() > MAX_INPUT_SIZE);

    let err = expect_error(parse_string(&text));
    assert!(matches!(err, ParseError::InputTooLarge { limit: MAX_INPUT_SIZE }));
    assert!(err.to_string().contains("redirects file size cannot exceed"));

    let err = expect_error(parse(text.as_bytes()));
    assert!(matches!(err, ParseError::InputTooLarge { .. }));
    assert_eq!(err.line(), None);
}

#[test]
fn parser_when_input_is_exactly_at_limit_then_parses() {
    let line = "/from /to 301\n";
    let mut text = line.repeat(MAX_INPUT_SIZE / line.len());
    text.push_str(&"#".repeat(MAX_INPUT_SIZE - text.len()));
    assert_eq!(text.len(), MAX_INPUT_SIZE);

    let rules = parse(text.as_bytes()).expect("input at the limit should parse");
    assert_eq!(rules.len(), MAX_INPUT_SIZE / line.len());
}

#[test]
fn parser_when_destination_missing_then_returns_malformed_line() {
    for input in ["hello\n", "/only\n", "/a 301\n"] {
        match expect_error(parse_string(input)) {
            ParseError::MalformedLine { line, .. } => assert_eq!(line, 1),
            other => panic!("{input:?}: unexpected error {other:?}"),
        }
    }
}

#[test]
fn parser_when_later_line_is_invalid_then_returns_no_rules() {
    let err = expect_error(parse_string("/a /b\n/c /d 302\nc   d 42\n"));
    assert_eq!(err.line(), Some(3));
}

#[test]
fn parser_when_from_is_invalid_then_returns_path_error() {
    let cases: [(&str, fn(&PathError) -> bool); 4] = [
        ("a /b\n", |e| matches!(e, PathError::MissingLeadingSlash { .. })),
        ("/a/*/b /c\n", |e| matches!(e, PathError::SplatNotTerminal { .. })),
        ("/a/** /c\n", |e| matches!(e, PathError::MultipleSplats { .. })),
        ("/a%zz /c\n", |e| matches!(e, PathError::InvalidPercentEncoding { .. })),
    ];

    for (input, check) in cases {
        match expect_error(parse_string(input)) {
            ParseError::InvalidFromPath { source, .. } => {
                assert!(check(&source), "{input:?}: unexpected source {source:?}")
            }
            other => panic!("{input:?}: unexpected error {other:?}"),
        }
    }
}

#[test]
fn parser_when_to_is_invalid_then_returns_target_error() {
    match expect_error(parse_string("/a ftp://example.com/file\n")) {
        ParseError::InvalidToTarget { to, source, .. } => {
            assert_eq!(to, "ftp://example.com/file");
            assert_eq!(
                source,
                TargetError::DisallowedScheme {
                    scheme: "ftp".to_string()
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }

    match expect_error(parse_string("/a/*/b blah\n")) {
        ParseError::InvalidToTarget { source, .. } => {
            assert!(matches!(source, TargetError::Url(_)));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parser_when_query_field_is_invalid_then_returns_query_error() {
    let cases = [
        "/bad-syntax1 val=a&val=b /to\n",
        "/bad-syntax2 val=a&val2=b /to 302\n",
        "/a ^&notparams /b\n",
        "/bad-chars :type=whatever /to\n",
        "/bad-chars type=what:ever /to\n",
    ];

    for input in cases {
        match expect_error(parse_string(input)) {
            ParseError::InvalidQueryField { source, .. } => assert!(matches!(
                source,
                QueryFieldError::RepeatedKey { .. }
                    | QueryFieldError::NotSinglePair { .. }
                    | QueryFieldError::UnsafeKey { .. }
                    | QueryFieldError::UnsafeValue { .. }
            )),
            other => panic!("{input:?}: unexpected error {other:?}"),
        }
    }
}

#[test]
fn parser_when_input_is_not_utf8_then_reports_line() {
    let err = expect_error(parse(&b"/a /b\n/\xff /c\n"[..]));
    assert!(matches!(err, ParseError::InvalidUtf8 { line: 2 }));
}

#[test]
fn parser_when_reader_fails_then_returns_io_error() {
    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    let err = expect_error(parse(Failing));
    match err {
        ParseError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parser_when_placeholder_name_is_not_an_identifier_then_rejects_rule() {
    match expect_error(parse_string("/:my-id /x/:my-id 302\n")) {
        ParseError::InvalidFromPath { source, .. } => assert_eq!(
            source,
            PathError::InvalidPlaceholderName {
                input: "/:my-id".to_string(),
                name: "my-id".to_string(),
            }
        ),
        other => panic!("unexpected error: {other:?}"),
    }

    for (input, name) in [
        ("/p type=:my-t /p-:my-t.html 200\n", "my-t"),
        ("/p type=:t.x /p-:t.x 200\n", "t.x"),
    ] {
        match expect_error(parse_string(input)) {
            ParseError::InvalidQueryField { source, .. } => assert_eq!(
                source,
                QueryFieldError::InvalidPlaceholderName {
                    name: name.to_string()
                }
            ),
            other => panic!("{input:?}: unexpected error {other:?}"),
        }
    }
}
