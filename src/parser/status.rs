use regex::Regex;
use std::sync::LazyLock;

use crate::rule::is_supported_status;

use super::{ParseError, ParseResult};

static STATUS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}!?$").expect("status token pattern should compile"));

/// Whether the last field of a line is a status token rather than part of the
/// destination. Only the shape is checked here.
pub(crate) fn looks_like_status(token: &str) -> bool {
    STATUS_TOKEN.is_match(token)
}

pub(crate) fn parse_status(line: usize, token: &str) -> ParseResult<u16> {
    // See https://docs.netlify.com/routing/redirects/rewrites-proxies/#shadowing
    if token.ends_with('!') {
        return Err(ParseError::ForcedRedirectUnsupported {
            line,
            token: token.to_string(),
        });
    }

    match token.parse::<u16>() {
        Ok(code) if is_supported_status(code) => Ok(code),
        _ => Err(ParseError::UnsupportedStatusCode {
            line,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_one_to_three_digits_with_optional_bang() {
        for token in ["2", "42", "301", "301!", "999"] {
            assert!(looks_like_status(token), "{token}");
        }
        for token in ["3oo", "1000", "!", "301!!", "/301", "٣٠١", ""] {
            assert!(!looks_like_status(token), "{token}");
        }
    }

    #[test]
    fn bang_is_rejected_before_the_number_is_checked() {
        let err = parse_status(3, "42!").unwrap_err();
        assert!(matches!(err, ParseError::ForcedRedirectUnsupported { line: 3, .. }));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let err = parse_status(1, "42").unwrap_err();
        assert_eq!(err.to_string(), "line 1: status code 42 is not supported");
        assert_eq!(parse_status(1, "451").unwrap(), 451);
    }
}
