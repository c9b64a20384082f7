mod error;
mod line;
mod options;
mod query;
mod reader;
mod status;
mod target;

pub use error::{ParseError, ParseResult, QueryFieldError, TargetError};
pub use options::{MAX_INPUT_SIZE, ParserOptions, ParserOptionsBuilder, ParserOptionsError};
pub use target::ALLOWED_SCHEMES;

use std::io::Read;

use crate::rule::Rule;
use line::parse_line;
use reader::read_bounded;

/// Turns `_redirects` text into an ordered list of rules.
///
/// Parsing stops at the first invalid line; no rules are returned alongside
/// an error.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new(options: Option<ParserOptions>) -> Self {
        Self {
            options: options.unwrap_or_default(),
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Reads at most `max_input_size + 1` bytes from `reader`, then parses.
    pub fn parse<R: Read>(&self, reader: R) -> ParseResult<Vec<Rule>> {
        let input = read_bounded(reader, self.options.max_input_size)?;
        self.parse_bytes(&input)
    }

    pub fn parse_str(&self, input: &str) -> ParseResult<Vec<Rule>> {
        self.parse_bytes(input.as_bytes())
    }

    #[tracing::instrument(level = "debug", skip(self, input), fields(input_len = input.len() as u64))]
    pub fn parse_bytes(&self, input: &[u8]) -> ParseResult<Vec<Rule>> {
        let limit = self.options.max_input_size;
        if input.len() > limit {
            tracing::debug!(limit, "redirects input exceeds size limit");
            return Err(ParseError::InputTooLarge { limit });
        }

        let mut rules = Vec::new();
        for (idx, raw) in input.split(|b| *b == b'\n').enumerate() {
            let number = idx + 1;
            let text =
                std::str::from_utf8(raw).map_err(|_| ParseError::InvalidUtf8 { line: number })?;

            let parsed = parse_line(number, text).inspect_err(|err| {
                tracing::debug!(line = number, error = %err, "rejected redirects line");
            })?;

            if let Some(rule) = parsed {
                rules.push(rule);
            }
        }

        tracing::debug!(rules = rules.len(), "parsed redirects");
        Ok(rules)
    }
}

/// Parses `reader` with the default 64 KiB size limit.
pub fn parse<R: Read>(reader: R) -> ParseResult<Vec<Rule>> {
    Parser::default().parse(reader)
}

/// Parses `input` with the default 64 KiB size limit.
pub fn parse_string(input: &str) -> ParseResult<Vec<Rule>> {
    Parser::default().parse_str(input)
}
