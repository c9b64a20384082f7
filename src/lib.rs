//! Netlify-style `_redirects` parsing and matching.
//!
//! ```
//! use redirects_file::{QueryParams, parse_string};
//!
//! let rules = parse_string("/api/* https://api.example.com/:splat 200\n").unwrap();
//! let to = rules[0].match_and_expand("/api/v1/users", &QueryParams::new());
//! assert_eq!(to.as_deref(), Some("https://api.example.com/v1/users"));
//! ```

pub mod matcher;
pub mod parser;
pub mod path;
pub mod rule;

pub use matcher::{QueryParams, ResolvedRule, first_match};
pub use parser::{
    MAX_INPUT_SIZE, ParseError, ParseResult, Parser, ParserOptions, ParserOptionsBuilder,
    ParserOptionsError, parse, parse_string,
};
pub use rule::{Rule, SUPPORTED_STATUS_CODES, is_supported_status};
