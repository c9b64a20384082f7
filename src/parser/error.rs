use crate::path::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: missing 'to' path: '{content}'")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: invalid 'from' path '{from}': {source}")]
    InvalidFromPath {
        line: usize,
        from: String,
        #[source]
        source: PathError,
    },
    #[error("line {line}: invalid 'to' target '{to}': {source}")]
    InvalidToTarget {
        line: usize,
        to: String,
        #[source]
        source: TargetError,
    },
    #[error("line {line}: invalid fromQuery argument '{field}': {source}")]
    InvalidQueryField {
        line: usize,
        field: String,
        #[source]
        source: QueryFieldError,
    },
    #[error(
        "line {line}: parsing status '{token}': forced redirects (or \"shadowing\") are not supported"
    )]
    ForcedRedirectUnsupported { line: usize, token: String },
    #[error("line {line}: status code {token} is not supported")]
    UnsupportedStatusCode { line: usize, token: String },
    #[error("line {line}: input is not valid UTF-8")]
    InvalidUtf8 { line: usize },
    #[error("redirects file size cannot exceed {limit} bytes")]
    InputTooLarge { limit: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// 1-based source line the error refers to, if it is tied to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MalformedLine { line, .. }
            | ParseError::InvalidFromPath { line, .. }
            | ParseError::InvalidToTarget { line, .. }
            | ParseError::InvalidQueryField { line, .. }
            | ParseError::ForcedRedirectUnsupported { line, .. }
            | ParseError::UnsupportedStatusCode { line, .. }
            | ParseError::InvalidUtf8 { line } => Some(*line),
            ParseError::InputTooLarge { .. } | ParseError::Io(_) => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("scheme '{scheme}' is not allowed; use one of http, https, ipfs, ipns")]
    DisallowedScheme { scheme: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryFieldError {
    #[error("separate different fromQuery arguments with a space (found {count} keys)")]
    NotSinglePair { count: usize },
    #[error("key '{key}' is given {count} values; use a single key=value pair")]
    RepeatedKey { key: String, count: usize },
    #[error("key must not be empty")]
    EmptyKey,
    #[error("key '{key}' contains characters that are not URL-safe")]
    UnsafeKey { key: String },
    #[error("value '{value}' contains characters that are not URL-safe")]
    UnsafeValue { value: String },
    #[error(
        "placeholder ':{name}' must start with a letter or underscore and contain only letters, digits or underscores"
    )]
    InvalidPlaceholderName { name: String },
}

pub type ParseResult<T> = Result<T, ParseError>;
