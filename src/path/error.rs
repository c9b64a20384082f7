use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path is empty")]
    Empty,
    #[error("'from' path must begin with '/' (got '{input}')")]
    MissingLeadingSlash { input: String },
    #[error("'from' path can only contain one splat (found {count} in '{input}')")]
    MultipleSplats { input: String, count: usize },
    #[error("'from' path can only end with splat (found '*' at index {index} in '{input}')")]
    SplatNotTerminal { input: String, index: usize },
    #[error(
        "placeholder ':{name}' in '{input}' must start with a letter or underscore and contain only letters, digits or underscores"
    )]
    InvalidPlaceholderName { input: String, name: String },
    #[error("path contains control or whitespace byte {byte} in '{input}'")]
    ControlOrWhitespace { input: String, byte: u8 },
    #[error("path contains invalid percent-encoding at index {index} in '{input}'")]
    InvalidPercentEncoding { input: String, index: usize },
}

pub type PathResult<T> = Result<T, PathError>;
