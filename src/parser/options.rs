use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 64 KiB
pub const MAX_INPUT_SIZE: usize = 65536;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    /// Upper bound on the whole input, in bytes.
    pub max_input_size: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_input_size: MAX_INPUT_SIZE,
        }
    }
}

impl ParserOptions {
    pub fn builder() -> ParserOptionsBuilder {
        ParserOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ParserOptionsError> {
        if self.max_input_size == 0 {
            return Err(ParserOptionsError::MaxInputSizeInvalid { provided: 0 });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct ParserOptionsBuilder {
    options: ParserOptions,
}

impl ParserOptionsBuilder {
    pub fn max_input_size(mut self, value: usize) -> Self {
        self.options.max_input_size = value;
        self
    }

    pub fn build(self) -> Result<ParserOptions, ParserOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserOptionsError {
    #[error("max_input_size must be at least 1 (got {provided})")]
    MaxInputSizeInvalid { provided: usize },
}
