//! Configuration error types.
//!
//! None of these reach the end user. The grid logs them and falls back to an
//! empty default so the host page keeps working.

/// Errors raised while reading a grid's configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The attribute is not valid JSON.
    #[error("data-{attribute} is not valid JSON: {source}")]
    InvalidJson {
        attribute: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The attribute is JSON but not an array.
    #[error("data-{attribute} must be a JSON array")]
    NotAnArray { attribute: &'static str },

    /// Page size is not a positive integer.
    #[error("invalid page size: {0:?}")]
    InvalidPageSize(String),

    /// Grace delay is not a non-negative integer number of milliseconds.
    #[error("invalid grace delay: {0:?}")]
    InvalidGraceDelay(String),
}

impl ConfigError {
    pub(crate) fn json(attribute: &'static str, source: serde_json::Error) -> Self {
        Self::InvalidJson { attribute, source }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
