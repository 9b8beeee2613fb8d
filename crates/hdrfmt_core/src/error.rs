//! Error types for header formatting.

use std::io;
use thiserror::Error;

/// Result type for header formatting operations.
pub type HeaderResult<T> = Result<T, HeaderError>;

/// Errors that can occur while configuring, rendering or writing headers.
///
/// Only [`HeaderError::Io`] ever leaves [`crate::HeaderSerializer::write`].
/// The other variants are recovered locally by the engine and logged.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// A configuration option could not be read or parsed.
    #[error("option '{key}' unavailable: {message}")]
    ConfigField {
        /// The option key.
        key: String,
        /// Description of the failure.
        message: String,
    },

    /// A header referenced by the format is absent from the record.
    #[error("header '{name}' not found in event")]
    HeaderMissing {
        /// Name of the missing header.
        name: String,
    },

    /// A `key=value` assignment could not be parsed.
    #[error("invalid option assignment '{input}': expected key=value")]
    InvalidAssignment {
        /// The rejected input.
        input: String,
    },

    /// Writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl HeaderError {
    /// Create a config field error.
    pub fn config_field(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigField {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a header missing error.
    pub fn header_missing(name: impl Into<String>) -> Self {
        Self::HeaderMissing { name: name.into() }
    }

    /// Create an invalid assignment error.
    pub fn invalid_assignment(input: impl Into<String>) -> Self {
        Self::InvalidAssignment {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = HeaderError::config_field("appendNewline", "not a boolean");
        assert_eq!(
            err.to_string(),
            "option 'appendNewline' unavailable: not a boolean"
        );

        let err = HeaderError::header_missing("hostname");
        assert_eq!(err.to_string(), "header 'hostname' not found in event");
    }

    #[test]
    fn io_errors_convert() {
        let io = io::Error::new(io::ErrorKind::BrokenPipe, "sink closed");
        let err: HeaderError = io.into();
        match err {
            HeaderError::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
