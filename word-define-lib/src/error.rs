//! Error handling for dictionary lookup operations.
//!
//! This module defines the error type covering the ways a lookup run can
//! fail, from stdin read failures to network errors. Every surfaced error
//! is fatal to the run: there are no retries and no partial output.

use std::fmt;

/// Main error type for dictionary lookup operations.
///
/// Decode failures (`ParseError`) exist in the taxonomy but are recovered
/// locally during response decoding — a malformed body yields zero
/// definitions rather than surfacing an error.
#[derive(Debug, Clone)]
pub enum LookupError {
    /// Failure reading the input word stream mid-read
    InputError { message: String },

    /// Network-related errors (connection, timeout, body read)
    NetworkError {
        message: String,
        source: Option<String>,
    },

    /// JSON parsing errors for dictionary responses
    ParseError {
        message: String,
        content: Option<String>,
    },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl LookupError {
    /// Create a new input error.
    pub fn input<M: Into<String>>(message: M) -> Self {
        Self::InputError {
            message: message.into(),
        }
    }

    /// Create a new network error.
    pub fn network<M: Into<String>>(message: M) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new network error with source information.
    pub fn network_with_source<M: Into<String>, S: Into<String>>(message: M, source: S) -> Self {
        Self::NetworkError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a new parse error.
    pub fn parse<M: Into<String>>(message: M) -> Self {
        Self::ParseError {
            message: message.into(),
            content: None,
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Process exit code for this error kind.
    ///
    /// The run exits non-zero on any error; the code distinguishes the
    /// failure category for scripts wrapping the CLI:
    /// input 2, network 3, parse 4, internal 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputError { .. } => 2,
            Self::NetworkError { .. } => 3,
            Self::ParseError { .. } => 4,
            Self::Internal { .. } => 1,
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputError { message } => {
                write!(f, "Input error: {}", message)
            }
            Self::NetworkError { message, source } => {
                if let Some(source) = source {
                    write!(f, "Network error: {} (source: {})", message, source)
                } else {
                    write!(f, "Network error: {}", message)
                }
            }
            Self::ParseError { message, content: _ } => {
                write!(f, "Parse error: {}", message)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for LookupError {}

// Implement From conversions for common error types
impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("HTTP request timed out", err.to_string())
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err.to_string())
        } else {
            Self::network_with_source("HTTP request failed", err.to_string())
        }
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError {
            message: format!("JSON parsing failed: {}", err),
            content: None,
        }
    }
}

impl From<std::io::Error> for LookupError {
    fn from(err: std::io::Error) -> Self {
        Self::InputError {
            message: format!("I/O error: {}", err),
        }
    }
}
