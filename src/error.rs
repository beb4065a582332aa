//! Error types for standings-fetch
//!
//! Every pipeline stage returns [`Result`]. Failures propagate with `?` up to
//! the binary's single handler, which prints the message to standard error and
//! exits with the code from [`ToExitCode`].

use thiserror::Error;

/// Result type alias for standings-fetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for standings-fetch
///
/// Each variant carries enough context (the URL, the element index) to
/// diagnose the failure from the message alone.
#[derive(Debug, Error)]
pub enum Error {
    /// Standard input was closed or held no URL
    #[error("No URL was provided on standard input")]
    Input,

    /// The input line is not an absolute http(s) URL
    #[error("The URL provided is malformed: {url} ({reason})")]
    MalformedUrl {
        /// The offending input, as read
        url: String,
        /// Why the URL was rejected
        reason: String,
    },

    /// Transport failure, timeout, or non-2xx status
    #[error("An error occurred while reading the JSON from the URL: {url} ({reason})")]
    Fetch {
        /// The URL being fetched
        url: String,
        /// The underlying cause
        reason: String,
    },

    /// The body is not a well-formed standings array
    #[error("An error occurred while reading the JSON from the URL: {url} ({source})")]
    Parse {
        /// The URL the body came from
        url: String,
        /// What was wrong with the body
        #[source]
        source: ParseError,
    },

    /// Invalid configuration value
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "fetch.timeout")
        key: Option<String>,
    },

    /// I/O error on standard input or standard output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a response body could not be turned into team records
#[derive(Debug, Error)]
pub enum ParseError {
    /// Body is not valid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Body is valid JSON but the root is not an array
    #[error("expected a JSON array at the root, found {found}")]
    NotAnArray {
        /// The kind of JSON value found instead (e.g. "object")
        found: &'static str,
    },

    /// An element of the root array is not a valid team record
    #[error("invalid team record at index {index}: {source}")]
    InvalidRecord {
        /// Zero-based position of the element in the root array
        index: usize,
        /// The decoding failure (missing field, wrong type, out of range)
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Wrap a [`ParseError`] with the URL the body was fetched from
    pub fn parse(url: impl Into<String>, source: ParseError) -> Self {
        Error::Parse {
            url: url.into(),
            source,
        }
    }
}

/// Convert errors to process exit codes
///
/// This trait maps domain errors to the exit code the binary terminates with.
pub trait ToExitCode {
    /// Get the process exit code for this error
    fn exit_code(&self) -> u8;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToExitCode for Error {
    fn exit_code(&self) -> u8 {
        match self {
            Error::Io(_) => 1,
            Error::Input => 2,
            Error::MalformedUrl { .. } => 3,
            Error::Fetch { .. } => 4,
            Error::Parse { .. } => 5,
            Error::Config { .. } => 6,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Io(_) => "io_error",
            Error::Input => "input_error",
            Error::MalformedUrl { .. } => "malformed_url",
            Error::Fetch { .. } => "fetch_error",
            Error::Parse { .. } => "parse_error",
            Error::Config { .. } => "config_error",
        }
    }
}
