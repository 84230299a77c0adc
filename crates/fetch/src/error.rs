//! Error types for the fetch crate.

use thiserror::Error;

/// Errors from building a [`JsonFetcher`](crate::JsonFetcher) or loading its
/// configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configured header name or value is not valid HTTP.
    #[error("invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {reason}")]
    ClientBuild { reason: String },

    /// The configuration file could not be parsed.
    #[error("failed to parse config: {reason}")]
    Parse { reason: String },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Create an invalid header error.
    pub fn invalid_header(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a client build error.
    pub fn client_build(reason: impl Into<String>) -> Self {
        Self::ClientBuild {
            reason: reason.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }
}

/// Errors from a single fetch.
///
/// `E` is the error type of the caller's conversion. It is carried through
/// untouched in [`FetchError::Conversion`], so its message and data survive.
#[derive(Error, Debug)]
pub enum FetchError<E> {
    /// The URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The server answered with a non-success status.
    #[error("Response status: {0}")]
    Status(u16),

    /// The request never produced a response (connect failure, timeout).
    #[error("transport failed: {reason}")]
    Transport { reason: String },

    /// The body was not valid JSON.
    #[error("invalid JSON body: {reason}")]
    Decode { reason: String },

    /// The caller's conversion rejected the decoded body.
    #[error("{0}")]
    Conversion(E),
}

impl<E> FetchError<E> {
    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a transport error.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    /// The conversion error, if that is what failed.
    pub const fn as_conversion(&self) -> Option<&E> {
        match self {
            Self::Conversion(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the machine-readable error code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidUrl { .. } => "INVALID_URL",
            Self::Status(_) => "HTTP_STATUS",
            Self::Transport { .. } => "TRANSPORT",
            Self::Decode { .. } => "DECODE",
            Self::Conversion(_) => "CONVERSION",
        }
    }
}
