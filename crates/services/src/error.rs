//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by a `Transport`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TransportError {
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `SessionStartService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionStartError {
    /// The request body could not be built. `SessionStart` serializes to plain
    /// strings and integers, so this only surfaces if its `Serialize` impl changes.
    #[error("could not encode session start: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors emitted while reading `ApiConfig` from the environment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
    #[error("invalid {var} value: {raw}")]
    Invalid { var: &'static str, raw: String },
}
