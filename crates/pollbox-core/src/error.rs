//! Shared error type across pollbox crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Missing or invalid configuration.
    ConfigInvalid,
    /// Counter store unreachable or a store command failed.
    StoreUnavailable,
    /// Vote target does not name one of the configured options.
    InvalidVoteTarget,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in error responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ConfigInvalid => "CONFIG_INVALID",
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::InvalidVoteTarget => "INVALID_VOTE_TARGET",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PollError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("configuration: {0}")]
    Config(String),
    #[error("counter store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("invalid vote target: {0}")]
    InvalidVoteTarget(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PollError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PollError::Config(_) => ClientCode::ConfigInvalid,
            PollError::StoreUnavailable(_) => ClientCode::StoreUnavailable,
            PollError::InvalidVoteTarget(_) => ClientCode::InvalidVoteTarget,
            PollError::Internal(_) => ClientCode::Internal,
        }
    }
}
