//! Error taxonomy of the measures
//!
//! None of these are fatal: configuration errors leave a unit in a degraded
//! default state, transport errors clear the snapshot, derivation errors
//! zero a single field.

use jellyfin_nowplaying_types::ParseFieldKindError;
use thiserror::Error;

/// Problem found while applying a measure's configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("PlayerType={0} not valid")]
    UnknownFieldKind(String),

    #[error("PlayerName={0} not valid")]
    UnresolvedTarget(String),

    #[error("missing JellyfinToken")]
    MissingToken,
}

impl From<ParseFieldKindError> for ConfigError {
    fn from(err: ParseFieldKindError) -> Self {
        ConfigError::UnknownFieldKind(err.0)
    }
}

/// Failure to obtain or decode the session list
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("server answered with HTTP status {0}")]
    Status(u16),

    #[error("failed to read HTTP body: {0}")]
    Body(String),

    #[error("malformed session list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure to derive a single snapshot field from a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    #[error("missing field {0}")]
    MissingField(&'static str),

    #[error("field {field} is not {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("field {0} is an empty list")]
    EmptyList(&'static str),

    #[error("field {field} value {value} is out of range")]
    OutOfRange { field: &'static str, value: i64 },

    #[error("division by zero computing {0}")]
    DivideByZero(&'static str),
}
