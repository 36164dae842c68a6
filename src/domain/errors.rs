//! Domain errors for the coeffbot session flow.

use thiserror::Error;

/// Why a free-text message could not be read as a list of multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no values in message")]
    Empty,

    #[error("not a number: {token:?}")]
    InvalidNumber { token: String },

    #[error("not a finite number: {token:?}")]
    NonFinite { token: String },
}

/// Errors recovered at the handler boundary and turned into a reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid input: {0}")]
    Parse(#[from] ParseError),

    #[error("history is empty")]
    EmptyHistory,
}

pub type SessionResult<T> = Result<T, SessionError>;
