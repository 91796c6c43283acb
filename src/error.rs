//! Crate-level error taxonomy.
//!
//! Two classes cover everything the core can reject. `InvalidArgument` is a
//! programming-contract violation (unknown part id, slot index out of range)
//! and should fail loudly in development. `IllegalState` means the caller and
//! the state machine disagree about the current phase (placement after the
//! run completed, timer started twice); the state is left untouched so the
//! UI can simply drop the action.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    InvalidArgument(String),
    IllegalState(String),
}

impl GameError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        GameError::InvalidArgument(msg.into())
    }

    pub(crate) fn illegal(msg: impl Into<String>) -> Self {
        GameError::IllegalState(msg.into())
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            GameError::IllegalState(msg) => write!(f, "illegal state: {msg}"),
        }
    }
}

impl std::error::Error for GameError {}
