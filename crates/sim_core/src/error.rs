//! Error type shared by the game core and the engines built on it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    /// Self-loop, out-of-range vertex or already-colored edge.
    #[error("cannot color edge between {a} and {b}: {reason}")]
    InvalidMove { a: u8, b: u8, reason: &'static str },

    /// A state the rules make impossible, e.g. a full board without a triangle.
    #[error("internal consistency failure: {0}")]
    InternalConsistency(String),

    #[error("game already over")]
    GameOver,

    #[error("cannot parse '{input}': {message}")]
    Notation { input: String, message: String },
}

pub type Result<T> = std::result::Result<T, SimError>;
