//! The error type for input the lexer rejects.
use thiserror::Error;

/// Produced by [`lex`](super::lex) for every byte it does not recognise.
///
/// The scanner itself never fails; it marks unrecognised bytes with an
/// illegal token and keeps going. Turning those marks into errors is a
/// caller-side decision.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised character {literal:?}")]
pub struct LexError {
    pub literal: String,
}
