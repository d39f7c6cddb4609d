//! Functionality for converting source text into a stream of tokens.
mod byte_ext;
mod error;
mod lexer;

pub mod tokens;

pub use error::*;
pub use lexer::*;
