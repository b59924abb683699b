//! UTF-8 source buffers and the Iris lexer.

mod lexer;
mod token;

pub use iris_diagnostics::{Error, Location, Result, Source};
pub use lexer::{block_string_value, Lexer};
pub use token::{Token, TokenId, TokenKind};
