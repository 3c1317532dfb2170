// File: crates/plot-expr/src/error.rs
// Summary: Errors raised while compiling an expression. Positions are byte offsets into the source.

use thiserror::Error;

use crate::parse::MAX_DEPTH;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("malformed number {text:?} at position {pos}")]
    BadNumber { text: String, pos: usize },

    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown name {name:?} at position {pos}")]
    UnknownName { name: String, pos: usize },

    #[error("{name:?} is not a function (position {pos})")]
    NotCallable { name: String, pos: usize },

    #[error("function {name:?} must be called with an argument, e.g. {name}(x)")]
    MissingCall { name: String, pos: usize },

    #[error("function {name:?} takes 1 argument but {given} were given")]
    ArgumentCount { name: String, given: usize },

    #[error("expression nests deeper than {MAX_DEPTH} levels")]
    TooDeep,

    #[error("expression is undefined at every sample")]
    NoFiniteSamples,
}
