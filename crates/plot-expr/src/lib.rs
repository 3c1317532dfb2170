// File: crates/plot-expr/src/lib.rs
// Summary: Restricted expression language for plotted equations.
//
// Only the names in `stdlib` are reachable: trigonometric and inverse
// trigonometric functions, `sqrt`, natural `log`, the constants `pi` and `e`,
// and the sample variable `x`. Everything else fails to compile.

pub mod error;
pub mod eval;
pub mod lex;
pub mod parse;
pub mod sandbox;
pub mod stdlib;

pub use error::ExprError;
pub use parse::{parse, Expr};
pub use sandbox::{CompiledExpr, Sandbox};
pub use stdlib::allowed_names;
