//! Lispy: a small Lisp-family expression evaluator.
//!
//! One input is parsed into an ast::AstNode, read into a value::Value,
//! reduced by interpreter::eval, and rendered back to text. Nothing is kept
//! between inputs.
//!
//! Note that this crate does *not* set up logging; clients should take care
//! of that. See: https://github.com/rust-lang/log#in-executables.

#[macro_use]
pub mod error;

pub mod ast;
pub mod builtins;
pub mod interpreter;
pub mod parser;
pub mod reader;
pub mod token;
pub mod value;

pub use crate::value::render;

use crate::ast::AstNode;
use crate::parser::SyntaxError;
use crate::value::Value;

pub mod prelude {
    pub use crate::ast::{AstNode, NodeKind};
    pub use crate::error::{ExpectedCount, LangErr, ValueType};
    pub use crate::parser::{parse, SyntaxError};
    pub use crate::value::{render, Cells, Symbol, ToSymbol, Value};
    pub use crate::{eval_line, eval_tree};
}


/// Reads and reduces a syntax tree produced by any parser.
pub fn eval_tree(node: &AstNode) -> Value {
    interpreter::eval(reader::read(node))
}

/// Parses and reduces one input.
///
/// All top-level expressions of the input form a single S-Expression, so
/// "+ 1 2" gives 3 and an empty input gives ().
pub fn eval_line<S: AsRef<str>>(input: S) -> Result<Value, SyntaxError> {
    let tree = parser::parse(input)?;
    Ok(eval_tree(&tree))
}
