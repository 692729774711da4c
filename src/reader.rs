//! Conversion of syntax trees into Values.

use log::trace;

use crate::ast::{AstNode, NodeKind};
use crate::error::LangErr;
use crate::value::{Cells, Symbol, Value};


/// Builds the Value for node; never modifies node.
///
/// Anything that is neither a number nor a symbol is composite: a Qexpr
/// node becomes a Q-Expression and everything else (the Root included)
/// becomes an S-Expression.
pub fn read(node: &AstNode) -> Value {
    match node.kind() {
        NodeKind::Number => read_number(node.contents()),
        NodeKind::Symbol => Value::Symbol(Symbol::new(node.contents())),
        NodeKind::Qexpr => Value::Qexpr(read_cells(node)),
        NodeKind::Root | NodeKind::Sexpr | NodeKind::Token => Value::Sexpr(read_cells(node)),
    }
}

fn read_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(num) => Value::Number(num),
        Err(err) => {
            trace!("Rejecting number literal {:?}: {}", text, err);
            Value::Error(LangErr::InvalidNumber(text.to_string()))
        }
    }
}

fn read_cells(node: &AstNode) -> Cells {
    node.children()
        .iter()
        .filter(|child| !is_structural(child))
        .map(read)
        .collect()
}

fn is_structural(node: &AstNode) -> bool {
    *node.kind() == NodeKind::Token || matches!(node.contents().as_str(), "(" | ")" | "{" | "}")
}


#[cfg(test)]
#[path = "./reader_test.rs"]
mod reader_test;
