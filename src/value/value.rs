//! Module for representing Lispy values.

use std::fmt;

use super::symbol::Symbol;
use crate::error::{LangErr, ValueType};


/// Cells of an S-Expression or Q-Expression.
pub type Cells = Vec<Value>;

/// A Lispy value.
///
/// Composite variants exclusively own their cells. Nothing is shared, so a
/// Value tree is acyclic and is torn down as soon as its owner drops it.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(i64),
    Error(LangErr),
    Symbol(Symbol),
    Sexpr(Cells),
    Qexpr(Cells),
}


impl Value {
    pub fn sexpr() -> Value {
        Value::Sexpr(Cells::new())
    }

    pub fn qexpr() -> Value {
        Value::Qexpr(Cells::new())
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Number(_) => ValueType::Number,
            Value::Error(_) => ValueType::Error,
            Value::Symbol(_) => ValueType::Symbol,
            Value::Sexpr(_) => ValueType::Sexpr,
            Value::Qexpr(_) => ValueType::Qexpr,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Appends to a composite Value. Leaves are returned unchanged.
    pub fn push(mut self, value: Value) -> Value {
        if let Value::Sexpr(cells) | Value::Qexpr(cells) = &mut self {
            cells.push(value);
        }
        self
    }

    /// Writes the textual form of a leaf. Composite Values write nothing.
    pub fn write_leaf<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        match self {
            Value::Number(num) => write!(w, "{}", num),
            Value::Error(err) => write!(w, "Error: {}", err),
            Value::Symbol(symbol) => write!(w, "{}", symbol),
            Value::Sexpr(_) | Value::Qexpr(_) => Ok(()),
        }
    }

    /// Writes self, delegating leaves and brackets to the given writers so
    /// that callers can decorate either (e.g. colour by depth).
    pub fn write_list<W, F, P>(
        &self,
        w: &mut W,
        depth: usize,
        write_leaf: &mut F,
        write_paren: &mut P,
    ) -> fmt::Result
    where
        W: fmt::Write,
        F: FnMut(&mut W, &Value, usize) -> fmt::Result,
        P: FnMut(&mut W, &str, usize) -> fmt::Result,
    {
        let (open, close, cells) = match self {
            Value::Sexpr(cells) => ("(", ")", cells),
            Value::Qexpr(cells) => ("{", "}", cells),
            _ => return write_leaf(w, self, depth),
        };

        write_paren(w, open, depth)?;
        for (pos, cell) in cells.iter().enumerate() {
            if pos > 0 {
                write!(w, " ")?;
            }
            cell.write_list(w, depth + 1, write_leaf, write_paren)?;
        }
        write_paren(w, close, depth)
    }
}

/// Renders value as text.
pub fn render(value: &Value) -> String {
    value.to_string()
}


impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_list(
            f,
            0,
            &mut |writer, leaf, _depth| leaf.write_leaf(writer),
            &mut |writer, paren, _depth| write!(writer, "{}", paren),
        )
    }
}


impl From<i64> for Value {
    fn from(num: i64) -> Self {
        Value::Number(num)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<LangErr> for Value {
    fn from(err: LangErr) -> Self {
        Value::Error(err)
    }
}

/// Lets builtins written as fallible functions hand back a single Value.
impl From<Result<Value, LangErr>> for Value {
    fn from(result: Result<Value, LangErr>) -> Self {
        match result {
            Ok(value) => value,
            Err(err) => Value::Error(err),
        }
    }
}


#[cfg(test)]
#[path = "./value_test.rs"]
mod value_test;
