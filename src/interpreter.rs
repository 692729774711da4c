//! Reduction of Values.

use log::{debug, trace};

use crate::builtins;
use crate::error::LangErr;
use crate::value::{Cells, Value};


/// Reduces value.
///
/// Only S-Expressions reduce; every other Value evaluates to itself.
pub fn eval(value: Value) -> Value {
    match value {
        Value::Sexpr(cells) => eval_sexpr(cells),
        other => other,
    }
}

fn eval_sexpr(cells: Cells) -> Value {
    let mut cells = cells.into_iter().map(eval).collect::<Cells>();

    // First error wins; its siblings are dropped with the rest of cells.
    if let Some(pos) = cells.iter().position(Value::is_error) {
        let err = cells.swap_remove(pos);
        debug!("S-expression reduced to {}", err);
        return err;
    }

    if cells.len() < 2 {
        return cells.pop().unwrap_or_else(Value::sexpr);
    }

    match cells.remove(0) {
        Value::Symbol(symbol) => {
            trace!("Applying {} to {} args", symbol, cells.len());
            builtins::dispatch(cells, symbol.as_str())
        }
        other => Value::Error(LangErr::NotAFunction {
            given: other.value_type(),
        }),
    }
}


#[cfg(test)]
#[path = "./interpreter_test.rs"]
mod interpreter_test;
