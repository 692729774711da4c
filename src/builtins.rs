//! Builtin operations and their dispatch.

use lazy_static::lazy_static;
use log::{debug, trace};

use std::collections::HashMap;
use std::fmt;

use crate::error::ExpectedCount::*;
use crate::error::{LangErr, ValueType};
use crate::interpreter;
use crate::value::{Cells, Symbol, Value};


pub type Args = Vec<Value>;
pub type Ret = Result<Value, LangErr>;

#[derive(Clone, Copy)]
pub struct BuiltIn {
    name: &'static str,
    fun: fn(Args) -> Ret,
}

macro_rules! builtins {
    [$($n:tt : $x:expr),* $(,)?] => {
        {
            let mut m = HashMap::new();
            $(
                m.insert($n, BuiltIn::new($n, $x));
            )*
            m
        }
    };
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, BuiltIn> = builtins![
        "list": list,
        "head": head,
        "tail": tail,
        "join": join,
        "eval": eval,
        "+": add,
        "-": sub,
        "*": mul,
        "/": div,
    ];
}


/// Applies the builtin called name to args.
///
/// Always consumes args and always yields exactly one Value; failures come
/// back as Value::Error.
pub fn dispatch(args: Args, name: &str) -> Value {
    let builtin = match BUILTINS.get(name) {
        Some(builtin) => builtin,
        None => {
            debug!("No builtin named \"{}\"; dropping {} args", name, args.len());
            return Value::Error(LangErr::UnknownFunction(Symbol::new(name)));
        }
    };

    trace!("Dispatching {} with {} args", builtin, args.len());
    let result = builtin.call(args);
    if let Err(err) = &result {
        debug!("{} failed: {}", builtin, err);
    }
    result.into()
}

pub fn builtin_names() -> Vec<&'static str> {
    BUILTINS.keys().copied().collect()
}


impl BuiltIn {
    pub fn new(name: &'static str, fun: fn(Args) -> Ret) -> BuiltIn {
        BuiltIn { name, fun }
    }

    pub fn call(&self, args: Args) -> Ret {
        (self.fun)(args)
    }
}

impl fmt::Display for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BUILTIN_{}]", self.name)
    }
}


/// Takes the cells out of a lone Q-Expression argument.
fn single_qexpr(func: &'static str, args: Args) -> Result<Cells, LangErr> {
    let given = args.len();
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(Value::Qexpr(cells)), None) => Ok(cells),
        (Some(other), None) => err!(WrongArgumentType {
            func,
            given: other.value_type(),
            expected: ValueType::Qexpr,
        }),
        _ => err!(WrongArgumentCount {
            func,
            given,
            expected: Exactly(1),
        }),
    }
}

pub fn list(args: Args) -> Ret {
    Ok(Value::Qexpr(args))
}

pub fn head(args: Args) -> Ret {
    let mut cells = single_qexpr("head", args)?;
    if cells.is_empty() {
        return err!(EmptyArgument { func: "head" });
    }

    cells.truncate(1);
    Ok(Value::Qexpr(cells))
}

pub fn tail(args: Args) -> Ret {
    let mut cells = single_qexpr("tail", args)?;
    if cells.is_empty() {
        return err!(EmptyArgument { func: "tail" });
    }

    cells.remove(0);
    Ok(Value::Qexpr(cells))
}

pub fn eval(args: Args) -> Ret {
    let cells = single_qexpr("eval", args)?;
    Ok(interpreter::eval(Value::Sexpr(cells)))
}

pub fn join(args: Args) -> Ret {
    if let Some(arg) = args.iter().find(|arg| !matches!(arg, Value::Qexpr(_))) {
        return err!(WrongArgumentType {
            func: "join",
            given: arg.value_type(),
            expected: ValueType::Qexpr,
        });
    }

    let mut joined = Cells::new();
    for arg in args {
        if let Value::Qexpr(cells) = arg {
            joined.extend(cells);
        }
    }
    Ok(Value::Qexpr(joined))
}


#[derive(Clone, Copy, Debug, PartialEq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    fn name(&self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }
}

/// Left fold of op over args, seeded with the first argument.
///
/// Integer overflow wraps. Division checks each divisor before dividing and
/// abandons the rest of the fold on zero.
fn fold(op: ArithOp, args: Args) -> Ret {
    let nums = args
        .into_iter()
        .map(|arg| match arg {
            Value::Number(num) => Ok(num),
            other => err!(NotANumber {
                given: other.value_type(),
            }),
        })
        .collect::<Result<Vec<i64>, LangErr>>()?;

    let mut nums = nums.into_iter();
    let mut curr = match nums.next() {
        Some(num) => num,
        None => {
            return err!(WrongArgumentCount {
                func: op.name(),
                given: 0,
                expected: AtLeast(1),
            })
        }
    };

    if op == ArithOp::Sub && nums.len() == 0 {
        return Ok(Value::Number(curr.wrapping_neg()));
    }

    for num in nums {
        curr = match op {
            ArithOp::Add => curr.wrapping_add(num),
            ArithOp::Sub => curr.wrapping_sub(num),
            ArithOp::Mul => curr.wrapping_mul(num),
            ArithOp::Div => {
                if num == 0 {
                    return err!(DivideByZero);
                }
                curr.wrapping_div(num)
            }
        };
    }

    Ok(Value::Number(curr))
}

pub fn add(args: Args) -> Ret {
    fold(ArithOp::Add, args)
}

pub fn sub(args: Args) -> Ret {
    fold(ArithOp::Sub, args)
}

pub fn mul(args: Args) -> Ret {
    fold(ArithOp::Mul, args)
}

pub fn div(args: Args) -> Ret {
    fold(ArithOp::Div, args)
}


#[cfg(test)]
#[path = "./builtins_test.rs"]
mod builtins_test;
