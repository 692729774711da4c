//! Representation of errors which are reified as Lispy values.
//!
//! Evaluation never fails in the Rust sense. Every failure is a LangErr
//! carried inside Value::Error and travels through the normal return path.

use std::fmt;

use self::ExpectedCount::*;
use self::LangErr::*;
use crate::value::Symbol;


/// Wraps a LangErr variant in Err.
#[macro_export]
macro_rules! err {
    ($($kind:tt)+) => {
        Err($crate::error::LangErr::$($kind)+)
    };
}


#[derive(Clone, Debug, PartialEq)]
pub enum LangErr {
    InvalidNumber(String),
    NotANumber {
        given: ValueType,
    },
    DivideByZero,
    NotAFunction {
        given: ValueType,
    },
    UnknownFunction(Symbol),
    WrongArgumentCount {
        func: &'static str,
        given: usize,
        expected: ExpectedCount,
    },
    WrongArgumentType {
        func: &'static str,
        given: ValueType,
        expected: ValueType,
    },
    EmptyArgument {
        func: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExpectedCount {
    Exactly(usize),
    AtLeast(usize),
}

/// Variant of a Value, without its payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueType {
    Number,
    Error,
    Symbol,
    Sexpr,
    Qexpr,
}


impl fmt::Display for LangErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidNumber(text) => write!(f, "Invalid number '{}'!", text),
            NotANumber { given } => write!(f, "Cannot operate on non-number! Got {}.", given),
            DivideByZero => write!(f, "Division by Zero!"),
            NotAFunction { .. } => write!(f, "S-expression does not start with symbol!"),
            UnknownFunction(_) => write!(f, "Unknown function!"),
            WrongArgumentCount {
                func,
                given,
                expected,
            } => write!(
                f,
                "Function '{}' passed incorrect number of arguments! Got {}, Expected {}.",
                func, given, expected
            ),
            WrongArgumentType {
                func,
                given,
                expected,
            } => write!(
                f,
                "Function '{}' passed incorrect type! Got {}, Expected {}.",
                func, given, expected
            ),
            EmptyArgument { func } => write!(f, "Function '{}' passed {{}}!", func),
        }
    }
}

impl fmt::Display for ExpectedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exactly(exactly) => write!(f, "{}", exactly),
            AtLeast(minimum) => write!(f, "at least {}", minimum),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Number => "Number",
            ValueType::Error => "Error",
            ValueType::Symbol => "Symbol",
            ValueType::Sexpr => "S-Expression",
            ValueType::Qexpr => "Q-Expression",
        };
        write!(f, "{}", name)
    }
}
