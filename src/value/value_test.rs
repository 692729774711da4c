use super::*;

use std::fmt::Write;

use crate::error::{ExpectedCount, LangErr, ValueType};
use crate::value::ToSymbol;


fn qexpr(cells: Vec<Value>) -> Value {
    Value::Qexpr(cells)
}

fn sexpr(cells: Vec<Value>) -> Value {
    Value::Sexpr(cells)
}

#[test]
fn leaves() {
    assert_eq!(render(&Value::Number(42)), "42");
    assert_eq!(render(&Value::Number(-7)), "-7");
    assert_eq!(render(&Value::Symbol("head".to_symbol())), "head");
    assert_eq!(
        render(&Value::Error(LangErr::DivideByZero)),
        "Error: Division by Zero!"
    );
}

#[test]
fn empty_composites() {
    assert_eq!(render(&Value::sexpr()), "()");
    assert_eq!(render(&Value::qexpr()), "{}");
}

#[test]
fn nested() {
    let value = sexpr(vec![
        "+".to_symbol().into(),
        Value::Number(1),
        qexpr(vec![Value::Number(2), sexpr(vec![]), qexpr(vec![Value::Number(3)])]),
    ]);
    assert_eq!(render(&value), "(+ 1 {2 () {3}})");
}

#[test]
fn error_messages() {
    let cases = vec![
        (
            LangErr::InvalidNumber("99999999999999999999".to_string()),
            "Error: Invalid number '99999999999999999999'!",
        ),
        (
            LangErr::NotANumber {
                given: ValueType::Qexpr,
            },
            "Error: Cannot operate on non-number! Got Q-Expression.",
        ),
        (
            LangErr::NotAFunction {
                given: ValueType::Number,
            },
            "Error: S-expression does not start with symbol!",
        ),
        (
            LangErr::UnknownFunction("foo".to_symbol()),
            "Error: Unknown function!",
        ),
        (
            LangErr::WrongArgumentCount {
                func: "head",
                given: 2,
                expected: ExpectedCount::Exactly(1),
            },
            "Error: Function 'head' passed incorrect number of arguments! Got 2, Expected 1.",
        ),
        (
            LangErr::WrongArgumentType {
                func: "tail",
                given: ValueType::Sexpr,
                expected: ValueType::Qexpr,
            },
            "Error: Function 'tail' passed incorrect type! Got S-Expression, Expected Q-Expression.",
        ),
        (
            LangErr::EmptyArgument { func: "head" },
            "Error: Function 'head' passed {}!",
        ),
    ];
    for (err, expected) in cases {
        assert_eq!(render(&Value::Error(err)), expected);
    }
}

#[test]
fn write_list_decorations() {
    let value = sexpr(vec![Value::Number(1), qexpr(vec![Value::Number(2)])]);
    let mut out = String::new();
    value
        .write_list(
            &mut out,
            0,
            &mut |w, leaf, depth| {
                write!(w, "<")?;
                leaf.write_leaf(w)?;
                write!(w, ":{}>", depth)
            },
            &mut |w, paren, depth| write!(w, "{}{}", paren, depth),
        )
        .unwrap();
    assert_eq!(out, "(0<1:1> {1<2:2>}1)0");
}

#[test]
fn push_into_composite_only() {
    let value = Value::qexpr().push(Value::Number(1)).push(Value::Number(2));
    assert_eq!(value, qexpr(vec![Value::Number(1), Value::Number(2)]));
    assert_eq!(Value::Number(5).push(Value::Number(1)), Value::Number(5));
}

#[test]
fn fallible_into_value() {
    let ok: Result<Value, LangErr> = Ok(Value::Number(1));
    let bad: Result<Value, LangErr> = Err(LangErr::DivideByZero);
    assert_eq!(Value::from(ok), Value::Number(1));
    assert_eq!(Value::from(bad), Value::Error(LangErr::DivideByZero));
}
