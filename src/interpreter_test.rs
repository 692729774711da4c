use super::*;

use crate::parser::parse;
use crate::reader::read;
use crate::value::render;


fn eval_str(input: &str) -> String {
    render(&eval(read(&parse(input).unwrap())))
}

#[test]
fn self_evaluating() {
    assert_eq!(eval(Value::Number(3)), Value::Number(3));
    assert_eq!(
        eval(Value::Error(LangErr::DivideByZero)),
        Value::Error(LangErr::DivideByZero)
    );

    // Q-Expression cells stay unevaluated.
    let quoted = read(&parse("{(+ 1 2) (foo)}").unwrap());
    assert_eq!(render(&eval(quoted)), "{(+ 1 2) (foo)}");
}

#[test]
fn empty_and_singleton() {
    assert_eq!(eval_str(""), "()");
    assert_eq!(eval_str("()"), "()");
    assert_eq!(eval_str("5"), "5");
    assert_eq!(eval_str("(((5)))"), "5");
    assert_eq!(eval_str("(+)"), "+");
    assert_eq!(eval_str("{}"), "{}");
}

#[test]
fn top_level_is_sexpr() {
    assert_eq!(eval_str("+ 1 2"), "3");
    assert_eq!(eval_str("(+ 1 2)"), "3");
}

#[test]
fn nested_reduction() {
    assert_eq!(eval_str("(* (+ 1 1) (- 10 4))"), "12");
    assert_eq!(eval_str("(head (list (+ 1 1) 3))"), "{2}");
}

#[test]
fn singleton_is_never_applied() {
    // (foo) collapses to the symbol foo instead of calling it.
    assert_eq!(eval_str("(foo)"), "foo");
    assert_eq!(
        eval_str("(+ 1 (foo))"),
        "Error: Cannot operate on non-number! Got Symbol."
    );
    assert_eq!(eval_str("(+ 1 (foo) (/ 1 0))"), "Error: Division by Zero!");
}

#[test]
fn leading_non_symbol() {
    assert_eq!(
        eval_str("(1 2 3)"),
        "Error: S-expression does not start with symbol!"
    );
    assert_eq!(
        eval_str("({head} {1})"),
        "Error: S-expression does not start with symbol!"
    );
}

#[test]
fn first_error_wins() {
    assert_eq!(eval_str("(+ 1 (/ 1 0) (foo))"), "Error: Division by Zero!");
    assert_eq!(eval_str("(+ 1 (foo 1) (/ 1 0))"), "Error: Unknown function!");
    // An error head beats the not-a-function check.
    assert_eq!(eval_str("((foo 1) 2)"), "Error: Unknown function!");
}

#[test]
fn invalid_number_propagates() {
    assert_eq!(
        eval_str("(+ 1 99999999999999999999)"),
        "Error: Invalid number '99999999999999999999'!"
    );
}

#[test]
fn eval_builtin_reenters() {
    assert_eq!(eval_str("(eval {+ 1 2})"), "3");
    assert_eq!(eval_str("(eval (head {(+ 1 2) (+ 10 20)}))"), "3");
    assert_eq!(
        eval_str("(eval {1 2 3})"),
        "Error: S-expression does not start with symbol!"
    );
    assert_eq!(eval_str("(eval (tail {tail tail {5 6 7}}))"), "{6 7}");
}
