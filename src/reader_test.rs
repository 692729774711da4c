use super::*;

use crate::parser::parse;
use crate::value::{render, ToSymbol};


fn read_str(input: &str) -> Value {
    read(&parse(input).unwrap())
}

#[test]
fn numbers() {
    assert_eq!(read_str("42"), Value::Sexpr(vec![Value::Number(42)]));
    assert_eq!(read_str("-9"), Value::Sexpr(vec![Value::Number(-9)]));
    assert_eq!(
        read_str("9223372036854775807 -9223372036854775808"),
        Value::Sexpr(vec![i64::MAX.into(), i64::MIN.into()])
    );
}

#[test]
fn out_of_range_number() {
    assert_eq!(
        read_str("9223372036854775808"),
        Value::Sexpr(vec![Value::Error(LangErr::InvalidNumber(
            "9223372036854775808".to_string()
        ))])
    );
}

#[test]
fn symbols() {
    assert_eq!(
        read_str("+ head"),
        Value::Sexpr(vec!["+".to_symbol().into(), "head".to_symbol().into()])
    );
}

#[test]
fn structure_is_skipped() {
    assert_eq!(render(&read_str("(+ 1 {2 3} ())")), "((+ 1 {2 3} ()))");
    assert_eq!(read_str(""), Value::sexpr());
}

#[test]
fn delimiter_contents_are_skipped() {
    // A node spelled like a bracket is structural whatever its kind says.
    let node = AstNode::branch(
        NodeKind::Qexpr,
        0,
        0,
        vec![
            AstNode::leaf(NodeKind::Symbol, "{", 0, 0),
            AstNode::leaf(NodeKind::Number, "1", 0, 1),
            AstNode::leaf(NodeKind::Symbol, "}", 0, 2),
        ],
    );
    assert_eq!(read(&node), Value::Qexpr(vec![Value::Number(1)]));
}

#[test]
fn input_untouched() {
    let tree = parse("(tail {1 2})").unwrap();
    let copy = tree.clone();
    let _ = read(&tree);
    assert_eq!(tree, copy);
}

#[test]
fn external_json_tree() {
    let json = r#"{
        "kind": "Root",
        "children": [
            {"kind": "Token"},
            {"kind": "Sexpr", "children": [
                {"kind": "Token", "contents": "("},
                {"kind": "Symbol", "contents": "join"},
                {"kind": "Qexpr", "children": [{"kind": "Number", "contents": "1"}]},
                {"kind": "Qexpr", "children": [{"kind": "Number", "contents": "2"}]},
                {"kind": "Token", "contents": ")"}
            ]},
            {"kind": "Token"}
        ]
    }"#;
    let tree: AstNode = serde_json::from_str(json).unwrap();
    assert_eq!(render(&read(&tree)), "((join {1} {2}))");
}
