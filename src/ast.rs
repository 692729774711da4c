//! Syntax tree handed from a parser to the reader.
//!
//! Any parser may produce this tree, not just crate::parser. It is serde
//! (de)serializable, so an external parser can supply it as JSON.

use std::fmt;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};


/// Role of a syntax tree node.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum NodeKind {
    /// Implicit program node holding all top-level expressions.
    Root,
    Number,
    Symbol,
    Sexpr,
    Qexpr,
    /// Structural leaf: brackets, anchors, and anything else without meaning
    /// to the evaluator.
    Token,
}

#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize)]
pub struct AstNode {
    kind: NodeKind,
    #[serde(default)]
    contents: String,
    #[serde(default)]
    line: usize,
    #[serde(default)]
    col: usize,
    #[serde(default)]
    children: Vec<AstNode>,
}


impl NodeKind {
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Root => ">",
            NodeKind::Number => "number",
            NodeKind::Symbol => "symbol",
            NodeKind::Sexpr => "sexpr",
            NodeKind::Qexpr => "qexpr",
            NodeKind::Token => "char",
        }
    }
}

impl AstNode {
    pub fn leaf<S: Into<String>>(kind: NodeKind, contents: S, line: usize, col: usize) -> Self {
        Self {
            kind,
            contents: contents.into(),
            line,
            col,
            children: Vec::new(),
        }
    }

    pub fn branch(kind: NodeKind, line: usize, col: usize, children: Vec<AstNode>) -> Self {
        Self {
            kind,
            contents: String::new(),
            line,
            col,
            children,
        }
    }

    pub fn push(&mut self, child: AstNode) {
        self.children.push(child);
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{}", "  ".repeat(depth))?;
        write!(f, "{}:{}:{}", self.kind.tag(), self.line, self.col)?;
        if !self.contents.is_empty() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}


impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl fmt::Display for AstNode {
    /// One node per line, indented by depth.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
