//! Module for parsing Lispy tokens into a syntax tree.

use std::fmt;

use crate::ast::{AstNode, NodeKind};
use crate::token::{Token, TokenKind, TokenizeError, Tokenizer};

use self::ParseErrorReason::*;

const MAX_DEPTH: usize = 128;


/// Builds the Root AstNode of one input from its tokens.
///
/// Brackets are kept in the tree as Token leaves and the Root is framed by
/// empty Token anchors; the reader is expected to skip all of them.
pub struct Parser {
    // Bottom is always the Root.
    current: Vec<AstNode>,
    max_current_len: usize,
    last_pos: (usize, usize),
}

#[derive(Debug, PartialEq)]
pub enum ParseErrorReason {
    DepthOverflow,
    UnmatchedOpen,
    UnmatchedClose,
    MismatchedClose,
}

#[derive(Debug)]
pub struct ParseError {
    reason: ParseErrorReason,
    line: usize,
    col: usize,
}

#[derive(Debug)]
pub enum SyntaxError {
    Tokenize(TokenizeError),
    Parse(ParseError),
}


/// Tokenizes and parses input into a Root AstNode.
pub fn parse<S: AsRef<str>>(input: S) -> Result<AstNode, SyntaxError> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.tokenize(input)?;
    Ok(Parser::parse_tokens(tokenizer)?)
}


impl Parser {
    pub fn new() -> Self {
        let root = AstNode::branch(
            NodeKind::Root,
            0,
            0,
            vec![AstNode::leaf(NodeKind::Token, "", 0, 0)],
        );
        Self {
            current: vec![root],
            max_current_len: MAX_DEPTH + 1,
            last_pos: (0, 0),
        }
    }

    pub fn parse_tokens<I>(tokens: I) -> Result<AstNode, ParseError>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut parser = Parser::new();
        for token in tokens {
            parser.parse_token(token)?;
        }
        parser.finish()
    }

    pub fn parse_token(&mut self, token: Token) -> Result<(), ParseError> {
        let (line, col) = (token.line, token.col);
        self.last_pos = (line, col);
        match token.token {
            TokenKind::LeftParen => self.open(NodeKind::Sexpr, "(", line, col)?,
            TokenKind::LeftBrace => self.open(NodeKind::Qexpr, "{", line, col)?,
            TokenKind::RightParen => self.close(NodeKind::Sexpr, ")", line, col)?,
            TokenKind::RightBrace => self.close(NodeKind::Qexpr, "}", line, col)?,
            TokenKind::Number(text) => {
                self.append(AstNode::leaf(NodeKind::Number, text, line, col));
            }
            TokenKind::Symbol(text) => {
                self.append(AstNode::leaf(NodeKind::Symbol, text, line, col));
            }
            TokenKind::Comment(_) => {
                // Comments carry no meaning past this point.
            }
        }

        Ok(())
    }

    pub fn finish(mut self) -> Result<AstNode, ParseError> {
        if self.current.len() > 1 {
            let open = &self.current[self.current.len() - 1];
            return Err(ParseError::new(UnmatchedOpen, *open.line(), *open.col()));
        }

        let (line, col) = self.last_pos;
        let mut root = self.current.remove(0);
        root.push(AstNode::leaf(NodeKind::Token, "", line, col));
        Ok(root)
    }

    fn open(
        &mut self,
        kind: NodeKind,
        open: &str,
        line: usize,
        col: usize,
    ) -> Result<(), ParseError> {
        if self.current.len() >= self.max_current_len {
            return Err(ParseError::new(DepthOverflow, line, col));
        }
        self.current.push(AstNode::branch(
            kind,
            line,
            col,
            vec![AstNode::leaf(NodeKind::Token, open, line, col)],
        ));
        Ok(())
    }

    fn close(
        &mut self,
        kind: NodeKind,
        close: &str,
        line: usize,
        col: usize,
    ) -> Result<(), ParseError> {
        // Never pop the Root.
        if self.current.len() == 1 {
            return Err(ParseError::new(UnmatchedClose, line, col));
        }
        let mut closed = match self.current.pop() {
            Some(closed) => closed,
            None => return Err(ParseError::new(UnmatchedClose, line, col)),
        };
        if *closed.kind() != kind {
            return Err(ParseError::new(MismatchedClose, line, col));
        }
        closed.push(AstNode::leaf(NodeKind::Token, close, line, col));
        self.append(closed);
        Ok(())
    }

    fn append(&mut self, node: AstNode) {
        if let Some(top) = self.current.last_mut() {
            top.push(node);
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}


impl ParseError {
    fn new(reason: ParseErrorReason, line: usize, col: usize) -> Self {
        Self { reason, line, col }
    }

    pub fn reason(&self) -> &ParseErrorReason {
        &self.reason
    }

    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Parse Error]: {:?} @ ({}, {})",
            self.reason, self.line, self.col
        )
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxError::Tokenize(err) => write!(f, "{}", err),
            SyntaxError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SyntaxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyntaxError::Tokenize(err) => Some(err),
            SyntaxError::Parse(err) => Some(err),
        }
    }
}

impl From<TokenizeError> for SyntaxError {
    fn from(err: TokenizeError) -> Self {
        SyntaxError::Tokenize(err)
    }
}

impl From<ParseError> for SyntaxError {
    fn from(err: ParseError) -> Self {
        SyntaxError::Parse(err)
    }
}


#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;
