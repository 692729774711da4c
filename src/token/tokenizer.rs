//! Module for breaking Lispy text into tokens.

use std::collections::VecDeque;
use std::fmt;

use super::symbol_policy::{policy_base, SymbolError, WordClass};
use super::token::{Token, TokenKind};


/// Line-oriented tokenizer that accumulates Tokens given string-like input.
///
/// Bracket depth is tracked across calls to tokenize() so that callers can
/// tell when a multi-line expression is still open.
pub struct Tokenizer {
    depth: usize,
    line_count: usize,
    tokens: VecDeque<Token>,
}

#[derive(Debug)]
pub struct TokenizeError {
    line: usize,
    col: usize,
    kind: TokenizeErrorKind,
}

#[derive(Debug)]
pub enum TokenizeErrorKind {
    InvalidSymbol(SymbolError),
}


impl Tokenizer {
    pub fn new() -> Self {
        Self {
            depth: 0,
            line_count: 0,
            tokens: Default::default(),
        }
    }

    pub fn clear(&mut self) {
        self.depth = 0;
        self.tokens.clear();
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn tokenize<S: AsRef<str>>(&mut self, input: S) -> Result<(), TokenizeError> {
        for line in input.as_ref().split('\n') {
            self.tokenize_line(line)?;
        }
        Ok(())
    }

    fn tokenize_line(&mut self, l: &str) -> Result<(), TokenizeError> {
        let mut start: usize = 0;
        let mut empty = true;
        for (i, c) in l.char_indices() {
            if c.is_whitespace() {
                if !empty {
                    self.push_word(&l[start..i], start)?;
                    empty = true;
                }
                continue;
            } else if c == ';' {
                if !empty {
                    self.push_word(&l[start..i], start)?;
                }
                self.tokens.push_back(Token {
                    token: TokenKind::Comment(l[i..].to_string()),
                    line: self.line_count,
                    col: i,
                });
                // Nothing past a comment counts.
                self.line_count += 1;
                return Ok(());
            }

            if let Some(token) = TokenKind::delimiter(c) {
                if !empty {
                    self.push_word(&l[start..i], start)?;
                    empty = true;
                }
                match token {
                    TokenKind::LeftParen | TokenKind::LeftBrace => self.depth += 1,
                    _ => self.depth = self.depth.saturating_sub(1),
                }
                self.tokens.push_back(Token {
                    token,
                    line: self.line_count,
                    col: i,
                });
            } else if empty {
                empty = false;
                start = i;
            }
        }

        // EOL handling.
        if !empty {
            self.push_word(&l[start..], start)?;
        }
        self.line_count += 1;
        Ok(())
    }

    fn push_word(&mut self, word: &str, start: usize) -> Result<(), TokenizeError> {
        let token = match policy_base(word) {
            Ok(WordClass::Number) => TokenKind::Number(word.to_string()),
            Ok(WordClass::Symbol) => TokenKind::Symbol(word.to_string()),
            Err(err) => {
                return Err(TokenizeError {
                    line: self.line_count,
                    col: start,
                    kind: TokenizeErrorKind::InvalidSymbol(err),
                });
            }
        };

        self.tokens.push_back(Token {
            token,
            line: self.line_count,
            col: start,
        });
        Ok(())
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Tokenizer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }
}


impl TokenizeError {
    pub fn kind(&self) -> &TokenizeErrorKind {
        &self.kind
    }

    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TokenizeErrorKind::InvalidSymbol(err) => write!(
                f,
                "[Tokenize Error]: {} @ ({}, {})",
                err, self.line, self.col
            ),
        }
    }
}

impl std::error::Error for TokenizeError {}


#[cfg(test)]
#[path = "./tokenizer_test.rs"]
mod tokenizer_test;
