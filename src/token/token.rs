use std::fmt;


#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    // Literal text; range checking happens when the number is read.
    Number(String),
    Symbol(String),
    Comment(String),
}

#[derive(Clone, Debug)]
pub struct Token {
    pub token: TokenKind,
    pub line: usize,
    pub col: usize,
}


impl TokenKind {
    pub fn delimiter(c: char) -> Option<TokenKind> {
        match c {
            '(' => Some(TokenKind::LeftParen),
            ')' => Some(TokenKind::RightParen),
            '{' => Some(TokenKind::LeftBrace),
            '}' => Some(TokenKind::RightBrace),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.token {
            TokenKind::Number(s) | TokenKind::Symbol(s) => {
                write!(f, "{} @ ({}, {})", s, self.line, self.col)
            }
            _ => write!(f, "{:?} @ ({}, {})", self.token, self.line, self.col),
        }
    }
}
