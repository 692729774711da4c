//! Classification of bare words into numbers and symbols.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;


lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref SYMBOL: Regex = Regex::new(r"^[a-zA-Z0-9_+\-*/\\=<>!&]+$").unwrap();
}

#[derive(Debug, PartialEq)]
pub enum SymbolError {
    InvalidCharacter(String),
}

#[derive(Debug, PartialEq)]
pub enum WordClass {
    Number,
    Symbol,
}


pub fn policy_base(s: &str) -> Result<WordClass, SymbolError> {
    if NUMBER.is_match(s) {
        Ok(WordClass::Number)
    } else if SYMBOL.is_match(s) {
        Ok(WordClass::Symbol)
    } else {
        Err(SymbolError::InvalidCharacter(s.to_string()))
    }
}


impl fmt::Display for SymbolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolError::InvalidCharacter(s) => write!(f, "invalid symbol \"{}\"", s),
        }
    }
}
