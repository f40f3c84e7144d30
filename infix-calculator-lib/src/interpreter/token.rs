use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    /// An unparsed run of digit and decimal-point characters, e.g. `12.5`.
    Number(String),
    /// A single non-numeric, non-whitespace character, e.g. `+` or `(`.
    Symbol(char),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Symbol(symbol) => write!(f, "{}", symbol),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
