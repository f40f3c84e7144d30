use crate::interpreter::token::Token;
use itertools::Itertools;

/// Scans the given expression text into a sequence of tokens.
///
/// Whitespace is skipped. A run of digit and decimal-point characters
/// accumulates into a single [`Token::Number`], flushed as soon as any other
/// character (or the end of the input) is reached. Every other non-whitespace
/// character is emitted as a [`Token::Symbol`] without validation here;
/// unrecognised symbols and malformed numbers are rejected by the later
/// stages instead.
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut characters = expression.chars().peekable();

    while let Some(&character) = characters.peek() {
        if character.is_whitespace() {
            characters.next();
        } else if is_numeric(character) {
            let number: String = characters.peeking_take_while(|&c| is_numeric(c)).collect();
            tokens.push(Token::Number(number));
        } else {
            characters.next();
            tokens.push(Token::Symbol(character));
        }
    }

    tokens
}

fn is_numeric(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}
