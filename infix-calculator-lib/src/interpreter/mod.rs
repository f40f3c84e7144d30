pub mod error;
pub mod evaluator;
pub mod lexer;
mod operator;
pub mod parser;
pub mod token;

use crate::debug;
use crate::interpreter::error::CalculatorError;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Evaluates the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The computed value of the expression.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::calculate;
///
/// let result = calculate("(2 + 3) * 4");
/// assert_eq!(result.unwrap(), 20.0);
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalculatorError> {
    let tokens = lexer::tokenize(expression);
    debug!(&tokens);
    let postfix_tokens = parser::to_postfix(tokens)?;
    debug!(&postfix_tokens);
    evaluator::evaluate_postfix(postfix_tokens)
}

/// Pretty-prints the given vector of tokens with a space between each token.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::tokens_to_string;
/// use infix_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Number("2".to_string()),
///     Token::Number("3".to_string()),
///     Token::Symbol('+'),
/// ];
/// let pretty_printed_tokens = tokens_to_string(tokens)?;
/// print!("{}", pretty_printed_tokens);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.to_string());
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}
