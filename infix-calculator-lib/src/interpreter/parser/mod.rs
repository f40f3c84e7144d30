mod infix_converter;

use crate::interpreter::error::CalculatorError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;

/// Reorders the given infix tokens into postfix (reverse polish) order,
/// which can be evaluated without any knowledge of precedence or parentheses.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to reorder, in infix format.
///
/// returns: The equivalent tokens in postfix format.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use infix_calculator::interpreter::parser::to_postfix;
/// use infix_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![
///     Token::Number("1".to_string()),
///     Token::Symbol('+'),
///     Token::Number("2".to_string()),
/// ];
/// let postfix_tokens = to_postfix(infix_tokens)?;
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, CalculatorError> {
    infix_to_postfix(infix_tokens)
}
