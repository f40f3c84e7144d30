use crate::interpreter::error::CalculatorError;
use crate::interpreter::operator;
use crate::interpreter::token::Token;

/// Computes the value of the given postfix-ordered tokens.
///
/// Numbers are parsed and pushed onto a value stack; each operator pops its
/// two operands (right operand on top) and pushes the result back. A valid
/// expression leaves exactly one value on the stack at the end.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The value the tokens reduce to.
pub fn evaluate_postfix(postfix_tokens: Vec<Token>) -> Result<f64, CalculatorError> {
    let mut values: Vec<f64> = vec![];

    for token in postfix_tokens {
        match token {
            Token::Number(text) => values.push(parse_number(text)?),
            Token::Symbol(symbol) => {
                let b = values.pop().ok_or(CalculatorError::MalformedExpression)?;
                let a = values.pop().ok_or(CalculatorError::MalformedExpression)?;
                values.push(operator::apply(symbol, a, b)?);
            }
        }
    }

    match values.as_slice() {
        [value] => Ok(*value),
        _ => Err(CalculatorError::MalformedExpression),
    }
}

fn parse_number(text: String) -> Result<f64, CalculatorError> {
    text.parse::<f64>()
        .map_err(|_| CalculatorError::NumberFormat(text))
}
