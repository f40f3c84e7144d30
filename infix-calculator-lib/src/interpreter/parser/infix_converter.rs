use crate::interpreter::error::CalculatorError;
use crate::interpreter::operator;
use crate::interpreter::token::Token;
use std::collections::VecDeque;

/// Shunting-yard conversion from infix to postfix token order.
pub(crate) fn infix_to_postfix(original_tokens: Vec<Token>) -> Result<Vec<Token>, CalculatorError> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<Token> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) => output.push(token),
            Token::Symbol('(') => operators.push_front(token),
            Token::Symbol(')') => pop_until_open_parenthesis(&mut operators, &mut output)?,
            Token::Symbol(symbol) => {
                pop_higher_precedence_operators(&mut operators, &mut output, symbol)
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), CalculatorError> {
    while let Some(operator) = operators.pop_front() {
        match operator {
            Token::Symbol('(') => {
                return Err(CalculatorError::UnbalancedParens);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn pop_until_open_parenthesis(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
) -> Result<(), CalculatorError> {
    loop {
        match operators.pop_front() {
            None => {
                return Err(CalculatorError::UnbalancedParens);
            }
            Some(Token::Symbol('(')) => {
                // Discard the open parenthesis.
                return Ok(());
            }
            Some(operator) => output.push(operator),
        }
    }
}

/// Pops operators with a precedence greater than or equal to the incoming
/// symbol's into the output, then pushes the incoming symbol. Equal
/// precedence pops first, which keeps operators on one level left-associative.
fn pop_higher_precedence_operators(
    operators: &mut VecDeque<Token>,
    output: &mut Vec<Token>,
    symbol: char,
) {
    while let Some(&Token::Symbol(top_of_operator_stack)) = operators.front() {
        if operator::precedence(top_of_operator_stack) < operator::precedence(symbol) {
            break;
        }
        operators.pop_front();
        output.push(Token::Symbol(top_of_operator_stack));
    }

    operators.push_front(Token::Symbol(symbol));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = [
            Token::Number("1".to_string()),
            Token::Symbol('+'),
            Token::Number("2".to_string()),
        ]
        .to_vec();
        let postfix = [
            Token::Number("1".to_string()),
            Token::Number("2".to_string()),
            Token::Symbol('+'),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = [
            Token::Number("1".to_string()),
            Token::Symbol('-'),
            Token::Symbol('('),
            Token::Number("2".to_string()),
            Token::Symbol('+'),
            Token::Number("3".to_string()),
            Token::Symbol(')'),
        ]
        .to_vec();
        let postfix = [
            Token::Number("1".to_string()),
            Token::Number("2".to_string()),
            Token::Number("3".to_string()),
            Token::Symbol('+'),
            Token::Symbol('-'),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let infix = [
            Token::Number("1".to_string()),
            Token::Symbol('+'),
            Token::Number("2".to_string()),
            Token::Symbol('*'),
            Token::Number("3".to_string()),
            Token::Symbol('-'),
            Token::Number("4".to_string()),
        ]
        .to_vec();
        let postfix = [
            Token::Number("1".to_string()),
            Token::Number("2".to_string()),
            Token::Number("3".to_string()),
            Token::Symbol('*'),
            Token::Symbol('+'),
            Token::Number("4".to_string()),
            Token::Symbol('-'),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_equal_precedence_pops_left_to_right() {
        // 10 / 2 / 5
        let infix = [
            Token::Number("10".to_string()),
            Token::Symbol('/'),
            Token::Number("2".to_string()),
            Token::Symbol('/'),
            Token::Number("5".to_string()),
        ]
        .to_vec();
        let postfix = [
            Token::Number("10".to_string()),
            Token::Number("2".to_string()),
            Token::Symbol('/'),
            Token::Number("5".to_string()),
            Token::Symbol('/'),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let infix = [
            Token::Number("1".to_string()),
            Token::Symbol('+'),
            Token::Symbol('('),
            Token::Symbol('('),
            Token::Number("2".to_string()),
            Token::Symbol('+'),
            Token::Number("3".to_string()),
            Token::Symbol(')'),
            Token::Symbol('*'),
            Token::Number("4".to_string()),
            Token::Symbol(')'),
        ]
        .to_vec();
        let postfix = [
            Token::Number("1".to_string()),
            Token::Number("2".to_string()),
            Token::Number("3".to_string()),
            Token::Symbol('+'),
            Token::Number("4".to_string()),
            Token::Symbol('*'),
            Token::Symbol('+'),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_unmatched_closing_parenthesis_should_return_err() {
        // 1 + 2)
        let infix = [
            Token::Number("1".to_string()),
            Token::Symbol('+'),
            Token::Number("2".to_string()),
            Token::Symbol(')'),
        ]
        .to_vec();

        let error = infix_to_postfix(infix).unwrap_err();

        assert_eq!(error, CalculatorError::UnbalancedParens)
    }

    #[test]
    fn infix_to_postfix_unclosed_opening_parenthesis_should_return_err() {
        // (1 + 2
        let infix = [
            Token::Symbol('('),
            Token::Number("1".to_string()),
            Token::Symbol('+'),
            Token::Number("2".to_string()),
        ]
        .to_vec();

        let error = infix_to_postfix(infix).unwrap_err();

        assert_eq!(error, CalculatorError::UnbalancedParens)
    }

    #[test]
    fn infix_to_postfix_operator_stack_never_pops_past_open_parenthesis() {
        // (1 + 2) * 3
        let infix = [
            Token::Symbol('('),
            Token::Number("1".to_string()),
            Token::Symbol('+'),
            Token::Number("2".to_string()),
            Token::Symbol(')'),
            Token::Symbol('*'),
            Token::Number("3".to_string()),
        ]
        .to_vec();
        let postfix = [
            Token::Number("1".to_string()),
            Token::Number("2".to_string()),
            Token::Symbol('+'),
            Token::Number("3".to_string()),
            Token::Symbol('*'),
        ]
        .to_vec();

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }
}
