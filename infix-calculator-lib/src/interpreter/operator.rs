use crate::interpreter::error::CalculatorError;

/// Precedence level of the given operator symbol.
///
/// `(` only ever sits on the operator stack as a sentinel, so it gets the
/// lowest level. Symbols outside the recognised set share that zero level:
/// they travel through conversion unchallenged and fail during evaluation as
/// [`CalculatorError::UnknownOperator`].
pub(crate) fn precedence(symbol: char) -> u8 {
    match symbol {
        '+' | '-' => 1,
        '*' | '/' => 2,
        _ => 0,
    }
}

/// Applies a binary operator with `a` as the left operand and `b` as the
/// right operand, preserving the textual left-to-right operand order.
pub(crate) fn apply(symbol: char, a: f64, b: f64) -> Result<f64, CalculatorError> {
    match symbol {
        '+' => Ok(a + b),
        '-' => Ok(a - b),
        '*' => Ok(a * b),
        '/' if b == 0.0 => Err(CalculatorError::DivisionByZero),
        '/' => Ok(a / b),
        symbol => Err(CalculatorError::UnknownOperator(symbol)),
    }
}
