use thiserror::Error;

/// Everything that can go wrong while evaluating an expression.
///
/// Each failure kind is a separate variant so that callers can match on the
/// kind instead of inspecting message text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// A `)` without a matching `(` on the operator stack, or a `(` still
    /// unmatched at the end of the expression.
    #[error("expression has unbalanced parentheses")]
    UnbalancedParens,
    /// A number token whose text does not parse as a floating-point value.
    #[error("'{0}' is not a valid number")]
    NumberFormat(String),
    /// The expression does not reduce to a single value, or an operator is
    /// missing its operands.
    #[error("expression is malformed")]
    MalformedExpression,
    #[error("division by zero")]
    DivisionByZero,
    /// A symbol that is none of `+`, `-`, `*` or `/`.
    #[error("unknown operator '{0}'")]
    UnknownOperator(char),
}
