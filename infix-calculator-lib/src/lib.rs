//! Evaluates arithmetic expressions written in ordinary infix notation.
//!
//! An expression passes through three stages: the lexer splits the text into
//! tokens, the parser reorders them into postfix form using the shunting-yard
//! algorithm, and the evaluator reduces the postfix sequence to a single
//! `f64` on a value stack.

pub mod interpreter;

pub use crate::interpreter::calculate;
pub use crate::interpreter::error::CalculatorError;
