// ============================================================================
// Expression Module
// Constrained arithmetic over exact decimals
// ============================================================================
//
// Pipeline: text -> tokens -> postfix (shunting-yard) -> value
//
// Grammar accepted:
// - unsigned decimal literals ("12", "12.5", ".5", "5.")
// - binary operators + - * / with the usual precedence, left associative
// - unary + and - in prefix position
// - parentheses
// - whitespace between tokens
//
// Nothing else is evaluated: no identifiers, no function calls, no
// exponentiation.

mod errors;
mod eval;
mod lexer;
mod rpn;

pub use errors::{ExprError, ExprResult};
pub use eval::evaluate_postfix;
pub use lexer::{tokenize, Token, TokenBuffer, TokenKind};
pub use rpn::{to_postfix, BinaryOp, Postfix, PostfixItem};

use rust_decimal::Decimal;

/// Evaluate an arithmetic expression written with `.` as fractional mark.
///
/// # Example
/// ```
/// use decimal_entry::expr::evaluate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(evaluate("2+2").unwrap(), Decimal::from(4));
/// assert_eq!(evaluate("(1.5 + 0.5) * -3").unwrap(), Decimal::from(-6));
/// ```
pub fn evaluate(expression: &str) -> ExprResult<Decimal> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    evaluate_postfix(&postfix)
}
