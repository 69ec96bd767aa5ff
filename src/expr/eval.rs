// ============================================================================
// Postfix Evaluation
// ============================================================================

use super::errors::{ExprError, ExprResult};
use super::rpn::{BinaryOp, PostfixItem};
use crate::numeric::NumericError;
use rust_decimal::Decimal;
use smallvec::SmallVec;

fn apply(op: BinaryOp, lhs: Decimal, rhs: Decimal) -> ExprResult<Decimal> {
    let result = match op {
        BinaryOp::Add => lhs.checked_add(rhs),
        BinaryOp::Sub => lhs.checked_sub(rhs),
        BinaryOp::Mul => lhs.checked_mul(rhs),
        BinaryOp::Div => {
            if rhs.is_zero() {
                return Err(NumericError::DivisionByZero.into());
            }
            lhs.checked_div(rhs)
        },
    };
    result.ok_or(ExprError::Arithmetic(NumericError::Overflow))
}

/// Evaluate a postfix program with checked decimal arithmetic.
pub fn evaluate_postfix(program: &[PostfixItem]) -> ExprResult<Decimal> {
    let mut stack: SmallVec<[Decimal; 8]> = SmallVec::new();

    for item in program {
        match *item {
            PostfixItem::Number(value) => stack.push(value),
            PostfixItem::Negate => {
                let value = stack.pop().ok_or(ExprError::MissingOperand { position: 0 })?;
                stack.push(-value);
            },
            PostfixItem::Binary(op) => {
                let rhs = stack.pop().ok_or(ExprError::MissingOperand { position: 0 })?;
                let lhs = stack.pop().ok_or(ExprError::MissingOperand { position: 0 })?;
                stack.push(apply(op, lhs, rhs)?);
            },
        }
    }

    match (stack.pop(), stack.is_empty()) {
        (Some(value), true) => Ok(value),
        (None, _) => Err(ExprError::Empty),
        (Some(_), false) => Err(ExprError::MissingOperator { position: 0 }),
    }
}
