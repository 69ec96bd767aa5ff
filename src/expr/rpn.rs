// ============================================================================
// Postfix Conversion
// Shunting-yard ordering of tokens into reverse Polish notation
// ============================================================================
//
// Unary minus is detected when a '-' arrives while no operand is pending
// ("-2", "2*-3", "(-1)") and is pushed as a prefix operator binding tighter
// than any binary operator. Unary plus is dropped.

use super::errors::{ExprError, ExprResult};
use super::lexer::{Token, TokenKind};
use rust_decimal::Decimal;
use smallvec::SmallVec;

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
        }
    }
}

/// One element of a postfix program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixItem {
    Number(Decimal),
    Binary(BinaryOp),
    Negate,
}

pub type Postfix = SmallVec<[PostfixItem; 16]>;

#[derive(Debug, Clone, Copy)]
enum StackOp {
    Binary(BinaryOp),
    Negate,
    LParen,
}

const NEGATE_PRECEDENCE: u8 = 3;

impl StackOp {
    fn precedence(self) -> u8 {
        match self {
            StackOp::Binary(op) => op.precedence(),
            StackOp::Negate => NEGATE_PRECEDENCE,
            StackOp::LParen => 0,
        }
    }

    fn into_item(self) -> Option<PostfixItem> {
        match self {
            StackOp::Binary(op) => Some(PostfixItem::Binary(op)),
            StackOp::Negate => Some(PostfixItem::Negate),
            StackOp::LParen => None,
        }
    }
}

/// Convert tokens to postfix order, validating the operator/operand layout.
pub fn to_postfix(tokens: &[Token]) -> ExprResult<Postfix> {
    let last = match tokens.last() {
        Some(token) => *token,
        None => return Err(ExprError::Empty),
    };

    let mut out = Postfix::new();
    let mut ops: SmallVec<[StackOp; 8]> = SmallVec::new();

    // An operand (literal or closed group) was just produced
    let mut prev_was_value = false;

    for token in tokens {
        match token.kind {
            TokenKind::Number(value) => {
                if prev_was_value {
                    return Err(ExprError::MissingOperator {
                        position: token.position,
                    });
                }
                out.push(PostfixItem::Number(value));
                prev_was_value = true;
            },

            TokenKind::Plus | TokenKind::Minus if !prev_was_value => {
                if token.kind == TokenKind::Minus {
                    ops.push(StackOp::Negate);
                }
            },

            TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash => {
                let op = match token.kind {
                    TokenKind::Plus => BinaryOp::Add,
                    TokenKind::Minus => BinaryOp::Sub,
                    TokenKind::Star => BinaryOp::Mul,
                    _ => BinaryOp::Div,
                };
                if !prev_was_value {
                    return Err(ExprError::MissingOperand {
                        position: token.position,
                    });
                }

                // Left associative: pop while the stacked operator binds at least as tight
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    out.extend(top.into_item());
                }
                ops.push(StackOp::Binary(op));
                prev_was_value = false;
            },

            TokenKind::LParen => {
                if prev_was_value {
                    return Err(ExprError::MissingOperator {
                        position: token.position,
                    });
                }
                ops.push(StackOp::LParen);
            },

            TokenKind::RParen => {
                if !prev_was_value {
                    return Err(ExprError::MissingOperand {
                        position: token.position,
                    });
                }
                loop {
                    match ops.pop() {
                        Some(StackOp::LParen) => break,
                        Some(op) => out.extend(op.into_item()),
                        None => return Err(ExprError::UnbalancedParens),
                    }
                }
            },
        }
    }

    if !prev_was_value {
        return Err(ExprError::MissingOperand {
            position: last.position,
        });
    }

    while let Some(op) = ops.pop() {
        match op {
            StackOp::LParen => return Err(ExprError::UnbalancedParens),
            other => out.extend(other.into_item()),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::tokenize;

    fn postfix(s: &str) -> Postfix {
        to_postfix(&tokenize(s).unwrap()).unwrap()
    }

    fn num(n: i64) -> PostfixItem {
        PostfixItem::Number(Decimal::from(n))
    }

    #[test]
    fn test_precedence() {
        assert_eq!(
            postfix("1+2*3").as_slice(),
            &[num(1), num(2), num(3), PostfixItem::Binary(BinaryOp::Mul), PostfixItem::Binary(BinaryOp::Add)]
        );
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(
            postfix("8-3-2").as_slice(),
            &[num(8), num(3), PostfixItem::Binary(BinaryOp::Sub), num(2), PostfixItem::Binary(BinaryOp::Sub)]
        );
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(
            postfix("2*-3").as_slice(),
            &[num(2), num(3), PostfixItem::Negate, PostfixItem::Binary(BinaryOp::Mul)]
        );
        assert_eq!(
            postfix("-(1)").as_slice(),
            &[num(1), PostfixItem::Negate]
        );
    }

    #[test]
    fn test_layout_errors() {
        let err = |s: &str| to_postfix(&tokenize(s).unwrap()).unwrap_err();

        assert_eq!(err("*2"), ExprError::MissingOperand { position: 0 });
        assert_eq!(err("2+"), ExprError::MissingOperand { position: 1 });
        assert_eq!(err("2 3"), ExprError::MissingOperator { position: 2 });
        assert_eq!(err("(1"), ExprError::UnbalancedParens);
        assert_eq!(err("1)"), ExprError::UnbalancedParens);
        assert_eq!(err("()"), ExprError::MissingOperand { position: 1 });
    }
}
