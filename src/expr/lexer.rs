// ============================================================================
// Expression Lexer
// ============================================================================

use super::errors::{ExprError, ExprResult};
use crate::numeric::{parse_plain_decimal, NumericError};
use rust_decimal::Decimal;
use smallvec::SmallVec;

/// Token kinds of the arithmetic alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number(Decimal),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// A token and the character offset where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Field input is short; most expressions fit inline.
pub type TokenBuffer = SmallVec<[Token; 16]>;

/// Split an expression into tokens.
///
/// Literals are unsigned; a leading `-` is emitted as `Minus` and resolved
/// as unary by the postfix conversion.
pub fn tokenize(s: &str) -> ExprResult<TokenBuffer> {
    let mut out = TokenBuffer::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let kind = match c {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '*' => Some(TokenKind::Star),
            '/' => Some(TokenKind::Slash),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            _ => None,
        };
        if let Some(kind) = kind {
            out.push(Token { kind, position: i });
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let literal: String = chars[start..i].iter().collect();
            let value = parse_plain_decimal(&literal).map_err(|err| match err {
                NumericError::InvalidInput => ExprError::MalformedNumber { position: start },
                other => ExprError::Arithmetic(other),
            })?;
            out.push(Token {
                kind: TokenKind::Number(value),
                position: start,
            });
            continue;
        }

        return Err(ExprError::UnexpectedChar { ch: c, position: i });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        tokenize(s).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_operators_and_parens() {
        assert_eq!(
            kinds("(+-*/)"),
            vec![
                TokenKind::LParen,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Star,
                TokenKind::Slash,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            kinds("12.5 + .5"),
            vec![
                TokenKind::Number(Decimal::new(125, 1)),
                TokenKind::Plus,
                TokenKind::Number(Decimal::new(5, 1)),
            ]
        );
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize(" 1 +  22").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![1, 3, 6]);
    }

    #[test]
    fn test_malformed_number() {
        assert_eq!(
            tokenize("1+2.3.4"),
            Err(ExprError::MalformedNumber { position: 2 })
        );
        assert_eq!(tokenize("."), Err(ExprError::MalformedNumber { position: 0 }));
    }

    #[test]
    fn test_unexpected_char() {
        assert_eq!(
            tokenize("2^3"),
            Err(ExprError::UnexpectedChar { ch: '^', position: 1 })
        );
        assert_eq!(
            tokenize("1,5"),
            Err(ExprError::UnexpectedChar { ch: ',', position: 1 })
        );
    }
}
