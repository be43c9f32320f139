//! # Expression Parsing
//!
//! Two precedence tiers, both left-associative.
//!
//! ## Grammar
//!
//! ```text
//! expression = term (("+" | "-") term)*
//! term       = factor (("*" | "/" | "%") factor)*
//! factor     = NUMBER | STRING | function_call | IDENT | "(" expression ")"
//! args       = expression ("," expression)*
//! ```

use super::Parser;
use crate::ast::{BinaryOp, Expression, Literal};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};

impl Parser {
    /// Parse an expression.
    pub(super) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_term()?;

        while let Some(op) = self.peek_kind().and_then(additive_op) {
            self.advance();
            let right = self.parse_term()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse a multiplicative term.
    fn parse_term(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.peek_kind().and_then(multiplicative_op) {
            self.advance();
            let right = self.parse_factor()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse a factor.
    fn parse_factor(&mut self) -> Result<Expression, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Number) | Some(TokenKind::String) => {
                let Some(token) = self.advance().cloned() else {
                    return Err(self.error_here("expression"));
                };
                literal(&token).map(Expression::Literal)
            }
            Some(TokenKind::Identifier) if self.peek_kind_at(1) == Some(TokenKind::LParen) => {
                self.parse_call().map(Expression::Call)
            }
            Some(TokenKind::Identifier) => {
                let name = self.expect(TokenKind::Identifier)?.text.clone();
                Ok(Expression::Identifier(name))
            }
            Some(TokenKind::LParen) => {
                self.advance();
                let inner = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(self.error_here("expression")),
        }
    }

    /// Parse call arguments up to, not including, the closing paren.
    pub(super) fn parse_args(&mut self) -> Result<Vec<Expression>, ParseError> {
        let mut args = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_expression()?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(args)
    }
}

fn additive_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        _ => None,
    }
}

fn multiplicative_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Percent => Some(BinaryOp::Rem),
        _ => None,
    }
}

/// Convert a number or string token into a literal.
///
/// All-digit numbers are integers, anything with a decimal point is a float.
/// Strings lose their surrounding quotes.
fn literal(token: &Token) -> Result<Literal, ParseError> {
    let invalid = || {
        ParseError::new(
            ParseErrorKind::InvalidNumber {
                text: token.text.clone(),
            },
            token.span,
        )
    };

    match token.kind {
        TokenKind::String => {
            let text = token.text.as_str();
            let inner = text
                .strip_prefix('"')
                .and_then(|t| t.strip_suffix('"'))
                .unwrap_or(text);
            Ok(Literal::Str(inner.to_string()))
        }
        _ if token.text.bytes().all(|b| b.is_ascii_digit()) => {
            token.text.parse().map(Literal::Int).map_err(|_| invalid())
        }
        _ => token.text.parse().map(Literal::Float).map_err(|_| invalid()),
    }
}

// =============================================================================
// TESTS
// =============================================================================
