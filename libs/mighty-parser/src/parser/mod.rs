//! # Mighty Parser
//!
//! Recursive descent parser for Mighty scripts.
//! Produces a [`Program`] or the first [`ParseError`]; there is no error
//! recovery and no partial tree.
//!
//! ## Example
//!
//! ```rust
//! use mighty_parser::lexer::Lexer;
//! use mighty_parser::parser::Parser;
//!
//! let tokens = Lexer::new("wait(3)").tokenize().unwrap();
//! let program = Parser::new(tokens).parse().unwrap();
//! assert_eq!(program.len(), 1);
//! ```

mod expressions;
mod statements;

use crate::ast::Program;
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{Token, TokenKind};
use crate::span::{Span, Spanned};

// =============================================================================
// PARSER
// =============================================================================

/// Recursive descent parser over a finished token stream.
pub struct Parser {
    /// Token stream.
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
}

impl Parser {
    /// Create a new parser.
    ///
    /// ## Parameters
    ///
    /// - `tokens`: Tokens from the lexer, possibly resampled
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parse the entire token stream into a program.
    ///
    /// ## Grammar
    ///
    /// ```text
    /// program = (EOL* chain line_end)* EOL*
    /// ```
    pub fn parse(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();

        loop {
            self.skip_eols();
            if self.is_at_end() {
                break;
            }
            statements.push(self.parse_chain()?);
            self.expect_line_end(false)?;
        }

        Ok(Program { statements })
    }

    // =========================================================================
    // TOKEN ACCESS
    // =========================================================================

    /// Get current token.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    /// Get current token kind.
    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    /// Get the kind of the token `offset` places ahead.
    fn peek_kind_at(&self, offset: usize) -> Option<TokenKind> {
        self.tokens.get(self.current + offset).map(|t| t.kind)
    }

    /// Check if current token matches kind.
    fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    /// Check if every token has been consumed.
    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    /// Advance to next token.
    ///
    /// ## Returns
    ///
    /// The token that was consumed, if any remained
    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.current)?;
        self.current += 1;
        Some(token)
    }

    /// Consume token if it matches expected kind.
    ///
    /// ## Returns
    ///
    /// Ok with consumed token, or Err with parse error
    fn expect(&mut self, kind: TokenKind) -> Result<&Token, ParseError> {
        if self.check(kind) {
            self.current += 1;
            Ok(&self.tokens[self.current - 1])
        } else {
            Err(self.error_here(kind.display()))
        }
    }

    /// Try to consume token if it matches.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Skip any number of end-of-line tokens.
    fn skip_eols(&mut self) {
        while self.match_token(TokenKind::Eol) {}
    }

    /// Build an error describing the current token.
    fn error_here(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => {
                let found = if token.is_eol() {
                    token.kind.display()
                } else {
                    token.text.as_str()
                };
                ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        found: found.to_string(),
                        expected: expected.to_string(),
                    },
                    token.span(),
                )
            }
            None => {
                let end = self.tokens.last().map(|t| t.span().end).unwrap_or_default();
                ParseError::unexpected_end(expected).with_span(Span::new(end, end))
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
