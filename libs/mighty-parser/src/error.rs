//! # Syntax Errors
//!
//! Error types for the Mighty lexer and parser.
//!
//! Both are fatal: tokenization stops at the first unknown character and
//! parsing stops at the first token that does not fit the grammar. There is
//! no partial output.
//!
//! ## Example
//!
//! ```rust
//! use mighty_parser::error::ParseError;
//!
//! let error = ParseError::unexpected_token(")", "identifier");
//! assert!(error.to_string().contains("expected identifier"));
//! ```

use crate::span::Span;
use std::fmt;
use thiserror::Error;

// =============================================================================
// LEX ERROR
// =============================================================================

/// A character no token pattern accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// Line of the character (1-based).
    pub line: usize,
    /// Column of the character (1-based).
    pub column: usize,
    /// The offending character.
    pub character: char,
}

impl LexError {
    /// Create a lex error.
    pub const fn new(line: usize, column: usize, character: char) -> Self {
        Self {
            line,
            column,
            character,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unexpected character {:?} on line {}, column {}",
            self.character, self.line, self.column
        )
    }
}

impl std::error::Error for LexError {}

// =============================================================================
// PARSE ERROR
// =============================================================================

/// A parse error with location information.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error kind with details.
    pub kind: ParseErrorKind,
    /// Source location of error.
    pub span: Span,
}

impl ParseError {
    /// Create a new parse error.
    pub const fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Create unexpected token error.
    ///
    /// ## Parameters
    ///
    /// - `found`: Token that was found
    /// - `expected`: Description of expected token
    pub fn unexpected_token(found: &str, expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: found.to_string(),
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Create unexpected end of input error.
    pub fn unexpected_end(expected: &str) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedEnd {
                expected: expected.to_string(),
            },
            Span::zero(),
        )
    }

    /// Create error with span.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// What the parser was looking for.
    pub fn expected(&self) -> Option<&str> {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. }
            | ParseErrorKind::UnexpectedEnd { expected } => Some(expected),
            ParseErrorKind::InvalidNumber { .. } => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on line {}, column {}",
            self.kind, self.span.start.line, self.span.start.column
        )
    }
}

impl std::error::Error for ParseError {}

// =============================================================================
// PARSE ERROR KIND
// =============================================================================

/// Kinds of parse errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Found unexpected token.
    UnexpectedToken {
        /// Token that was found.
        found: String,
        /// Description of what was expected.
        expected: String,
    },

    /// Token stream ended early.
    UnexpectedEnd {
        /// Description of what was expected.
        expected: String,
    },

    /// Number literal that does not fit its type.
    InvalidNumber {
        /// The invalid text.
        text: String,
    },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token '{}', expected {}", found, expected)
            }
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of input, expected {}", expected)
            }
            Self::InvalidNumber { text } => {
                write!(f, "invalid number '{}'", text)
            }
        }
    }
}

// =============================================================================
// SYNTAX ERROR
// =============================================================================

/// Either stage of turning text into a program failing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    /// Tokenization failed.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    /// Parsing failed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_unexpected_token_display() {
        let error = ParseError::unexpected_token(")", "identifier");
        let msg = format!("{}", error);
        assert!(msg.contains("unexpected token ')'"));
        assert!(msg.contains("identifier"));
    }

    #[test]
    fn test_unexpected_end_display() {
        let error = ParseError::unexpected_end("expression");
        let msg = format!("{}", error);
        assert!(msg.contains("unexpected end of input"));
        assert_eq!(error.expected(), Some("expression"));
    }

    #[test]
    fn test_error_with_span() {
        let at = Position::new(10, 2, 4);
        let error = ParseError::unexpected_token("x", "y").with_span(Span::new(at, at));
        assert_eq!(error.span.start.line, 2);
        assert!(error.to_string().contains("line 2, column 4"));
    }

    #[test]
    fn test_lex_error_display() {
        let error = LexError::new(3, 7, '@');
        assert_eq!(
            error.to_string(),
            "unexpected character '@' on line 3, column 7"
        );
    }

    #[test]
    fn test_syntax_error_wraps_both_stages() {
        let lex: SyntaxError = LexError::new(1, 1, '$').into();
        assert!(lex.to_string().starts_with("lex error"));
        let parse: SyntaxError = ParseError::unexpected_end("}").into();
        assert!(parse.to_string().starts_with("parse error"));
    }
}
