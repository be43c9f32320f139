//! # Tokens
//!
//! Token types for the Mighty lexer.
//!
//! ## Example
//!
//! ```rust
//! use mighty_parser::lexer::{Token, TokenKind};
//!
//! let token = Token::synthetic(TokenKind::Number, "10");
//! assert_eq!(token.kind, TokenKind::Number);
//! assert_eq!(token.text, "10");
//! ```

use crate::span::{Span, Spanned};
use serde::{Deserialize, Serialize};

// =============================================================================
// TOKEN
// =============================================================================

/// A token produced by the lexer.
///
/// Tokens are immutable once produced; their order is significant and is
/// preserved through resampling and parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Token type.
    pub kind: TokenKind,
    /// Token text exactly as it appeared in the source.
    pub text: String,
    /// Source span.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Create a token that has no place in the original source.
    pub fn synthetic(kind: TokenKind, text: impl Into<String>) -> Self {
        Self::new(kind, text, Span::zero())
    }

    /// Check if token ends a line.
    pub fn is_eol(&self) -> bool {
        self.kind == TokenKind::Eol
    }

    /// Check if token is an identifier with the given name.
    pub fn is_identifier(&self, name: &str) -> bool {
        self.kind == TokenKind::Identifier && self.text == name
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

// =============================================================================
// TOKEN KIND
// =============================================================================

/// Types of tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Number literal like `10` or `3.5`
    Number,
    /// Double-quoted string literal like `"left"`, quotes included
    String,

    // Identifiers
    /// Identifier like `mpos` or `count`
    Identifier,

    // Keywords
    /// `func` keyword
    Func,
    /// `if` keyword (reserved)
    If,
    /// `else` keyword (reserved)
    Else,
    /// `for` keyword (reserved)
    For,
    /// `while` keyword (reserved)
    While,

    // Structure
    /// `->`, chains statements into one tick
    Next,
    /// End of a source line
    Eol,

    // Assignment
    /// `=`
    Assign,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,
    /// `*=`
    StarAssign,
    /// `/=`
    SlashAssign,

    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `**`
    Power,

    // Comparison
    /// `==`
    EqEq,
    /// `!=`
    BangEq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,

    // Delimiters
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
}

impl TokenKind {
    /// Check if this is a keyword token.
    pub const fn is_keyword(&self) -> bool {
        matches!(
            self,
            Self::Func | Self::If | Self::Else | Self::For | Self::While
        )
    }

    /// Check if this is an arithmetic operator the language evaluates.
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Percent
        )
    }

    /// Get display string for error messages.
    pub const fn display(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Identifier => "identifier",
            Self::Func => "func",
            Self::If => "if",
            Self::Else => "else",
            Self::For => "for",
            Self::While => "while",
            Self::Next => "->",
            Self::Eol => "end of line",
            Self::Assign => "=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::StarAssign => "*=",
            Self::SlashAssign => "/=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Power => "**",
            Self::EqEq => "==",
            Self::BangEq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Colon => ":",
            Self::Comma => ",",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_keyword() {
        assert!(TokenKind::Func.is_keyword());
        assert!(TokenKind::While.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
    }

    #[test]
    fn test_token_is_arithmetic() {
        assert!(TokenKind::Percent.is_arithmetic());
        assert!(!TokenKind::Power.is_arithmetic());
        assert!(!TokenKind::Assign.is_arithmetic());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(TokenKind::LParen.display(), "(");
        assert_eq!(TokenKind::Next.display(), "->");
        assert_eq!(TokenKind::Eol.display(), "end of line");
    }

    #[test]
    fn test_identifier_check() {
        let token = Token::synthetic(TokenKind::Identifier, "mpos");
        assert!(token.is_identifier("mpos"));
        assert!(!token.is_identifier("mclick"));
        assert!(!Token::synthetic(TokenKind::String, "mpos").is_identifier("mpos"));
    }
}
