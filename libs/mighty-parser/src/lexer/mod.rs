//! # Mighty Lexer
//!
//! Tokenizes script text by trying an ordered regex pattern table at each
//! position. Comments and whitespace are dropped, line breaks become
//! [`TokenKind::Eol`] tokens, and leading whitespace is counted as
//! indentation (informational only, it never changes the token stream).
//!
//! ## Example
//!
//! ```rust
//! use mighty_parser::lexer::{Lexer, TokenKind};
//!
//! let tokens = Lexer::new("wait(3)").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eol);
//! ```

mod patterns;
mod token;

pub use token::{Token, TokenKind};

use crate::error::LexError;
use crate::span::{Position, Span};
use patterns::Rule;

// =============================================================================
// LEXER
// =============================================================================

/// Mighty lexer.
///
/// A lazy, finite, non-restartable token stream. Iteration yields
/// `Err` once for the first unknown character and then stops. The stream
/// always ends with an end-of-line token, even when the source does not.
pub struct Lexer<'a> {
    /// Source text being lexed.
    source: &'a str,
    /// Current position.
    position: Position,
    /// Whitespace runs seen since the last line break.
    indent_level: usize,
    /// Whether the previous emitted token was an end of line.
    last_was_eol: bool,
    /// Set once the stream is exhausted or failed.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: Position::start(),
            indent_level: 0,
            last_was_eol: false,
            done: false,
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// All tokens ending with an end-of-line token, or the first lex error.
    pub fn tokenize(self) -> Result<Vec<Token>, LexError> {
        self.collect()
    }

    /// Indentation counted on the current line.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Move past `len` bytes of matched text.
    fn consume(&mut self, len: usize) -> Span {
        let start = self.position;
        let text = &self.source[start.byte..start.byte + len];
        for c in text.chars() {
            if c == '\n' {
                self.position.line += 1;
                self.position.column = 1;
            } else {
                self.position.column += 1;
            }
        }
        self.position.byte += len;
        Span::new(start, self.position)
    }

    fn emit(&mut self, kind: TokenKind, span: Span) -> Token {
        self.last_was_eol = kind == TokenKind::Eol;
        Token::new(kind, &self.source[span.start.byte..span.end.byte], span)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let rest = &self.source[self.position.byte..];
            if rest.is_empty() {
                self.done = true;
                if self.last_was_eol {
                    return None;
                }
                // Sentinel so parsers can rely on a terminated last line.
                let at = self.position;
                return Some(Ok(Token::new(TokenKind::Eol, "\n", Span::new(at, at))));
            }

            let Some((rule, len)) = patterns::match_at(rest) else {
                self.done = true;
                let character = rest.chars().next().unwrap_or('\0');
                return Some(Err(LexError::new(
                    self.position.line,
                    self.position.column,
                    character,
                )));
            };

            let at_line_start = self.position.column == 1;
            let span = self.consume(len);
            match rule {
                Rule::Emit(kind) => return Some(Ok(self.emit(kind, span))),
                Rule::Newline => {
                    self.indent_level = 0;
                    return Some(Ok(self.emit(TokenKind::Eol, span)));
                }
                Rule::Whitespace => {
                    if at_line_start {
                        self.indent_level += 1;
                    }
                }
                Rule::Comment => {}
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
