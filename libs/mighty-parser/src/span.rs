//! # Source Span
//!
//! Source locations carried by tokens and errors.
//!
//! ## Example
//!
//! ```rust
//! use mighty_parser::span::{Position, Span};
//!
//! let start = Position::new(0, 1, 1);
//! let end = Position::new(4, 1, 5);
//! let span = Span::new(start, end);
//! assert_eq!(span.len(), 4);
//! ```

use serde::{Deserialize, Serialize};

// =============================================================================
// POSITION
// =============================================================================

/// A point in the source text.
///
/// Lines and columns are 1-based, columns count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub byte: usize,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based).
    pub column: usize,
}

impl Position {
    /// Create a position.
    pub const fn new(byte: usize, line: usize, column: usize) -> Self {
        Self { byte, line, column }
    }

    /// Position of the first character of a source.
    pub const fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

// =============================================================================
// SPAN
// =============================================================================

/// A half-open range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Start position (inclusive).
    pub start: Position,
    /// End position (exclusive).
    pub end: Position,
}

impl Span {
    /// Create a span from two positions.
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Zero-width span at the start of the source.
    ///
    /// Used for tokens that were synthesized rather than read from text.
    pub const fn zero() -> Self {
        Self::new(Position::start(), Position::start())
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.byte.saturating_sub(self.start.byte)
    }

    /// Returns true if the span covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Anything that knows where it came from.
pub trait Spanned {
    /// Source span of this item.
    fn span(&self) -> Span;
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(Position::new(3, 1, 4), Position::new(7, 1, 8));
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_zero_span_is_empty() {
        let span = Span::zero();
        assert!(span.is_empty());
        assert_eq!(span.start.line, 1);
        assert_eq!(span.start.column, 1);
    }
}
