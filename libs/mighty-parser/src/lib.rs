//! # Mighty Parser
//!
//! Lexer and recursive descent parser for the Mighty automation language.
//!
//! ## Architecture
//!
//! ```text
//! Source Text → clean_lines → Lexer → Tokens → (resampler) → Parser → Program
//! ```
//!
//! Tokens are a public intermediate form so the engine can re-time recorded
//! mouse paths before parsing.
//!
//! ## Example
//!
//! ```rust
//! use mighty_parser::parse;
//!
//! let program = parse("mpos(10, 20) -> mclick(\"left\")").unwrap();
//! assert_eq!(program.len(), 1);
//! ```
//!
//! ## Pipeline Integration
//!
//! ```text
//! mighty-parser → mighty-eval → mighty-engine → mighty-cli
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

// Re-export public API
pub use ast::Program;
pub use error::{LexError, ParseError, ParseErrorKind, SyntaxError};
pub use lexer::{Lexer, Token, TokenKind};
pub use span::{Position, Span, Spanned};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Trim every line and drop the blank ones.
///
/// ## Example
///
/// ```rust
/// let lines = mighty_parser::clean_lines("  wait(1)\n\n  print(1)  \n".lines());
/// assert_eq!(lines, vec!["wait(1)", "print(1)"]);
/// ```
pub fn clean_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| {
            let trimmed = line.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}

/// Tokenize source text.
///
/// ## Returns
///
/// Tokens ending with an end-of-line token, or the first lex error
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Tokenize already-cleaned lines, joined with line breaks.
pub fn tokenize_lines<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Token>, LexError> {
    let source = lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");
    tokenize(&source)
}

/// Parse a token stream into a program.
pub fn parse_tokens(tokens: Vec<Token>) -> Result<Program, ParseError> {
    parser::Parser::new(tokens).parse()
}

/// Parse Mighty source into a program.
///
/// This is the main entry point for the parser. Lines are cleaned first, so
/// indentation and blank lines never matter.
///
/// ## Example
///
/// ```rust
/// use mighty_parser::{parse, SyntaxError};
///
/// assert!(parse("x: int = 5").is_ok());
/// assert!(matches!(parse("x: int ="), Err(SyntaxError::Parse(_))));
/// assert!(matches!(parse("x @ 1"), Err(SyntaxError::Lex(_))));
/// ```
pub fn parse(source: &str) -> Result<Program, SyntaxError> {
    let tokens = tokenize_lines(&clean_lines(source.lines()))?;
    Ok(parse_tokens(tokens)?)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test parsing a recorded snippet.
    #[test]
    fn test_parse_recording() {
        let source = "mpos(100, 200)\nmpos(101, 201)\n-> mclick(\"left\", true)\nwait(30)";
        let program = parse(source).unwrap();
        assert_eq!(program.len(), 3);
    }

    /// Test indentation and blank lines are irrelevant.
    #[test]
    fn test_parse_ignores_layout() {
        let compact = parse("func f(a: int) {\nprint(a)\n}\nf(1)").unwrap();
        let spaced = parse("\n  func f(a: int) {\n\n      print(a)\n  }\n\n  f(1)\n").unwrap();
        assert_eq!(compact, spaced);
    }

    /// Test tokenize_lines joins with line breaks.
    #[test]
    fn test_tokenize_lines() {
        let tokens = tokenize_lines(&["a()", "b()"]).unwrap();
        let eols = tokens.iter().filter(|t| t.is_eol()).count();
        assert_eq!(eols, 2);
    }

    /// Test empty source parses to an empty program.
    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("// only a comment").unwrap().is_empty());
    }
}
