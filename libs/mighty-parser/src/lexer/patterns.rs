//! # Token Patterns
//!
//! The ordered pattern table the lexer tries at every position.
//!
//! Order is load-bearing: the first pattern that matches wins, so keywords
//! sit before the generic identifier, comments before `/`, and every
//! multi-character operator before the single character it starts with.

use super::TokenKind;
use regex::Regex;
use std::sync::OnceLock;

/// What to do with the text a pattern matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// Produce a token of this kind.
    Emit(TokenKind),
    /// `// ...` up to the end of the line.
    Comment,
    /// Line break; produces an end-of-line token and resets indentation.
    Newline,
    /// Spaces or tabs; counted as indentation at the start of a line.
    Whitespace,
}

/// Pattern source for each rule, highest priority first.
const PATTERNS: &[(Rule, &str)] = &[
    (Rule::Comment, r"//[^\n]*"),
    (Rule::Emit(TokenKind::Func), r"func\b"),
    (Rule::Emit(TokenKind::If), r"if\b"),
    (Rule::Emit(TokenKind::Else), r"else\b"),
    (Rule::Emit(TokenKind::For), r"for\b"),
    (Rule::Emit(TokenKind::While), r"while\b"),
    (Rule::Emit(TokenKind::Identifier), r"[A-Za-z_][A-Za-z0-9_]*"),
    (Rule::Emit(TokenKind::Next), r"->"),
    (Rule::Emit(TokenKind::Number), r"\d+(\.\d*)?"),
    (Rule::Emit(TokenKind::String), r#""[^"\n]*""#),
    (Rule::Emit(TokenKind::EqEq), r"=="),
    (Rule::Emit(TokenKind::BangEq), r"!="),
    (Rule::Emit(TokenKind::GtEq), r">="),
    (Rule::Emit(TokenKind::LtEq), r"<="),
    (Rule::Emit(TokenKind::PlusAssign), r"\+="),
    (Rule::Emit(TokenKind::MinusAssign), r"-="),
    (Rule::Emit(TokenKind::StarAssign), r"\*="),
    (Rule::Emit(TokenKind::SlashAssign), r"/="),
    (Rule::Emit(TokenKind::Power), r"\*\*"),
    (Rule::Emit(TokenKind::Assign), r"="),
    (Rule::Emit(TokenKind::Plus), r"\+"),
    (Rule::Emit(TokenKind::Minus), r"-"),
    (Rule::Emit(TokenKind::Star), r"\*"),
    (Rule::Emit(TokenKind::Slash), r"/"),
    (Rule::Emit(TokenKind::Percent), r"%"),
    (Rule::Emit(TokenKind::Gt), r">"),
    (Rule::Emit(TokenKind::Lt), r"<"),
    (Rule::Emit(TokenKind::LParen), r"\("),
    (Rule::Emit(TokenKind::RParen), r"\)"),
    (Rule::Emit(TokenKind::LBrace), r"\{"),
    (Rule::Emit(TokenKind::RBrace), r"\}"),
    (Rule::Emit(TokenKind::LBracket), r"\["),
    (Rule::Emit(TokenKind::RBracket), r"\]"),
    (Rule::Emit(TokenKind::Colon), r":"),
    (Rule::Emit(TokenKind::Comma), r","),
    (Rule::Newline, r"\n"),
    (Rule::Whitespace, r"[ \t]+"),
];

/// Compiled, start-anchored pattern table.
pub(crate) fn table() -> &'static [(Rule, Regex)] {
    static TABLE: OnceLock<Vec<(Rule, Regex)>> = OnceLock::new();
    TABLE.get_or_init(|| {
        PATTERNS
            .iter()
            .map(|(rule, pattern)| {
                let anchored = format!("^(?:{pattern})");
                // Patterns are compile-time literals covered by the tests below.
                let regex = Regex::new(&anchored).expect("token pattern is a valid regex");
                (*rule, regex)
            })
            .collect()
    })
}

/// Find the first rule matching at the start of `rest`.
///
/// Returns the rule and the length in bytes of the matched text.
pub(crate) fn match_at(rest: &str) -> Option<(Rule, usize)> {
    table().iter().find_map(|(rule, regex)| {
        regex
            .find(rest)
            .filter(|m| !m.as_str().is_empty())
            .map(|m| (*rule, m.end()))
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(table().len(), PATTERNS.len());
    }

    #[test]
    fn test_keyword_requires_word_boundary() {
        assert_eq!(match_at("func f"), Some((Rule::Emit(TokenKind::Func), 4)));
        assert_eq!(
            match_at("function"),
            Some((Rule::Emit(TokenKind::Identifier), 8))
        );
    }

    #[test]
    fn test_longer_operators_win() {
        assert_eq!(match_at("->"), Some((Rule::Emit(TokenKind::Next), 2)));
        assert_eq!(match_at("=="), Some((Rule::Emit(TokenKind::EqEq), 2)));
        assert_eq!(match_at("**"), Some((Rule::Emit(TokenKind::Power), 2)));
        assert_eq!(match_at("+= 1"), Some((Rule::Emit(TokenKind::PlusAssign), 2)));
        assert_eq!(match_at("- 1"), Some((Rule::Emit(TokenKind::Minus), 1)));
    }

    #[test]
    fn test_comment_before_slash() {
        assert_eq!(match_at("// note"), Some((Rule::Comment, 7)));
        assert_eq!(match_at("/ 2"), Some((Rule::Emit(TokenKind::Slash), 1)));
    }

    #[test]
    fn test_number_forms() {
        assert_eq!(match_at("42)"), Some((Rule::Emit(TokenKind::Number), 2)));
        assert_eq!(match_at("3.5,"), Some((Rule::Emit(TokenKind::Number), 3)));
        assert_eq!(match_at("3."), Some((Rule::Emit(TokenKind::Number), 2)));
    }

    #[test]
    fn test_unknown_character() {
        assert_eq!(match_at("@"), None);
        assert_eq!(match_at("!"), None);
    }
}
