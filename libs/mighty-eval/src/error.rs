//! # Evaluation Errors
//!
//! Error types for running a parsed program. Every variant aborts the
//! current run; nothing is retried.

use thiserror::Error;

/// Errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Undefined variable or function.
    #[error("name error: {0}")]
    Name(String),

    /// Operation or coercion applied to the wrong type.
    #[error("type error: {0}")]
    Type(String),

    /// Right type, unusable value.
    #[error("value error: {0}")]
    Value(String),

    /// Mouse button name other than left, right or middle.
    #[error("invalid mouse button: {0}")]
    InvalidButton(String),

    /// Wrong number of arguments.
    #[error("wrong number of arguments for {name}: expected {expected}, got {found}")]
    WrongArgCount {
        /// Function name.
        name: String,
        /// Accepted argument count, described.
        expected: String,
        /// Number of arguments supplied.
        found: usize,
    },

    /// Division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer arithmetic left the 64-bit range.
    #[error("integer overflow: {0}")]
    Overflow(String),

    /// User function named like a built-in.
    #[error("cannot define function '{0}': the name belongs to a built-in")]
    ReservedName(String),
}

/// Result type for evaluation.
pub type Result<T> = std::result::Result<T, EvalError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvalError::Type("expected int".to_string());
        assert!(err.to_string().contains("type error"));
    }

    #[test]
    fn test_wrong_arg_count_display() {
        let err = EvalError::WrongArgCount {
            name: "mpos".to_string(),
            expected: "2".to_string(),
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "wrong number of arguments for mpos: expected 2, got 3"
        );
    }
}
