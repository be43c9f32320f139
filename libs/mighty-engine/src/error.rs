//! # Engine Errors
//!
//! One error type for everything that can stop a run, from building the
//! engine to the last tick.

use config::constants::ConfigError;
use mighty_eval::EvalError;
use mighty_parser::{LexError, ParseError};
use thiserror::Error;

/// Errors surfaced by [`crate::Engine`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Source contained a character no token matches.
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    /// Tokens did not form a program.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A statement failed while running.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Engine parameters were rejected.
    #[error("invalid parameters: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_eval_error() {
        let err: EngineError = EvalError::DivisionByZero.into();
        assert_eq!(err, EngineError::Eval(EvalError::DivisionByZero));
        assert_eq!(err.to_string(), "division by zero");
    }

    #[test]
    fn test_config_error_display() {
        let err: EngineError = ConfigError::InvalidTickRate(0).into();
        assert!(err.to_string().starts_with("invalid parameters:"));
    }
}
