//! # Abstract Syntax Tree
//!
//! Program structure produced by the parser. The tree is built once and
//! never mutated; the interpreter only reads it.
//!
//! ## Example
//!
//! ```rust
//! use mighty_parser::ast::{Expression, Literal, Statement};
//!
//! let program = mighty_parser::parse("x: int = 5").unwrap();
//! match &program.statements[0] {
//!     Statement::Declaration(decl) => {
//!         assert_eq!(decl.name, "x");
//!         assert_eq!(decl.expr, Expression::Literal(Literal::Int(5)));
//!     }
//!     other => panic!("expected declaration, got {other:?}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PROGRAM
// =============================================================================

/// Root of a parsed script. The engine runs one statement per tick.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Number of top-level statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns true if the program has no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

// =============================================================================
// STATEMENTS
// =============================================================================

/// Anything that can stand on a line of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    /// `name: type = expr`
    Declaration(Declaration),
    /// `func name(params) { body }`
    FunctionDef(FunctionDef),
    /// `name(args)`
    FunctionCall(FunctionCall),
    /// Statements chained with `->` that run within one tick.
    SameTick(Vec<Statement>),
}

/// Typed variable binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Type the value is coerced to before storage.
    pub var_type: TypeTag,
    /// Variable name.
    pub name: String,
    /// Value expression.
    pub expr: Expression,
}

/// User-defined function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Function name.
    pub name: String,
    /// Positional parameters.
    pub params: Vec<Param>,
    /// Statements run in order on each call.
    pub body: Vec<Statement>,
}

/// A `name: type` function parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Declared type.
    pub type_tag: TypeTag,
}

/// Call of a built-in or user function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Function name.
    pub name: String,
    /// Argument expressions.
    pub args: Vec<Expression>,
}

// =============================================================================
// TYPES
// =============================================================================

/// Declared type of a variable or parameter.
///
/// Unknown names are kept rather than rejected while parsing; storing a
/// value under one is a runtime type error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeTag {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `str`
    Str,
    /// Any other type name.
    Unsupported(String),
}

impl TypeTag {
    /// Resolve a type name as written in source.
    pub fn from_name(name: &str) -> Self {
        match name {
            "int" => Self::Int,
            "float" => Self::Float,
            "str" => Self::Str,
            other => Self::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Str => write!(f, "str"),
            Self::Unsupported(name) => write!(f, "{}", name),
        }
    }
}

// =============================================================================
// EXPRESSIONS
// =============================================================================

/// Value-producing expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// Number or string literal.
    Literal(Literal),
    /// Variable reference.
    Identifier(String),
    /// Function call used for its result.
    Call(FunctionCall),
    /// `left op right`
    Binary {
        /// Left operand.
        left: Box<Expression>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expression>,
    },
}

impl Expression {
    /// Build a binary expression.
    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Self::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }
}

/// Literal value as written in source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// All-digit number.
    Int(i64),
    /// Number with a decimal point.
    Float(f64),
    /// Quoted string, quotes removed.
    Str(String),
}

/// Arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
}

impl BinaryOp {
    /// Source symbol of the operator.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tag_from_name() {
        assert_eq!(TypeTag::from_name("int"), TypeTag::Int);
        assert_eq!(TypeTag::from_name("float"), TypeTag::Float);
        assert_eq!(TypeTag::from_name("str"), TypeTag::Str);
        assert_eq!(
            TypeTag::from_name("bool"),
            TypeTag::Unsupported("bool".to_string())
        );
    }

    #[test]
    fn test_type_tag_display_round_trips_name() {
        for name in ["int", "float", "str", "vec2"] {
            assert_eq!(TypeTag::from_name(name).to_string(), name);
        }
    }

    #[test]
    fn test_binary_op_symbol() {
        assert_eq!(BinaryOp::Rem.to_string(), "%");
        assert_eq!(BinaryOp::Div.symbol(), "/");
    }
}
