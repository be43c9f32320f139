//! # Runtime Values
//!
//! Mighty is dynamically typed over three kinds of value. Arithmetic
//! promotes `int` to `float` when the two are mixed, division always
//! produces a `float`, and integer overflow is an error rather than a wrap.
//!
//! ## Example
//!
//! ```rust
//! use mighty_eval::value::Value;
//! use mighty_parser::ast::BinaryOp;
//!
//! let sum = Value::Int(5).binary(BinaryOp::Add, &Value::Float(10.5)).unwrap();
//! assert_eq!(sum.to_string(), "15.5");
//! ```

use crate::error::{EvalError, Result};
use mighty_parser::ast::{BinaryOp, Literal, TypeTag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamic Mighty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Type name as scripts see it.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
        }
    }

    /// Returns true if the value counts as "yes".
    /// - Int / Float -> non-zero
    /// - Str -> `"true"`, ignoring case
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(n) => *n != 0.0,
            Value::Str(s) => s.eq_ignore_ascii_case("true"),
        }
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            Value::Str(_) => None,
        }
    }

    /// Convert to an integer the way `int(v)` does.
    ///
    /// Floats truncate toward zero; strings must hold an integer literal.
    pub fn to_int(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            Value::Float(n) => {
                if !n.is_finite() {
                    return Err(EvalError::Value(format!("cannot convert {} to int", self)));
                }
                let truncated = n.trunc();
                // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
                if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
                    return Err(EvalError::Overflow(format!("{} does not fit in int", self)));
                }
                Ok(truncated as i64)
            }
            Value::Str(s) => s.trim().parse().map_err(|_| {
                EvalError::Value(format!("invalid literal for int(): '{}'", s))
            }),
        }
    }

    /// Convert to a float the way `float(v)` does.
    pub fn to_float(&self) -> Result<f64> {
        match self {
            Value::Int(n) => Ok(*n as f64),
            Value::Float(n) => Ok(*n),
            Value::Str(s) => s.trim().parse().map_err(|_| {
                EvalError::Value(format!("could not convert string to float: '{}'", s))
            }),
        }
    }

    /// Coerce into a declared type.
    pub fn coerce(self, tag: &TypeTag) -> Result<Value> {
        match tag {
            TypeTag::Int => self.to_int().map(Value::Int),
            TypeTag::Float => self.to_float().map(Value::Float),
            TypeTag::Str => Ok(match self {
                Value::Str(s) => Value::Str(s),
                other => Value::Str(other.to_string()),
            }),
            TypeTag::Unsupported(name) => {
                Err(EvalError::Type(format!("unsupported variable type '{}'", name)))
            }
        }
    }

    /// Apply an arithmetic operator.
    pub fn binary(&self, op: BinaryOp, right: &Value) -> Result<Value> {
        match (self, right) {
            (Value::Int(l), Value::Int(r)) => int_op(*l, op, *r),
            (Value::Str(l), Value::Str(r)) if op == BinaryOp::Add => {
                Ok(Value::Str(format!("{}{}", l, r)))
            }
            (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s))
                if op == BinaryOp::Mul =>
            {
                let count = usize::try_from((*n).max(0))
                    .map_err(|_| EvalError::Overflow(format!("repeat count {}", n)))?;
                Ok(Value::Str(s.repeat(count)))
            }
            _ => match (self.as_f64(), right.as_f64()) {
                (Some(l), Some(r)) => float_op(l, op, r),
                _ => Err(EvalError::Type(format!(
                    "unsupported operand types for {}: '{}' and '{}'",
                    op,
                    self.type_name(),
                    right.type_name()
                ))),
            },
        }
    }
}

fn int_op(l: i64, op: BinaryOp, r: i64) -> Result<Value> {
    let overflow = || EvalError::Overflow(format!("{} {} {}", l, op, r));
    match op {
        BinaryOp::Add => l.checked_add(r).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Sub => l.checked_sub(r).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Mul => l.checked_mul(r).map(Value::Int).ok_or_else(overflow),
        BinaryOp::Div => float_op(l as f64, op, r as f64),
        BinaryOp::Rem => {
            if r == 0 {
                return Err(EvalError::DivisionByZero);
            }
            let m = l.checked_rem(r).ok_or_else(overflow)?;
            // Result takes the sign of the divisor.
            if m != 0 && (m < 0) != (r < 0) {
                Ok(Value::Int(m + r))
            } else {
                Ok(Value::Int(m))
            }
        }
    }
}

fn float_op(l: f64, op: BinaryOp, r: f64) -> Result<Value> {
    let value = match op {
        BinaryOp::Add => l + r,
        BinaryOp::Sub => l - r,
        BinaryOp::Mul => l * r,
        BinaryOp::Div => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            l / r
        }
        BinaryOp::Rem => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            let m = l % r;
            if m != 0.0 && (m < 0.0) != (r < 0.0) {
                m + r
            } else {
                m
            }
        }
    };
    Ok(Value::Float(value))
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Int(n) => Value::Int(*n),
            Literal::Float(n) => Value::Float(*n),
            Literal::Str(s) => Value::Str(s.clone()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // Debug formatting keeps the decimal point on whole floats.
            Value::Float(n) => write!(f, "{:?}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
