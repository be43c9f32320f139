//! # Built-in Functions
//!
//! Fixed table of functions implemented by the host. Built-ins are looked up
//! before user functions, and a user function may not take a built-in name.
//!
//! | Name | Arguments | Effect |
//! |------|-----------|--------|
//! | `wait` | `ticks: int` | idle for `ticks` ticks unless already waiting |
//! | `mpos` | `x: int, y: int` | move the cursor |
//! | `mclick` | `button: str, randomize?` | click a mouse button |
//! | `print` | any | write the values on one line |
//! | `len` | `s: str` | string length |
//! | `type` | any | type name |
//! | `int`, `float`, `str` | any | conversions |

use crate::environment::Environment;
use crate::error::{EvalError, Result};
use crate::motor::{Console, MotorControl, MouseButton};
use crate::value::Value;
use config::constants::EngineParameters;
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, trace, warn};

// =============================================================================
// TABLE
// =============================================================================

/// Number of arguments a built-in accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many.
    Exact(usize),
    /// Between `min` and `max` inclusive; no upper bound when `max` is `None`.
    Range { min: usize, max: Option<usize> },
}

impl Arity {
    /// Whether `count` arguments are acceptable.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => *n == count,
            Arity::Range { min, max } => count >= *min && max.map_or(true, |max| count <= max),
        }
    }

    fn describe(&self) -> String {
        match self {
            Arity::Exact(n) => n.to_string(),
            Arity::Range { min, max: Some(max) } => format!("{} to {}", min, max),
            Arity::Range { min: 0, max: None } => "any number".to_string(),
            Arity::Range { min, max: None } => format!("at least {}", min),
        }
    }
}

/// Everything a built-in may touch while it runs.
pub struct CallContext<'a> {
    /// Caller's environment.
    pub env: &'a mut Environment,
    /// Mouse control.
    pub motor: &'a mut dyn MotorControl,
    /// Output for `print`.
    pub console: &'a mut dyn Console,
    /// Randomness for cursor jitter.
    pub rng: &'a mut StdRng,
    /// Screen bounds and jitter amount.
    pub params: &'a EngineParameters,
}

/// Signature shared by every built-in.
pub type BuiltinFn = fn(&mut CallContext<'_>, &[Value]) -> Result<Option<Value>>;

/// A built-in function.
#[derive(Clone, Copy)]
pub struct Builtin {
    /// Name scripts call it by.
    pub name: &'static str,
    /// Accepted argument count.
    pub arity: Arity,
    /// Implementation.
    pub func: BuiltinFn,
}

impl Builtin {
    /// Check the argument count, then run.
    pub fn call(&self, ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Option<Value>> {
        if !self.arity.accepts(args.len()) {
            return Err(EvalError::WrongArgCount {
                name: self.name.to_string(),
                expected: self.arity.describe(),
                found: args.len(),
            });
        }
        (self.func)(ctx, args)
    }
}

const BUILTINS: &[Builtin] = &[
    Builtin { name: "wait", arity: Arity::Exact(1), func: builtin_wait },
    Builtin { name: "mpos", arity: Arity::Exact(2), func: builtin_mouse_position },
    Builtin {
        name: "mclick",
        arity: Arity::Range { min: 1, max: Some(2) },
        func: builtin_mouse_click,
    },
    Builtin { name: "print", arity: Arity::Range { min: 0, max: None }, func: builtin_print },
    Builtin { name: "len", arity: Arity::Exact(1), func: builtin_len },
    Builtin { name: "type", arity: Arity::Exact(1), func: builtin_type },
    Builtin { name: "int", arity: Arity::Exact(1), func: builtin_int },
    Builtin { name: "float", arity: Arity::Exact(1), func: builtin_float },
    Builtin { name: "str", arity: Arity::Exact(1), func: builtin_str },
];

/// Find a built-in by name.
pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.iter().find(|builtin| builtin.name == name)
}

/// Whether a name belongs to a built-in.
pub fn is_builtin(name: &str) -> bool {
    lookup(name).is_some()
}

// =============================================================================
// IMPLEMENTATIONS
// =============================================================================

fn int_arg(function: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(EvalError::Type(format!(
            "{}() expects int arguments, not '{}'",
            function,
            other.type_name()
        ))),
    }
}

fn builtin_wait(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Option<Value>> {
    let ticks = int_arg("wait", &args[0])?;
    let ticks = u64::try_from(ticks).map_err(|_| {
        EvalError::Value(format!("wait() needs a non-negative tick count, got {}", ticks))
    })?;

    if ctx.env.request_wait(ticks) {
        debug!(ticks, "wait started");
    } else {
        debug!(ticks, pending = ctx.env.pending_wait_ticks(), "wait ignored, already waiting");
    }
    Ok(None)
}

fn builtin_mouse_position(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Option<Value>> {
    let x = int_arg("mpos", &args[0])?;
    let y = int_arg("mpos", &args[1])?;

    let (width, height) = ctx.params.screen_bounds;
    let max_x = i64::from(width) - 1;
    let max_y = i64::from(height) - 1;
    if !(0..=max_x).contains(&x) || !(0..=max_y).contains(&y) {
        warn!(x, y, width, height, "cursor target outside the screen, clamping");
    }

    let spread = ctx.params.position_randomness.round() as i64;
    let (dx, dy) = if spread > 0 {
        (
            ctx.rng.random_range(-spread..=spread),
            ctx.rng.random_range(-spread..=spread),
        )
    } else {
        (0, 0)
    };

    let target = (
        x.saturating_add(dx).clamp(0, max_x),
        y.saturating_add(dy).clamp(0, max_y),
    );
    if ctx.motor.cursor_position() != target {
        trace!(x = target.0, y = target.1, "move cursor");
        ctx.motor.move_cursor(target.0, target.1);
    }
    Ok(None)
}

fn builtin_mouse_click(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Option<Value>> {
    let button = match &args[0] {
        Value::Str(name) => MouseButton::parse(name)?,
        other => {
            return Err(EvalError::Type(format!(
                "mclick() button must be a str, not '{}'",
                other.type_name()
            )))
        }
    };
    let randomize = args.get(1).is_some_and(Value::is_truthy);

    trace!(%button, randomize, "click");
    ctx.motor.click_button(button, randomize);
    Ok(None)
}

fn builtin_print(ctx: &mut CallContext<'_>, args: &[Value]) -> Result<Option<Value>> {
    let line = args
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    ctx.console.write_line(&line);
    Ok(None)
}

fn builtin_len(_: &mut CallContext<'_>, args: &[Value]) -> Result<Option<Value>> {
    match &args[0] {
        Value::Str(s) => Ok(Some(Value::Int(s.chars().count() as i64))),
        other => Err(EvalError::Type(format!(
            "len() argument must be a str, not '{}'",
            other.type_name()
        ))),
    }
}

fn builtin_type(_: &mut CallContext<'_>, args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::from(args[0].type_name())))
}

fn builtin_int(_: &mut CallContext<'_>, args: &[Value]) -> Result<Option<Value>> {
    args[0].to_int().map(|n| Some(Value::Int(n)))
}

fn builtin_float(_: &mut CallContext<'_>, args: &[Value]) -> Result<Option<Value>> {
    args[0].to_float().map(|n| Some(Value::Float(n)))
}

fn builtin_str(_: &mut CallContext<'_>, args: &[Value]) -> Result<Option<Value>> {
    Ok(Some(Value::Str(args[0].to_string())))
}

// =============================================================================
// TESTS
// =============================================================================
