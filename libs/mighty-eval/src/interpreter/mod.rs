//! # Interpreter
//!
//! Tree-walking execution of statements against an [`Environment`].
//!
//! The interpreter owns the motor, the console and the jitter random source;
//! the environment is passed in so the engine can keep inspecting it between
//! ticks.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::EngineParameters;
//! use mighty_eval::{BufferConsole, Environment, Interpreter, RecordingMotor};
//!
//! let program = mighty_parser::parse("x: int = 2 + 3\nprint(x)").unwrap();
//! let mut interpreter = Interpreter::new(
//!     RecordingMotor::default(),
//!     BufferConsole::default(),
//!     EngineParameters::default(),
//! );
//! let mut env = Environment::new();
//! for statement in &program.statements {
//!     interpreter.execute(statement, &mut env).unwrap();
//! }
//! assert_eq!(interpreter.console().lines, vec!["5"]);
//! ```

use crate::builtins::{self, CallContext};
use crate::environment::Environment;
use crate::error::{EvalError, Result};
use crate::motor::{Console, MotorControl};
use crate::value::Value;
use config::constants::{EngineParameters, STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
use mighty_parser::ast::{Declaration, Expression, FunctionCall, FunctionDef, Statement};
use rand::rngs::StdRng;
use rand::SeedableRng;
use stacker::maybe_grow;
use tracing::debug;


/// Statement and expression evaluator.
pub struct Interpreter<M: MotorControl, C: Console> {
    motor: M,
    console: C,
    params: EngineParameters,
    rng: StdRng,
}

impl<M: MotorControl, C: Console> Interpreter<M, C> {
    /// Creates an interpreter with an OS-seeded random source.
    pub fn new(motor: M, console: C, params: EngineParameters) -> Self {
        Self::with_rng(motor, console, params, StdRng::from_os_rng())
    }

    /// Creates an interpreter with a caller-supplied random source.
    pub fn with_rng(motor: M, console: C, params: EngineParameters, rng: StdRng) -> Self {
        Self {
            motor,
            console,
            params,
            rng,
        }
    }

    /// Motor the interpreter drives.
    pub fn motor(&self) -> &M {
        &self.motor
    }

    /// Console `print` writes to.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Parameters the interpreter runs with.
    pub fn params(&self) -> &EngineParameters {
        &self.params
    }

    /// Gives back the motor and console.
    pub fn into_parts(self) -> (M, C) {
        (self.motor, self.console)
    }

    // =========================================================================
    // STATEMENTS
    // =========================================================================

    /// Executes one statement.
    ///
    /// ## Returns
    ///
    /// The value of a function call statement, `None` for everything else.
    pub fn execute(&mut self, statement: &Statement, env: &mut Environment) -> Result<Option<Value>> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.execute_inner(statement, env)
        })
    }

    fn execute_inner(&mut self, statement: &Statement, env: &mut Environment) -> Result<Option<Value>> {
        match statement {
            Statement::Declaration(decl) => {
                self.declare(decl, env)?;
                Ok(None)
            }
            Statement::FunctionDef(def) => {
                self.define(def, env)?;
                Ok(None)
            }
            Statement::FunctionCall(call) => self.call(call, env),
            Statement::SameTick(group) => {
                debug!(statements = group.len(), "same-tick group");
                for statement in group {
                    self.execute(statement, env)?;
                }
                Ok(None)
            }
        }
    }

    fn declare(&mut self, decl: &Declaration, env: &mut Environment) -> Result<()> {
        let value = self.evaluate(&decl.expr, env)?.coerce(&decl.var_type)?;
        debug!(name = %decl.name, %value, "declare");
        env.set(&decl.name, value);
        Ok(())
    }

    fn define(&mut self, def: &FunctionDef, env: &mut Environment) -> Result<()> {
        if builtins::is_builtin(&def.name) {
            return Err(EvalError::ReservedName(def.name.clone()));
        }
        debug!(name = %def.name, params = def.params.len(), "define function");
        env.define_function(def.clone());
        Ok(())
    }

    /// Calls a built-in or user function.
    ///
    /// Built-ins win over user functions. A user function runs in a fresh
    /// environment holding only its parameters; arguments are evaluated in
    /// the caller's environment. The value of the body's last statement is
    /// the result. A wait started inside the body carries back to the caller
    /// unless the caller is already waiting.
    fn call(&mut self, call: &FunctionCall, env: &mut Environment) -> Result<Option<Value>> {
        let args = call
            .args
            .iter()
            .map(|arg| self.evaluate(arg, env))
            .collect::<Result<Vec<_>>>()?;

        if let Some(builtin) = builtins::lookup(&call.name) {
            debug!(name = builtin.name, args = args.len(), "call built-in");
            let mut ctx = CallContext {
                env,
                motor: &mut self.motor,
                console: &mut self.console,
                rng: &mut self.rng,
                params: &self.params,
            };
            return builtin.call(&mut ctx, &args);
        }

        let Some(function) = env.function(&call.name) else {
            return Err(EvalError::Name(format!(
                "function '{}' is not defined",
                call.name
            )));
        };
        if function.params.len() != args.len() {
            return Err(EvalError::WrongArgCount {
                name: call.name.clone(),
                expected: function.params.len().to_string(),
                found: args.len(),
            });
        }

        debug!(name = %call.name, args = args.len(), "call function");
        let mut local = Environment::new();
        for (param, value) in function.params.iter().zip(args) {
            local.set(&param.name, value);
        }

        let mut result = None;
        for statement in &function.body {
            result = self.execute(statement, &mut local)?;
        }

        if local.is_waiting() {
            env.request_wait(local.pending_wait_ticks());
        }
        Ok(result)
    }

    // =========================================================================
    // EXPRESSIONS
    // =========================================================================

    /// Evaluates an expression to a value.
    pub fn evaluate(&mut self, expr: &Expression, env: &mut Environment) -> Result<Value> {
        maybe_grow(STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES, || {
            self.evaluate_inner(expr, env)
        })
    }

    fn evaluate_inner(&mut self, expr: &Expression, env: &mut Environment) -> Result<Value> {
        match expr {
            Expression::Literal(literal) => Ok(Value::from(literal)),
            Expression::Identifier(name) => env.get(name).cloned(),
            Expression::Call(call) => self.call(call, env)?.ok_or_else(|| {
                EvalError::Type(format!("{}() returns no value", call.name))
            }),
            Expression::Binary { left, op, right } => {
                let left = self.evaluate(left, env)?;
                let right = self.evaluate(right, env)?;
                left.binary(*op, &right)
            }
        }
    }
}
