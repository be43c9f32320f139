//! # Mighty Eval
//!
//! Interpreter, environment and built-ins for the Mighty automation
//! language.
//!
//! ## Architecture
//!
//! ```text
//! Program → Interpreter ─┬→ Environment (variables, functions, wait ticks)
//!                        ├→ MotorControl (mpos, mclick)
//!                        └→ Console (print)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use mighty_eval::{run_program, BufferConsole, RecordingMotor};
//!
//! let program = mighty_parser::parse("print(\"hi\")").unwrap();
//! let (_, console) = run_program(&program, RecordingMotor::default(), BufferConsole::default()).unwrap();
//! assert_eq!(console.lines, vec!["hi"]);
//! ```

pub mod builtins;
pub mod environment;
pub mod error;
pub mod interpreter;
pub mod motor;
pub mod value;

// Re-export public API
pub use environment::Environment;
pub use error::EvalError;
pub use interpreter::Interpreter;
pub use motor::{BufferConsole, Console, MotorControl, MotorEvent, MouseButton, RecordingMotor, StdoutConsole};
pub use value::Value;

use config::constants::EngineParameters;
use mighty_parser::Program;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Run a whole program at once, ignoring tick pacing and waits.
///
/// Useful for checking what a script does without timing. Hosts that need
/// frame pacing drive statements through the engine instead.
///
/// ## Returns
///
/// The motor and console, so the caller can inspect what happened
pub fn run_program<M: MotorControl, C: Console>(
    program: &Program,
    motor: M,
    console: C,
) -> Result<(M, C), EvalError> {
    let mut interpreter = Interpreter::new(motor, console, EngineParameters::default());
    let mut env = Environment::new();
    for statement in &program.statements {
        interpreter.execute(statement, &mut env)?;
    }
    Ok(interpreter.into_parts())
}

// =============================================================================
// TESTS
// =============================================================================
