//! # Engine
//!
//! Frame-paced scheduler. The engine owns the parsed program and the
//! top-level environment, and runs at most one statement per tick.
//!
//! ## Tick Contract
//!
//! ```text
//! waiting? ── yes ─→ spend one wait tick
//!    │ no
//!    ▼
//! next statement? ── none ─→ Finished (no sleep)
//!    │
//!    ▼
//! execute ─→ sleep(tick interval − elapsed) ─→ Running
//! ```
//!
//! A same-tick group is a single statement, so `a() -> b()` costs one tick.
//! The host stops a run simply by no longer calling
//! [`Engine::advance_one_tick`].

use std::thread;
use std::time::{Duration, Instant};

use config::constants::{ConfigError, EngineParameters};
use mighty_eval::{Console, Environment, Interpreter, MotorControl};
use mighty_parser::Program;
use tracing::{debug, info};

use crate::error::Result;
use crate::resample;

// =============================================================================
// PACING
// =============================================================================

/// Observable scheduler state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickState {
    /// Statements remain.
    Running,
    /// The program ran out of statements or failed.
    Finished,
}

/// Clock and sleep used to hold the tick rate.
pub trait Pacer {
    /// Current time.
    fn now(&self) -> Instant;

    /// Block for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// Pacer backed by the system clock and `thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

// =============================================================================
// ENGINE
// =============================================================================

/// Runs a Mighty program one tick at a time.
///
/// ## Example
///
/// ```rust
/// use config::constants::EngineParameters;
/// use mighty_engine::{Engine, TickState};
/// use mighty_eval::{BufferConsole, RecordingMotor};
///
/// let params = EngineParameters::new(1000, (800, 600), 0.0).unwrap();
/// let mut engine = Engine::new(
///     "print(\"hi\")",
///     params,
///     RecordingMotor::default(),
///     BufferConsole::default(),
/// )
/// .unwrap();
///
/// assert_eq!(engine.advance_one_tick().unwrap(), TickState::Running);
/// assert_eq!(engine.advance_one_tick().unwrap(), TickState::Finished);
/// assert_eq!(engine.console().lines, vec!["hi"]);
/// ```
pub struct Engine<M: MotorControl, C: Console, P: Pacer = ThreadPacer> {
    program: Program,
    next_statement: usize,
    env: Environment,
    interpreter: Interpreter<M, C>,
    pacer: P,
    tick_interval: Duration,
    ticks_elapsed: u64,
    finished: bool,
}

impl<M: MotorControl, C: Console> Engine<M, C, ThreadPacer> {
    /// Builds an engine for source written at the target tick rate.
    pub fn new(source: &str, params: EngineParameters, motor: M, console: C) -> Result<Self> {
        Self::build(source, None, params, motor, console, ThreadPacer)
    }

    /// Builds an engine for source recorded at another tick rate.
    ///
    /// Runs of `mpos` lines are resampled from `recorded_ticks_per_second`
    /// to the target rate before parsing. Equal rates leave the source as
    /// written.
    pub fn with_recorded_rate(
        source: &str,
        recorded_ticks_per_second: u32,
        params: EngineParameters,
        motor: M,
        console: C,
    ) -> Result<Self> {
        if recorded_ticks_per_second == 0 {
            return Err(ConfigError::InvalidTickRate(recorded_ticks_per_second).into());
        }
        Self::build(
            source,
            Some(recorded_ticks_per_second),
            params,
            motor,
            console,
            ThreadPacer,
        )
    }
}

impl<M: MotorControl, C: Console, P: Pacer> Engine<M, C, P> {
    fn build(
        source: &str,
        recorded_ticks_per_second: Option<u32>,
        params: EngineParameters,
        motor: M,
        console: C,
        pacer: P,
    ) -> Result<Self> {
        params.validate()?;

        let lines = mighty_parser::clean_lines(source.lines());
        let mut tokens = mighty_parser::tokenize_lines(&lines)?;

        let resampled = match recorded_ticks_per_second {
            Some(recorded) if recorded != params.ticks_per_second => {
                tokens = resample::resample(tokens, recorded, params.ticks_per_second);
                true
            }
            _ => false,
        };

        let program = mighty_parser::parse_tokens(tokens)?;
        info!(
            statements = program.len(),
            ticks_per_second = params.ticks_per_second,
            resampled,
            "engine ready"
        );

        Ok(Self {
            program,
            next_statement: 0,
            env: Environment::new(),
            interpreter: Interpreter::new(motor, console, params),
            pacer,
            tick_interval: params.tick_interval(),
            ticks_elapsed: 0,
            finished: false,
        })
    }

    /// Swaps the pacer, keeping everything else.
    pub fn with_pacer<Q: Pacer>(self, pacer: Q) -> Engine<M, C, Q> {
        Engine {
            program: self.program,
            next_statement: self.next_statement,
            env: self.env,
            interpreter: self.interpreter,
            pacer,
            tick_interval: self.tick_interval,
            ticks_elapsed: self.ticks_elapsed,
            finished: self.finished,
        }
    }

    /// Runs one tick.
    ///
    /// While a wait is pending the tick only counts it down. Otherwise the
    /// next statement runs. Either way the call then sleeps out the rest of
    /// the tick interval. Once no statement remains, `Finished` is returned
    /// without sleeping. An error finishes the engine.
    pub fn advance_one_tick(&mut self) -> Result<TickState> {
        if self.finished {
            return Ok(TickState::Finished);
        }

        let statement = if self.env.is_waiting() {
            None
        } else {
            match self.program.statements.get(self.next_statement) {
                Some(statement) => {
                    self.next_statement += 1;
                    Some(statement)
                }
                None => {
                    debug!(ticks = self.ticks_elapsed, "program finished");
                    self.finished = true;
                    return Ok(TickState::Finished);
                }
            }
        };

        let started = self.pacer.now();
        self.ticks_elapsed += 1;

        match statement {
            Some(statement) => {
                debug!(tick = self.ticks_elapsed, index = self.next_statement - 1, "execute");
                if let Err(err) = self.interpreter.execute(statement, &mut self.env) {
                    self.finished = true;
                    return Err(err.into());
                }
            }
            None => {
                self.env.consume_wait_tick();
                debug!(
                    tick = self.ticks_elapsed,
                    remaining = self.env.pending_wait_ticks(),
                    "wait"
                );
            }
        }

        let elapsed = self.pacer.now().saturating_duration_since(started);
        if let Some(rest) = self.tick_interval.checked_sub(elapsed) {
            if !rest.is_zero() {
                self.pacer.sleep(rest);
            }
        }

        Ok(TickState::Running)
    }

    /// Advances until the program finishes or fails.
    pub fn run_to_completion(&mut self) -> Result<()> {
        while self.advance_one_tick()? == TickState::Running {}
        Ok(())
    }

    /// Current scheduler state.
    pub fn state(&self) -> TickState {
        if self.finished {
            TickState::Finished
        } else {
            TickState::Running
        }
    }

    /// Top-level environment.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Program being run.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Motor the program drives.
    pub fn motor(&self) -> &M {
        self.interpreter.motor()
    }

    /// Console the program prints to.
    pub fn console(&self) -> &C {
        self.interpreter.console()
    }

    /// Pacer holding the tick rate.
    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Ticks that returned `Running`.
    pub fn ticks_elapsed(&self) -> u64 {
        self.ticks_elapsed
    }

    /// Gives back the motor and console.
    pub fn into_parts(self) -> (M, C) {
        self.interpreter.into_parts()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mighty_eval::{BufferConsole, RecordingMotor};

    fn engine(source: &str) -> Result<Engine<RecordingMotor, BufferConsole>> {
        Engine::new(
            source,
            EngineParameters::new(1000, (800, 600), 0.0)?,
            RecordingMotor::default(),
            BufferConsole::default(),
        )
    }

    #[test]
    fn test_empty_program_finishes_immediately() {
        let mut engine = engine("").unwrap();
        assert_eq!(engine.state(), TickState::Running);
        assert_eq!(engine.advance_one_tick().unwrap(), TickState::Finished);
        assert_eq!(engine.state(), TickState::Finished);
        assert_eq!(engine.ticks_elapsed(), 0);
    }

    #[test]
    fn test_comments_and_blank_lines_are_not_statements() {
        let engine = engine("// setup\n\n   print(1)   \n\n").unwrap();
        assert_eq!(engine.program().len(), 1);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = EngineParameters {
            ticks_per_second: 0,
            ..EngineParameters::default()
        };
        let result = Engine::new("print(1)", params, RecordingMotor::default(), BufferConsole::default());
        assert!(matches!(
            result,
            Err(crate::EngineError::Config(ConfigError::InvalidTickRate(0)))
        ));
    }

    #[test]
    fn test_zero_recorded_rate_rejected() {
        let result = Engine::with_recorded_rate(
            "mpos(1, 1)",
            0,
            EngineParameters::default(),
            RecordingMotor::default(),
            BufferConsole::default(),
        );
        assert!(matches!(result, Err(crate::EngineError::Config(_))));
    }

    #[test]
    fn test_finished_engine_stays_finished() {
        let mut engine = engine("print(1)").unwrap();
        engine.run_to_completion().unwrap();
        assert_eq!(engine.advance_one_tick().unwrap(), TickState::Finished);
        assert_eq!(engine.console().lines, vec!["1"]);
    }
}
