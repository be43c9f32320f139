//! # Mighty Engine
//!
//! Frame-paced execution for the Mighty automation language.
//!
//! ## Architecture
//!
//! ```text
//! Source → clean lines → Lexer → [resample] → Parser → Program
//!                                                        │
//!                       Engine::advance_one_tick ◄───────┘
//!                              │
//!                              ▼
//!                  Interpreter + Environment
//! ```
//!
//! The resampler only runs when a script recorded at one tick rate is
//! played back at another.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::EngineParameters;
//! use mighty_engine::Engine;
//! use mighty_eval::{BufferConsole, RecordingMotor};
//!
//! let source = "x: int = 5\ny: float = 10.5\nprint(x + y)";
//! let params = EngineParameters::new(1000, (1920, 1080), 0.0).unwrap();
//! let mut engine =
//!     Engine::new(source, params, RecordingMotor::default(), BufferConsole::default()).unwrap();
//! engine.run_to_completion().unwrap();
//! assert_eq!(engine.console().lines, vec!["15.5"]);
//! ```

pub mod engine;
pub mod error;
pub mod resample;

// Re-export public API
pub use engine::{Engine, Pacer, ThreadPacer, TickState};
pub use error::EngineError;
pub use resample::{resample, to_interval, Point};
