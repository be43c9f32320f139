//! # Motor Control
//!
//! Capabilities the interpreter drives but never implements itself: moving
//! and clicking the mouse, and writing lines of output. Hosts plug in OS
//! backed versions; [`RecordingMotor`] and [`BufferConsole`] keep everything
//! in memory for tests and dry runs.
//!
//! ## Example
//!
//! ```rust
//! use mighty_eval::motor::{MotorControl, MotorEvent, MouseButton, RecordingMotor};
//!
//! let mut motor = RecordingMotor::default();
//! motor.move_cursor(10, 20);
//! motor.click_button(MouseButton::Left, false);
//! assert_eq!(motor.cursor_position(), (10, 20));
//! assert_eq!(motor.events.len(), 2);
//! ```

use crate::error::{EvalError, Result};
use config::constants::{MOUSE_MAX_CLICK_MS, MOUSE_MIN_CLICK_MS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

// =============================================================================
// CAPABILITIES
// =============================================================================

/// Mouse control used by `mpos` and `mclick`.
pub trait MotorControl {
    /// Move the cursor to an absolute screen position.
    fn move_cursor(&mut self, x: i64, y: i64);

    /// Press and release a button, holding it for a human-like duration when
    /// `randomize` is set.
    fn click_button(&mut self, button: MouseButton, randomize: bool);

    /// Last known cursor position.
    fn cursor_position(&self) -> (i64, i64);
}

/// Line output used by `print`.
pub trait Console {
    /// Write one line of text.
    fn write_line(&mut self, line: &str);
}

/// Mouse buttons scripts can click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Parse a button name, ignoring case.
    ///
    /// ## Errors
    ///
    /// `EvalError::InvalidButton` for anything but left, right or middle.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "middle" => Ok(Self::Middle),
            _ => Err(EvalError::InvalidButton(format!(
                "'{}'. Valid options are 'left', 'right', or 'middle'",
                name
            ))),
        }
    }

    /// Lower-case name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Middle => "middle",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How long a randomized click keeps the button down.
///
/// Uniform over `[MOUSE_MIN_CLICK_MS, MOUSE_MAX_CLICK_MS)` milliseconds.
pub fn randomized_hold<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(rng.random_range(MOUSE_MIN_CLICK_MS..MOUSE_MAX_CLICK_MS))
}

// =============================================================================
// IN-MEMORY IMPLEMENTATIONS
// =============================================================================

/// A motor-control request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotorEvent {
    /// Cursor moved.
    Move { x: i64, y: i64 },
    /// Button clicked.
    Click { button: MouseButton, randomize: bool },
}

/// Motor that records every request instead of touching the OS.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingMotor {
    /// Requests in the order they were made.
    pub events: Vec<MotorEvent>,
    /// Simulated cursor position.
    pub position: (i64, i64),
}

impl RecordingMotor {
    /// Create a recorder with the cursor at a given position.
    pub fn at(x: i64, y: i64) -> Self {
        Self {
            events: Vec::new(),
            position: (x, y),
        }
    }

    /// Only the cursor moves, in order.
    pub fn moves(&self) -> Vec<(i64, i64)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                MotorEvent::Move { x, y } => Some((*x, *y)),
                MotorEvent::Click { .. } => None,
            })
            .collect()
    }
}

impl MotorControl for RecordingMotor {
    fn move_cursor(&mut self, x: i64, y: i64) {
        self.position = (x, y);
        self.events.push(MotorEvent::Move { x, y });
    }

    fn click_button(&mut self, button: MouseButton, randomize: bool) {
        self.events.push(MotorEvent::Click { button, randomize });
    }

    fn cursor_position(&self) -> (i64, i64) {
        self.position
    }
}

/// Console that keeps printed lines in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferConsole {
    /// Lines written so far.
    pub lines: Vec<String>,
}

impl Console for BufferConsole {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Console that prints to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_button_parse_ignores_case() {
        assert_eq!(MouseButton::parse("left"), Ok(MouseButton::Left));
        assert_eq!(MouseButton::parse("RIGHT"), Ok(MouseButton::Right));
        assert_eq!(MouseButton::parse("Middle"), Ok(MouseButton::Middle));
    }

    #[test]
    fn test_button_parse_rejects_unknown() {
        let err = MouseButton::parse("back").unwrap_err();
        assert!(matches!(err, EvalError::InvalidButton(_)));
        assert!(err.to_string().contains("'back'"));
    }

    #[test]
    fn test_randomized_hold_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let hold = randomized_hold(&mut rng).as_millis() as u64;
            assert!((MOUSE_MIN_CLICK_MS..MOUSE_MAX_CLICK_MS).contains(&hold));
        }
    }

    #[test]
    fn test_recording_motor_tracks_position() {
        let mut motor = RecordingMotor::at(5, 5);
        motor.move_cursor(1, 2);
        motor.click_button(MouseButton::Right, true);
        motor.move_cursor(3, 4);
        assert_eq!(motor.cursor_position(), (3, 4));
        assert_eq!(motor.moves(), vec![(1, 2), (3, 4)]);
        assert_eq!(
            motor.events[1],
            MotorEvent::Click {
                button: MouseButton::Right,
                randomize: true
            }
        );
    }

    #[test]
    fn test_buffer_console() {
        let mut console = BufferConsole::default();
        console.write_line("hello");
        assert_eq!(console.lines, vec!["hello"]);
    }
}
