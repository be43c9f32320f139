//! Motor and console for dry runs: every request is logged, nothing reaches
//! the operating system.

use mighty_eval::motor::randomized_hold;
use mighty_eval::{MotorControl, MouseButton};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Logs cursor moves and clicks and tracks where the cursor would be.
pub struct DryRunMotor {
    position: (i64, i64),
    rng: StdRng,
}

impl DryRunMotor {
    pub fn new() -> Self {
        Self {
            position: (0, 0),
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for DryRunMotor {
    fn default() -> Self {
        Self::new()
    }
}

impl MotorControl for DryRunMotor {
    fn move_cursor(&mut self, x: i64, y: i64) {
        info!(x, y, "move cursor");
        self.position = (x, y);
    }

    fn click_button(&mut self, button: MouseButton, randomize: bool) {
        if randomize {
            let hold = randomized_hold(&mut self.rng);
            info!(%button, hold_ms = hold.as_millis() as u64, "click");
        } else {
            info!(%button, "click");
        }
    }

    fn cursor_position(&self) -> (i64, i64) {
        self.position
    }
}
