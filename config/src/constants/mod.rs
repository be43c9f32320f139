//! Centralized configuration values shared across the Mighty crates.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// SCHEDULING
// =============================================================================

/// Tick rate used when the host does not supply one.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TICKS_PER_SECOND;
/// assert!(DEFAULT_TICKS_PER_SECOND > 0);
/// ```
pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

// =============================================================================
// MOTOR CONTROL
// =============================================================================

/// Screen size assumed when the host does not report one.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_SCREEN_BOUNDS;
/// assert_eq!(DEFAULT_SCREEN_BOUNDS, (1920, 1080));
/// ```
pub const DEFAULT_SCREEN_BOUNDS: (u32, u32) = (1920, 1080);

/// Upper bound for the per-axis cursor jitter, in pixels.
///
/// # Examples
/// ```
/// use config::constants::MAX_POSITION_RANDOMNESS;
/// assert!(MAX_POSITION_RANDOMNESS > 0.0);
/// ```
pub const MAX_POSITION_RANDOMNESS: f64 = 100.0;

/// Shortest hold time of a randomized click, in milliseconds.
///
/// # Examples
/// ```
/// use config::constants::{MOUSE_MIN_CLICK_MS, MOUSE_MAX_CLICK_MS};
/// assert!(MOUSE_MIN_CLICK_MS < MOUSE_MAX_CLICK_MS);
/// ```
pub const MOUSE_MIN_CLICK_MS: u64 = 55;

/// Exclusive upper bound of a randomized click hold time, in milliseconds.
pub const MOUSE_MAX_CLICK_MS: u64 = 135;

// =============================================================================
// RESAMPLING
// =============================================================================

/// Most points a single resampled `mpos` run may expand to.
///
/// # Examples
/// ```
/// use config::constants::MAX_RESAMPLED_RUN_POINTS;
/// assert!(MAX_RESAMPLED_RUN_POINTS > 1);
/// ```
pub const MAX_RESAMPLED_RUN_POINTS: usize = 65_536;

// =============================================================================
// RECURSION
// =============================================================================

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which `stacker` allocates a fresh segment.
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

// =============================================================================
// ENGINE PARAMETERS
// =============================================================================

/// Immutable per-run settings supplied by the host that drives the engine.
///
/// # Examples
/// ```
/// use config::constants::EngineParameters;
/// let params = EngineParameters::new(50, (1280, 720), 2.5).expect("valid parameters");
/// assert_eq!(params.screen_bounds, (1280, 720));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineParameters {
    /// Target scheduler rate in ticks per second (Hz).
    pub ticks_per_second: u32,
    /// Width and height of the screen in pixels.
    pub screen_bounds: (u32, u32),
    /// Maximum cursor jitter per axis in pixels; zero disables jitter.
    pub position_randomness: f64,
}

impl EngineParameters {
    /// Builds parameters, rejecting values the scheduler cannot honour.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, EngineParameters};
    /// assert_eq!(
    ///     EngineParameters::new(0, (10, 10), 0.0).unwrap_err(),
    ///     ConfigError::InvalidTickRate(0)
    /// );
    /// ```
    pub fn new(
        ticks_per_second: u32,
        screen_bounds: (u32, u32),
        position_randomness: f64,
    ) -> Result<Self, ConfigError> {
        let params = Self {
            ticks_per_second,
            screen_bounds,
            position_randomness,
        };
        params.validate()?;
        Ok(params)
    }

    /// Re-checks parameters that may have been built by hand or deserialized.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ticks_per_second == 0 {
            return Err(ConfigError::InvalidTickRate(self.ticks_per_second));
        }
        let (width, height) = self.screen_bounds;
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidScreenBounds(width, height));
        }
        let r = self.position_randomness;
        if !r.is_finite() || !(0.0..=MAX_POSITION_RANDOMNESS).contains(&r) {
            return Err(ConfigError::InvalidRandomness(r));
        }
        Ok(())
    }

    /// Wall-clock length of one tick.
    ///
    /// # Examples
    /// ```
    /// use config::constants::EngineParameters;
    /// let params = EngineParameters::new(4, (10, 10), 0.0).unwrap();
    /// assert_eq!(params.tick_interval().as_millis(), 250);
    /// ```
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.ticks_per_second.max(1)))
    }
}

impl Default for EngineParameters {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            screen_bounds: DEFAULT_SCREEN_BOUNDS,
            position_randomness: 0.0,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when the tick rate is zero.
    #[error("ticks_per_second must be positive: {0}")]
    InvalidTickRate(u32),
    /// Raised when either screen dimension is zero.
    #[error("screen bounds must be non-zero: {0}x{1}")]
    InvalidScreenBounds(u32, u32),
    /// Raised when the jitter is negative, not finite, or above the ceiling.
    #[error("position_randomness must be within 0..=100: {0}")]
    InvalidRandomness(f64),
}
