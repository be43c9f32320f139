//! # Config Crate
//!
//! Centralized configuration for the Mighty automation engine.
//! Tick rate defaults, click timing bounds, recursion limits and the
//! validated [`constants::EngineParameters`] snapshot handed to the engine
//! by its host all live here.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EngineParameters, DEFAULT_TICKS_PER_SECOND};
//!
//! let params = EngineParameters::default();
//! assert_eq!(params.ticks_per_second, DEFAULT_TICKS_PER_SECOND);
//!
//! let custom = EngineParameters::new(100, (800, 600), 0.0).unwrap();
//! assert_eq!(custom.tick_interval().as_millis(), 10);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated at the Edge**: Parameters are checked once on construction
//! - **Hz Everywhere**: Tick rates are always ticks per second, never milliseconds

pub mod constants;
