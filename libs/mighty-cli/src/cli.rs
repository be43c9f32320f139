use std::path::PathBuf;

use clap::Parser;
use config::constants::{
    ConfigError, EngineParameters, DEFAULT_SCREEN_BOUNDS, DEFAULT_TICKS_PER_SECOND,
};

/// Run a Mighty automation script without touching the real mouse.
#[derive(Debug, Parser)]
#[clap(name = "mighty", version)]
pub struct CommandLine {
    /// Script to run.
    pub file: PathBuf,

    /// Playback rate in ticks per second.
    #[clap(long, default_value_t = DEFAULT_TICKS_PER_SECOND)]
    pub tps: u32,

    /// Rate the script was recorded at, if it differs from --tps.
    #[clap(long)]
    pub recorded_tps: Option<u32>,

    /// Screen width in pixels.
    #[clap(long, default_value_t = DEFAULT_SCREEN_BOUNDS.0)]
    pub width: u32,

    /// Screen height in pixels.
    #[clap(long, default_value_t = DEFAULT_SCREEN_BOUNDS.1)]
    pub height: u32,

    /// Maximum random offset in pixels applied to every mpos.
    #[clap(long, default_value_t = 0.0)]
    pub randomness: f64,

    /// Only lex and parse, then report the statement count.
    #[clap(long)]
    pub check: bool,
}

impl CommandLine {
    /// Engine parameters from the flags.
    pub fn params(&self) -> Result<EngineParameters, ConfigError> {
        EngineParameters::new(self.tps, (self.width, self.height), self.randomness)
    }
}
