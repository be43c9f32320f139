mod cli;
mod error;
mod motor;

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use mighty_engine::Engine;
use mighty_eval::StdoutConsole;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::CommandLine;
use error::{Error, Result};
use motor::DryRunMotor;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    match run(CommandLine::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: CommandLine) -> Result<()> {
    let source = fs::read_to_string(&args.file).map_err(|source| Error::Read {
        path: args.file.clone(),
        source,
    })?;

    if args.check {
        let program = mighty_parser::parse(&source)?;
        println!("{}: {} statements", args.file.display(), program.len());
        return Ok(());
    }

    let params = args.params()?;
    let motor = DryRunMotor::new();
    let mut engine = match args.recorded_tps {
        Some(recorded) => Engine::with_recorded_rate(&source, recorded, params, motor, StdoutConsole)?,
        None => Engine::new(&source, params, motor, StdoutConsole)?,
    };

    engine.run_to_completion()?;
    info!(ticks = engine.ticks_elapsed(), "done");
    Ok(())
}
