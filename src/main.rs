//! sim -- synthesizes mouse clicks and keystrokes through the macOS input
//! pipeline.
//!
//! Entry point: logger setup, configuration, argument parsing, dispatch.
//! Every failure prints its message to stdout and exits 1.

mod cli;
mod config;
mod error;
mod keycodes;
mod platform;
mod synth;

use std::process;

use error::SimError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        log::debug!("sim: exiting after {:?}", err);
        println!("{err}");
        process::exit(err.exit_code());
    }
}

fn run() -> Result<(), SimError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    cli::parse_action(args.as_slice())?;
    let config = config::load()?;
    let command = cli::parse_args(args.as_slice(), &config)?;
    log::debug!("sim: {:?}", command);

    let injector = platform::create_event_injector(config.injection.tap)?;
    synth::perform(injector.as_ref(), &command)?;
    Ok(())
}
