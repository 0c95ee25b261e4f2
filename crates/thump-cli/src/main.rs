//! Thump CLI - renders the haptic thump asset
//!
//! Takes no arguments: writes the reference thump to
//! `assets/audio/thump.wav` under the working directory.

use std::path::Path;
use std::process::ExitCode;

use thump_cli::commands;
use thump_synth::SynthParams;

fn main() -> ExitCode {
    let result = commands::render::run(
        &SynthParams::thump(),
        Path::new(commands::render::DEFAULT_OUTPUT),
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(2)
        }
    }
}
