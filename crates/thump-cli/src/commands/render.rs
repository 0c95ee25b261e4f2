//! Render command implementation
//!
//! Renders the reference thump and writes it as a WAV asset.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use thump_synth::{render_to_path, SynthParams};

/// Where the thump asset is written, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "assets/audio/thump.wav";

/// Run the render command
///
/// # Arguments
/// * `params` - Synthesis parameters
/// * `output` - Output WAV path; its directory must already exist
///
/// # Returns
/// Exit code: 0 success, 1 parameter error. I/O failures are returned as errors.
pub fn run(params: &SynthParams, output: &Path) -> Result<ExitCode> {
    println!(
        "{} {} Hz, {} s, decay {}/s -> {}",
        "Generating:".cyan().bold(),
        params.frequency,
        params.duration,
        params.decay_rate,
        output.display()
    );

    match render_to_path(params, output) {
        Ok(result) => {
            println!(
                "{} Generated {} ({} frames @ {} Hz)",
                "SUCCESS".green().bold(),
                output.display(),
                result.num_frames,
                result.sample_rate
            );
            println!("  {} {}", "PCM hash:".dimmed(), result.pcm_hash);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_domain_error() => {
            eprintln!("{} [{}] {}", "ERROR".red().bold(), err.code(), err);
            Ok(ExitCode::from(1))
        }
        Err(err) => {
            Err(anyhow::Error::new(err).context(format!("Failed to write {}", output.display())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_writes_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thump.wav");

        run(&SynthParams::thump(), &path).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().channels, 1);
        assert_eq!(reader.duration(), 8820);
    }

    #[test]
    fn test_invalid_params_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thump.wav");
        let params = SynthParams::new(60.0, -1.0, 1.0, 44100, 15.0);

        assert!(run(&params, &path).is_ok());
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets").join("audio").join("thump.wav");

        let err = run(&SynthParams::thump(), &path).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
        assert!(!path.exists());
    }

    #[test]
    fn test_default_output_is_relative() {
        assert!(Path::new(DEFAULT_OUTPUT).is_relative());
        assert!(DEFAULT_OUTPUT.ends_with(".wav"));
    }
}
