//! Thump synthesizer
//!
//! Renders a short percussive "thump": a sine carrier shaped by an
//! exponential decay envelope, quantized to signed 16-bit PCM and written as
//! a mono WAV file.
//!
//! # Determinism
//!
//! Every frame is a pure function of its index and the [`SynthParams`], so
//! identical parameters produce byte-identical WAV files. The BLAKE3 hash of
//! the PCM data is reported alongside the bytes for comparison.
//!
//! # Example
//!
//! ```no_run
//! use thump_synth::{render_to_path, SynthParams};
//!
//! let result = render_to_path(&SynthParams::thump(), "thump.wav")?;
//! println!("{} frames, PCM hash {}", result.num_frames, result.pcm_hash);
//! # Ok::<(), thump_synth::SynthError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`params`] - Synthesis parameters and validation
//! - [`synth`] - The synthesizer loop
//! - [`envelope`] - Exponential decay envelope
//! - [`oscillator`] - Sine carrier
//! - [`quantize`] - 16-bit quantization and overflow policy
//! - [`wav`] - Deterministic WAV file writer
//! - [`render`] - In-memory and on-disk rendering

pub mod envelope;
pub mod error;
pub mod oscillator;
pub mod params;
pub mod quantize;
pub mod render;
pub mod synth;
pub mod wav;

// Re-export main types at crate root
pub use error::{SynthError, SynthResult};
pub use params::SynthParams;
pub use quantize::OverflowPolicy;
pub use render::{render, render_to_path, render_with};
pub use synth::{amplitude_at, synthesize, synthesize_with, SampleSequence};
pub use wav::WavResult;
