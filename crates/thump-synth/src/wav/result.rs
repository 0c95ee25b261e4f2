//! WAV file generation result type.

use std::io;

use crate::synth::SampleSequence;

use super::format::WavFormat;
use super::writer::{frames_to_pcm16, write_wav_to_vec};

/// Result of WAV file generation.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of frames.
    pub num_frames: usize,
}

impl WavResult {
    /// Encodes a mono sequence as a complete WAV file.
    pub fn from_sequence(sequence: &SampleSequence) -> io::Result<Self> {
        Self::from_frames(sequence.as_slice(), sequence.sample_rate())
    }

    /// Encodes raw mono frames as a complete WAV file.
    pub fn from_frames(frames: &[i16], sample_rate: u32) -> io::Result<Self> {
        let pcm = frames_to_pcm16(frames);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate);
        let wav_data = write_wav_to_vec(&format, &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_frames: frames.len(),
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.sample_rate as f64
    }
}
