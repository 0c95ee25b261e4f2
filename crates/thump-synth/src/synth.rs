//! Thump synthesizer.
//!
//! Each frame `i` is `peak * sin(2π f t) * exp(-decay t)` with `t = i / rate`,
//! quantized to signed 16-bit PCM. Output is deterministic: identical
//! parameters always yield identical frames.

use crate::envelope::ExpDecay;
use crate::error::{SynthError, SynthResult};
use crate::oscillator::sine_at;
use crate::params::SynthParams;
use crate::quantize::{quantize, scale, OverflowPolicy};

/// Quantized mono frames in playback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSequence {
    frames: Vec<i16>,
    sample_rate: u32,
}

impl SampleSequence {
    /// Wraps already quantized frames.
    pub fn new(frames: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            frames,
            sample_rate,
        }
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Frames as a slice.
    pub fn as_slice(&self) -> &[i16] {
        &self.frames
    }

    /// Iterates frames in playback order.
    pub fn iter(&self) -> std::slice::Iter<'_, i16> {
        self.frames.iter()
    }

    /// Consumes the sequence, returning the frames.
    pub fn into_vec(self) -> Vec<i16> {
        self.frames
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.frames.len() as f64 / self.sample_rate as f64
    }
}

impl<'a> IntoIterator for &'a SampleSequence {
    type Item = &'a i16;
    type IntoIter = std::slice::Iter<'a, i16>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl IntoIterator for SampleSequence {
    type Item = i16;
    type IntoIter = std::vec::IntoIter<i16>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

/// Real-valued amplitude of frame `index`, before quantization.
pub fn amplitude_at(params: &SynthParams, index: usize) -> f64 {
    let t = index as f64 / params.sample_rate as f64;
    let carrier = sine_at(params.frequency, t);
    let envelope = ExpDecay::new(params.decay_rate).at(t);
    params.peak_amplitude * carrier * envelope
}

/// Synthesizes the thump, saturating any frame that exceeds 16-bit range.
pub fn synthesize(params: &SynthParams) -> SynthResult<SampleSequence> {
    synthesize_with(params, OverflowPolicy::Saturate)
}

/// Synthesizes the thump with an explicit overflow policy.
///
/// Parameters are validated before any frame is computed.
pub fn synthesize_with(
    params: &SynthParams,
    policy: OverflowPolicy,
) -> SynthResult<SampleSequence> {
    params.validate()?;

    let num_frames = params.num_frames();
    let mut frames = Vec::with_capacity(num_frames);

    for index in 0..num_frames {
        let amplitude = amplitude_at(params, index);
        let frame = quantize(amplitude, policy).ok_or_else(|| SynthError::RangeOverflow {
            index,
            scaled: scale(amplitude),
        })?;
        frames.push(frame);
    }

    Ok(SampleSequence::new(frames, params.sample_rate))
}
