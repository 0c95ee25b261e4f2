//! Synthesis parameters.
//!
//! A [`SynthParams`] value fully determines the rendered waveform. It is
//! created once, validated, and never mutated during a render.

use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

/// Largest frame count whose data chunk still fits the 32-bit RIFF size field.
pub const MAX_FRAMES: u64 = (u32::MAX as u64 - 36) / 2;

/// Largest sample rate whose 16-bit mono byte rate fits in a `u32`.
pub const MAX_SAMPLE_RATE: u32 = u32::MAX / 2;

/// Acoustic parameters of a decaying sine thump.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SynthParams {
    /// Carrier frequency in Hz.
    pub frequency: f64,
    /// Clip length in seconds.
    pub duration: f64,
    /// Peak amplitude, nominally in [0, 1].
    pub peak_amplitude: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Exponential decay rate in 1/seconds.
    pub decay_rate: f64,
}

impl Default for SynthParams {
    fn default() -> Self {
        Self::thump()
    }
}

impl SynthParams {
    /// Creates a new parameter set. Call [`SynthParams::validate`] before use.
    pub fn new(
        frequency: f64,
        duration: f64,
        peak_amplitude: f64,
        sample_rate: u32,
        decay_rate: f64,
    ) -> Self {
        Self {
            frequency,
            duration,
            peak_amplitude,
            sample_rate,
            decay_rate,
        }
    }

    /// The reference haptic thump: 60 Hz for 0.2 s at full scale, decaying at 15/s.
    ///
    /// 60 Hz sits where most phone speakers resonate.
    pub fn thump() -> Self {
        Self::new(60.0, 0.2, 1.0, 44100, 15.0)
    }

    /// Parses a parameter set from JSON.
    pub fn from_json(json: &str) -> SynthResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the parameter set to pretty JSON.
    pub fn to_json(&self) -> SynthResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of frames rendered, `round(sample_rate * duration)`.
    pub fn num_frames(&self) -> usize {
        self.frame_count_f64().round() as usize
    }

    fn frame_count_f64(&self) -> f64 {
        self.sample_rate as f64 * self.duration
    }

    /// Checks the parameters against the domain of the synthesizer.
    ///
    /// A zero duration is accepted and produces an empty clip.
    pub fn validate(&self) -> SynthResult<()> {
        if self.sample_rate == 0 || self.sample_rate > MAX_SAMPLE_RATE {
            return Err(SynthError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(SynthError::InvalidDuration {
                duration: self.duration,
            });
        }
        validate_non_negative("frequency", self.frequency)?;
        validate_non_negative("peak_amplitude", self.peak_amplitude)?;
        validate_non_negative("decay_rate", self.decay_rate)?;

        let frames = self.frame_count_f64().round();
        if frames > MAX_FRAMES as f64 {
            return Err(SynthError::TooManyFrames {
                frames: frames as u64,
            });
        }
        Ok(())
    }
}

fn validate_non_negative(name: &str, value: f64) -> SynthResult<()> {
    if !value.is_finite() {
        return Err(SynthError::invalid_param(name, "must be finite"));
    }
    if value < 0.0 {
        return Err(SynthError::invalid_param(
            name,
            format!("must be non-negative, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_thump_defaults() {
        let params = SynthParams::default();
        assert_eq!(params, SynthParams::thump());
        assert_eq!(params.frequency, 60.0);
        assert_eq!(params.duration, 0.2);
        assert_eq!(params.peak_amplitude, 1.0);
        assert_eq!(params.sample_rate, 44100);
        assert_eq!(params.decay_rate, 15.0);
        assert_eq!(params.num_frames(), 8820);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_frame_count_rounds() {
        // 4 * 0.375 = 1.5 rounds away from zero
        let params = SynthParams::new(60.0, 0.375, 1.0, 4, 15.0);
        assert_eq!(params.num_frames(), 2);

        let params = SynthParams::new(60.0, 0.3, 1.0, 10, 15.0);
        assert_eq!(params.num_frames(), 3);

        let params = SynthParams::new(60.0, 0.0, 1.0, 44100, 15.0);
        assert_eq!(params.num_frames(), 0);
    }

    #[test]
    fn test_rejects_zero_sample_rate() {
        let params = SynthParams::new(60.0, 0.2, 1.0, 0, 15.0);
        assert!(matches!(
            params.validate(),
            Err(SynthError::InvalidSampleRate { rate: 0 })
        ));
    }

    #[test]
    fn test_rejects_sample_rate_above_byte_rate_limit() {
        let params = SynthParams::new(60.0, 0.0, 1.0, MAX_SAMPLE_RATE + 1, 15.0);
        assert!(matches!(
            params.validate(),
            Err(SynthError::InvalidSampleRate { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_duration() {
        for duration in [-0.1, f64::NAN, f64::INFINITY] {
            let params = SynthParams::new(60.0, duration, 1.0, 44100, 15.0);
            assert!(matches!(
                params.validate(),
                Err(SynthError::InvalidDuration { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_negative_or_nan_fields() {
        let cases = [
            SynthParams::new(-1.0, 0.2, 1.0, 44100, 15.0),
            SynthParams::new(60.0, 0.2, f64::NAN, 44100, 15.0),
            SynthParams::new(60.0, 0.2, 1.0, 44100, -15.0),
        ];
        for params in cases {
            let err = params.validate().unwrap_err();
            assert_eq!(err.code(), "THUMP_003");
        }
    }

    #[test]
    fn test_rejects_oversized_clip() {
        let params = SynthParams::new(60.0, 1.0e6, 1.0, 44100, 15.0);
        assert!(matches!(
            params.validate(),
            Err(SynthError::TooManyFrames { .. })
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let json = r#"{
            "frequency": 80.0,
            "duration": 0.1,
            "peak_amplitude": 0.5,
            "sample_rate": 22050,
            "decay_rate": 20.0
        }"#;
        let params = SynthParams::from_json(json).unwrap();
        assert_eq!(params, SynthParams::new(80.0, 0.1, 0.5, 22050, 20.0));

        let reparsed = SynthParams::from_json(&params.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, params);
    }

    #[test]
    fn test_json_rejects_unknown_fields() {
        let json = r#"{
            "frequency": 80.0,
            "duration": 0.1,
            "peak_amplitude": 0.5,
            "sample_rate": 22050,
            "decay_rate": 20.0,
            "volume": 1.0
        }"#;
        let err = SynthParams::from_json(json).unwrap_err();
        assert_eq!(err.code(), "THUMP_006");
    }
}
