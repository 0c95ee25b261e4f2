//! Conversion of real amplitudes to signed 16-bit PCM.

use serde::{Deserialize, Serialize};

/// Full-scale multiplier for 16-bit PCM.
pub const PCM16_SCALE: f64 = 32767.0;

/// What to do with a scaled amplitude that falls outside `i16`.
///
/// Only reachable when the peak amplitude exceeds 1.0, since the envelope
/// never rises above unity. Neither policy wraps around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Clamp to [-32768, 32767].
    #[default]
    Saturate,
    /// Refuse to quantize.
    Reject,
}

/// Scales `amplitude` to 16-bit full scale, truncating toward zero.
#[inline]
pub fn scale(amplitude: f64) -> f64 {
    (amplitude * PCM16_SCALE).trunc()
}

/// Quantizes one amplitude under `policy`.
///
/// Returns `None` if the value is rejected. NaN is rejected by both policies.
pub fn quantize(amplitude: f64, policy: OverflowPolicy) -> Option<i16> {
    let scaled = scale(amplitude);
    if scaled.is_nan() {
        return None;
    }

    let min = i16::MIN as f64;
    let max = i16::MAX as f64;
    if (min..=max).contains(&scaled) {
        return Some(scaled as i16);
    }

    match policy {
        OverflowPolicy::Saturate => Some(scaled.clamp(min, max) as i16),
        OverflowPolicy::Reject => None,
    }
}
