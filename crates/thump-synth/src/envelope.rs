//! Exponential decay envelope.
//!
//! The thump has an instantaneous attack and no sustain: amplitude starts at
//! unity and falls off as `exp(-rate * t)`.

/// Exponential decay envelope parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpDecay {
    /// Decay rate in 1/seconds. Zero holds the envelope at unity.
    pub rate: f64,
}

impl ExpDecay {
    /// Creates a new decay envelope.
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    /// Envelope level at `t` seconds after onset.
    #[inline]
    pub fn at(&self, t: f64) -> f64 {
        (-self.rate * t).exp()
    }

    /// Time in seconds for the envelope to fall to half its level.
    ///
    /// Returns `None` when the envelope never decays.
    pub fn half_life(&self) -> Option<f64> {
        if self.rate > 0.0 {
            Some(std::f64::consts::LN_2 / self.rate)
        } else {
            None
        }
    }
}
