//! Sine carrier.

/// 2π.
pub const TWO_PI: f64 = std::f64::consts::PI * 2.0;

/// Sine carrier evaluated at absolute time `t`.
///
/// Computing the phase from `t` directly keeps every sample a pure function of
/// its index, with no accumulated phase drift.
#[inline]
pub fn sine_at(frequency: f64, t: f64) -> f64 {
    (TWO_PI * frequency * t).sin()
}
