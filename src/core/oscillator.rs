use super::constants::FLOAT_AMPLITUDE;

/// Wall-clock driven float along the viewing axis.
///
/// The phase comes straight from the clock, so sampling at an irregular
/// cadence never accumulates drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatOscillator {
    pub amplitude: f32,
}

impl Default for FloatOscillator {
    fn default() -> Self {
        Self {
            amplitude: FLOAT_AMPLITUDE,
        }
    }
}

impl FloatOscillator {
    pub fn new(amplitude: f32) -> Self {
        Self { amplitude }
    }

    #[inline]
    pub fn sample(&self, now_sec: f64) -> f32 {
        // sin in f64: epoch seconds are too large for f32 phase
        (now_sec.sin() as f32) * self.amplitude
    }
}
