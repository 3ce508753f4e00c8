use super::constants::{
    FLIP_CURVE, FLIP_DURATION_SEC, FLOAT_AMPLITUDE, FLOAT_SAMPLE_INTERVAL_MS, TILT_GAIN_X,
    TILT_GAIN_Y,
};
use super::easing::CubicBezier;
use super::flip::{facing, Face, FlipState, FlipTransition};
use super::oscillator::FloatOscillator;
use super::tilt::{PointerTilt, SurfaceBounds};
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct CardParams {
    pub tilt_gain_x: f32,
    pub tilt_gain_y: f32,
    pub float_amplitude: f32,
    pub float_interval_ms: i32,
    pub flip_duration_sec: f32,
    pub flip_curve: CubicBezier,
}

impl Default for CardParams {
    fn default() -> Self {
        Self {
            tilt_gain_x: TILT_GAIN_X,
            tilt_gain_y: TILT_GAIN_Y,
            float_amplitude: FLOAT_AMPLITUDE,
            float_interval_ms: FLOAT_SAMPLE_INTERVAL_MS,
            flip_duration_sec: FLIP_DURATION_SEC,
            flip_curve: CubicBezier::from_array(FLIP_CURVE),
        }
    }
}

/// Everything the card surface renders from. Input handlers mutate it and
/// mark it dirty; the frame loop reads it once per frame.
#[derive(Clone, Debug)]
pub struct CardState {
    pub params: CardParams,
    pub tilt: PointerTilt,
    pub depth_offset: f32,
    pub flip: FlipState,
    transition: FlipTransition,
    oscillator: FloatOscillator,
    dirty: bool,
}

impl Default for CardState {
    fn default() -> Self {
        Self::new(CardParams::default())
    }
}

impl CardState {
    pub fn new(params: CardParams) -> Self {
        if !params.flip_curve.is_overshoot_free() {
            log::warn!("[card] flip curve {} overshoots", params.flip_curve.css());
        }
        Self {
            params,
            tilt: PointerTilt::default(),
            depth_offset: 0.0,
            flip: FlipState::default(),
            transition: FlipTransition::settled(0.0)
                .with_timing(params.flip_duration_sec, params.flip_curve),
            oscillator: FloatOscillator::new(params.float_amplitude),
            // first frame must write the initial transforms
            dirty: true,
        }
    }

    pub fn on_pointer_move(&mut self, px: f32, py: f32, bounds: Option<SurfaceBounds>) {
        let gains = [self.params.tilt_gain_x, self.params.tilt_gain_y];
        if self.tilt.on_pointer_move(px, py, bounds, gains) {
            self.dirty = true;
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.tilt.on_pointer_leave();
        self.dirty = true;
    }

    /// Toggle the flip and restart the inner rotation towards the new side.
    pub fn on_activate(&mut self) -> bool {
        let flipped = self.flip.toggle();
        self.transition.retarget(self.flip.target_angle());
        self.dirty = true;
        flipped
    }

    pub fn sample_float(&mut self, now_sec: f64) {
        let next = self.oscillator.sample(now_sec);
        if next != self.depth_offset {
            self.depth_offset = next;
            self.dirty = true;
        }
    }

    /// Step the flip transition. Returns the face that came to rest when the
    /// transition finished during this step.
    pub fn advance(&mut self, dt: Duration) -> Option<Face> {
        if self.transition.is_done() {
            return None;
        }
        self.transition.advance(dt);
        self.dirty = true;
        if self.transition.is_done() {
            facing(self.transition.angle())
        } else {
            None
        }
    }

    #[inline]
    pub fn flip_angle(&self) -> f32 {
        self.transition.angle()
    }

    /// Clear and return the dirty flag.
    #[inline]
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn outer_transform(&self) -> String {
        format!(
            "rotateX({:.3}deg) rotateY({:.3}deg) translateZ({:.3}px)",
            self.tilt.tilt_x, self.tilt.tilt_y, self.depth_offset
        )
    }

    pub fn inner_transform(&self) -> String {
        format!("rotateY({:.3}deg)", self.flip_angle())
    }
}
