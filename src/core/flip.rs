use super::constants::{FLIP_ANGLE_DEG, FLIP_CURVE, FLIP_DURATION_SEC};
use super::easing::CubicBezier;
use glam::{Mat3, Vec3};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipState {
    pub is_flipped: bool,
}

impl FlipState {
    #[inline]
    pub fn toggle(&mut self) -> bool {
        self.is_flipped = !self.is_flipped;
        self.is_flipped
    }

    /// Resting `rotateY` of the inner layer for the current state.
    #[inline]
    pub fn target_angle(&self) -> f32 {
        if self.is_flipped {
            FLIP_ANGLE_DEG
        } else {
            0.0
        }
    }
}

/// Keys that activate a focused card, matched against `KeyboardEvent.key`.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Only space is swallowed, so the page does not scroll. Enter keeps its
/// default and still follows a focused link inside the card.
#[inline]
pub fn activation_prevents_default(key: &str) -> bool {
    key == " "
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

// Normals this close to the screen plane count as edge-on
const EDGE_ON_EPSILON: f32 = 1e-4;

/// Whether a layer whose resting orientation is `face` points at the viewer
/// when its container is rotated `rotation_deg` about Y. Mirrors what
/// `backface-visibility: hidden` does in the compositor.
pub fn face_visible(face: Face, rotation_deg: f32) -> bool {
    let base = match face {
        Face::Front => 0.0,
        Face::Back => FLIP_ANGLE_DEG,
    };
    let normal = Mat3::from_rotation_y((rotation_deg + base).to_radians()) * Vec3::Z;
    normal.z > EDGE_ON_EPSILON
}

/// The face a viewer sees at `rotation_deg`; `None` edge-on.
pub fn facing(rotation_deg: f32) -> Option<Face> {
    if face_visible(Face::Front, rotation_deg) {
        Some(Face::Front)
    } else if face_visible(Face::Back, rotation_deg) {
        Some(Face::Back)
    } else {
        None
    }
}

/// Eased rotation between two resting angles.
#[derive(Clone, Copy, Debug)]
pub struct FlipTransition {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
    curve: CubicBezier,
}

impl Default for FlipTransition {
    fn default() -> Self {
        Self::settled(0.0)
    }
}

impl FlipTransition {
    pub fn settled(angle: f32) -> Self {
        Self {
            from: angle,
            to: angle,
            elapsed: FLIP_DURATION_SEC,
            duration: FLIP_DURATION_SEC,
            curve: CubicBezier::from_array(FLIP_CURVE),
        }
    }

    pub fn with_timing(mut self, duration_sec: f32, curve: CubicBezier) -> Self {
        let done = self.is_done();
        self.duration = duration_sec.max(0.0);
        self.elapsed = if done {
            self.duration
        } else {
            self.elapsed.min(self.duration)
        };
        self.curve = curve;
        self
    }

    /// Start towards `to` from wherever the rotation currently is.
    pub fn retarget(&mut self, to: f32) {
        self.from = self.angle();
        self.to = to;
        self.elapsed = 0.0;
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt.as_secs_f32()).min(self.duration);
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn angle(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let e = self.curve.progress(self.elapsed / self.duration);
        self.from + (self.to - self.from) * e
    }
}
