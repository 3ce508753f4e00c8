// Timing curves for declarative transitions.

/// CSS-style `cubic-bezier(x1, y1, x2, y2)` with fixed endpoints (0,0) and (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

pub const EASE_EMPHASIZED: CubicBezier = CubicBezier::new(0.2, 0.8, 0.2, 1.0);
pub const EASE_OUT: CubicBezier = CubicBezier::new(0.0, 0.0, 0.58, 1.0);
pub const EASE_IN_OUT: CubicBezier = CubicBezier::new(0.42, 0.0, 0.58, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f32 = 1e-3;
const SOLVE_EPSILON: f32 = 1e-6;
const BISECT_ITERATIONS: usize = 32;

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn from_array(p: [f32; 4]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }

    /// Eased progress for linear progress `x`; input is clamped to `[0, 1]`.
    pub fn progress(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        let t = self.solve_t_for_x(x);
        sample_curve(self.y1, self.y2, t)
    }

    /// `true` when the curve never leaves `[0, 1]` on the y axis.
    pub fn is_overshoot_free(&self) -> bool {
        (0.0..=1.0).contains(&self.y1) && (0.0..=1.0).contains(&self.y2)
    }

    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }

    fn solve_t_for_x(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let err = sample_curve(self.x1, self.x2, t) - x;
            if err.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = sample_derivative(self.x1, self.x2, t);
            if slope.abs() < NEWTON_MIN_SLOPE {
                break;
            }
            t -= err / slope;
        }

        // x(t) is monotonic for x1, x2 in [0, 1]
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        t = x;
        for _ in 0..BISECT_ITERATIONS {
            let v = sample_curve(self.x1, self.x2, t);
            if (v - x).abs() < SOLVE_EPSILON {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }
}

#[inline]
fn sample_curve(p1: f32, p2: f32, t: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * t + b) * t + c) * t
}

#[inline]
fn sample_derivative(p1: f32, p2: f32, t: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Piecewise keyframe interpolation: `values[i]` at `times[i]` (both in
/// `[0, 1]`, times ascending), each segment eased with `curve`.
pub fn keyframes(values: &[f32], times: &[f32], curve: CubicBezier, progress: f32) -> f32 {
    let n = values.len().min(times.len());
    if n == 0 {
        return 0.0;
    }
    let p = progress.clamp(0.0, 1.0);
    if p <= times[0] {
        return values[0];
    }
    for i in 1..n {
        if p <= times[i] {
            let span = times[i] - times[i - 1];
            let local = if span > 0.0 {
                (p - times[i - 1]) / span
            } else {
                1.0
            };
            let e = curve.progress(local);
            return values[i - 1] + (values[i] - values[i - 1]) * e;
        }
    }
    values[n - 1]
}
