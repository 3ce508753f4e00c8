/// Client-space rectangle of the card surface, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A surface with no area has not been laid out yet.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Pointer position relative to the surface, `[0, 1]` inside the bounds.
    /// Not clamped: positions outside the surface map outside the unit square.
    #[inline]
    pub fn normalize(&self, px: f32, py: f32) -> [f32; 2] {
        [(px - self.left) / self.width, (py - self.top) / self.height]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTilt {
    pub tilt_x: f32,
    pub tilt_y: f32,
}

impl PointerTilt {
    /// Map a pointer position to rotation. Returns `false` when the surface
    /// is not ready and the tilt was left untouched.
    pub fn on_pointer_move(
        &mut self,
        px: f32,
        py: f32,
        bounds: Option<SurfaceBounds>,
        [gain_x, gain_y]: [f32; 2],
    ) -> bool {
        let Some(bounds) = bounds.filter(SurfaceBounds::is_ready) else {
            return false;
        };
        let [nx, ny] = bounds.normalize(px, py);
        *self = tilt_for_normalized(nx, ny, gain_x, gain_y);
        true
    }

    #[inline]
    pub fn on_pointer_leave(&mut self) {
        *self = Self::default();
    }
}

/// Linear pointer-to-rotation mapping with explicit gains.
#[inline]
pub fn tilt_for_normalized(nx: f32, ny: f32, gain_x: f32, gain_y: f32) -> PointerTilt {
    PointerTilt {
        tilt_x: -(ny - 0.5) * gain_x,
        tilt_y: (nx - 0.5) * gain_y,
    }
}
