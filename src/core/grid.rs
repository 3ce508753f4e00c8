use super::constants::{GRID_COLS, GRID_PULSE_BASE_SEC, GRID_PULSE_SPREAD_SEC, GRID_ROWS};

#[inline]
pub fn cell_count() -> usize {
    GRID_ROWS * GRID_COLS
}

/// Pulse period for background cell `i`; columns further right pulse slower.
#[inline]
pub fn cell_pulse_duration(i: usize) -> f32 {
    let col = (i % GRID_COLS) as f32;
    GRID_PULSE_BASE_SEC + (col / GRID_COLS as f32) * GRID_PULSE_SPREAD_SEC
}
