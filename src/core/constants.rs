// Interaction and animation tuning shared by the card surface and pages.

// Pointer tilt gains (degrees per unit of normalized pointer offset)
pub const TILT_GAIN_X: f32 = 14.0; // vertical pointer offset -> rotateX
pub const TILT_GAIN_Y: f32 = 18.0; // horizontal pointer offset -> rotateY

// Float oscillator
pub const FLOAT_AMPLITUDE: f32 = 6.0; // translateZ magnitude in px
pub const FLOAT_SAMPLE_INTERVAL_MS: i32 = 33; // ~30 Hz

// Flip transition
pub const FLIP_DURATION_SEC: f32 = 0.6;
pub const FLIP_ANGLE_DEG: f32 = 180.0;
pub const FLIP_CURVE: [f32; 4] = [0.2, 0.8, 0.2, 1.0];

// Splash timing
pub const WELCOME_TOTAL_MS: i32 = 2200; // auto-navigate to /about after this
pub const WELCOME_FADE_SEC: f32 = 0.45;
pub const WORDMARK_GROW_SEC: f32 = 1.4;
pub const WORDMARK_SCALE_KEYS: [f32; 3] = [0.6, 1.12, 1.0];
pub const WORDMARK_TIME_KEYS: [f32; 3] = [0.0, 0.7, 1.0];
pub const GLOW_DELAY_SEC: f32 = 0.2;
pub const GLOW_FADE_SEC: f32 = 0.8;
pub const SPLASH_SETTLE_SEC: f32 = 1.4; // every splash keyframe is at rest by now

// Hero title fade-up
pub const HERO_FADE_SEC: f32 = 0.6;
pub const HERO_SUBTITLE_DELAY_SEC: f32 = 0.05;

// Background grid
pub const GRID_ROWS: usize = 7;
pub const GRID_COLS: usize = 10;
pub const GRID_PULSE_BASE_SEC: f32 = 6.0;
pub const GRID_PULSE_SPREAD_SEC: f32 = 3.0;
pub const GRID_OPACITY_KEYS: [f32; 3] = [0.4, 1.0, 0.4];

// Static export base path used by production builds
pub const BASE_PATH: &str = "/3DBusinessCard";
