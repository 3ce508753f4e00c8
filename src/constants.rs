/// DOM hooks shared by the pages, the card surface and the stylesheet.
///
/// The markup is generated from Rust, so these only need to agree with
/// `style.rs`; `index.html` provides nothing but `#app`.
pub const APP_ROOT_ID: &str = "app";
pub const STYLE_ELEMENT_ID: &str = "card-site-style";

// Card layers, outermost first
pub const CARD_SURFACE_CLASS: &str = "card";
pub const CARD_TILT_CLASS: &str = "card-tilt";
pub const CARD_SHEEN_CLASS: &str = "card-sheen";
pub const CARD_FLIP_CLASS: &str = "card-flip";
pub const CARD_FACE_FRONT_CLASS: &str = "card-face card-front";
pub const CARD_FACE_BACK_CLASS: &str = "card-face card-back";

pub const CARD_PERSPECTIVE_PX: u32 = 1200;

// Welcome splash
pub const WORDMARK_OPACITY_KEYS: [f32; 3] = [0.0, 1.0, 1.0];
pub const WORDMARK_BLUR_KEYS_PX: [f32; 3] = [10.0, 0.0, 0.0];
