pub mod card;
pub mod constants;
pub mod easing;
pub mod flip;
pub mod grid;
pub mod oscillator;
pub mod route;
pub mod tilt;

pub use card::*;
pub use constants::*;
pub use easing::*;
pub use flip::*;
pub use route::*;
pub use tilt::*;
