pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_card_keydown;
pub use pointer::wire_card_pointer;
