mod keyboard;
mod keys;
mod pointer;

pub use keyboard::wire_keydown;
pub use pointer::{wire_click, wire_resize};
