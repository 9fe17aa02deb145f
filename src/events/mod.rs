pub mod keyboard;
pub mod nav;
pub mod pointer;
pub mod reveal;
pub mod scroll;

pub use keyboard::wire_escape_closes_nav;
pub use nav::wire_nav_drawer;
pub use pointer::wire_tilt_cards;
pub use reveal::wire_reveals;
pub use scroll::{wire_parallax, wire_sticky_header};
