pub mod pointer;
pub mod touch;
pub mod window;

pub use pointer::{wire_pointer_handlers, PointerWiring};
pub use touch::wire_gesture_handlers;
pub use window::{wire_nav_links, wire_resize, wire_scroll};
