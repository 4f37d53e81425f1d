mod pointer;
mod resize;

pub use pointer::{wire_pointermove, PointerWiring};
pub use resize::wire_resize;
