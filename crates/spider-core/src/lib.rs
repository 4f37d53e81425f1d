pub mod config;
pub mod constants;
pub mod cursor;
pub mod draw;
pub mod grid;
pub mod orbit;
pub mod spring;
pub mod state;
pub mod web;

pub use config::*;
pub use cursor::*;
pub use draw::*;
pub use orbit::*;
pub use spring::*;
pub use state::*;
pub use web::*;
