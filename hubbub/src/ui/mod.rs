pub mod core;
pub mod icons;
pub mod panels;
pub mod theme;

mod app;

pub use app::*;
