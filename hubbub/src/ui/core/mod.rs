mod panel;

pub use panel::*;
