pub mod models;
pub mod navigation;
pub mod sample;

// Start-up settings read from the platform config directory
pub mod config;

pub mod ui;
