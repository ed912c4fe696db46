#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use hubbub::config::AppConfig;
use hubbub::ui::AppShell;
use tracing_subscriber::prelude::*;

fn main() -> iced::Result {
    // Initialize tracing (controlled via RUST_LOG)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hubbub=info,iced=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().unwrap_or_else(|err| {
        tracing::warn!(?err, "Cannot load config, using defaults");
        AppConfig::default()
    });

    iced::application(AppShell::title, AppShell::update, AppShell::view)
        .theme(AppShell::theme)
        .window_size((1280.0, 800.0))
        .run_with(move || AppShell::new(config))
}
