//! LoL Meta AI - Main Entry Point
//!
//! Native landing screen for the LoL Meta AI analytics platform.

use lolmeta_gui::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting LoL Meta AI landing screen...");

    // Run the GPUI application
    run_app();
}
