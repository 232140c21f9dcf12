//! Arkem Storybook - Main Entry Point
//!
//! Component gallery for the Arkem design system.

use arkem_ui::app::application::run_app;

fn main() {
    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = match arkem_ui::logger::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Failed to initialize file logging: {e}");
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::from_default_env()
                        .add_directive(tracing::Level::INFO.into()),
                )
                .init();
            None
        }
    };

    tracing::info!("Starting Arkem Storybook...");

    run_app();
}
