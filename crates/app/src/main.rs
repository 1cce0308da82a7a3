//! PMS Staff - hotel staff dashboard console
//!
//! Reads commands from stdin, renders the dashboard as text, and keeps a
//! live header clock. All state is in memory.

use std::path::PathBuf;

use pms_core::DashboardConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod console;
mod state;
mod viewmodel;

fn main() {
    // Initialize logging; stdout belongs to the console
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting PMS Staff");

    let config_path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => match DashboardConfig::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("Failed to resolve config path: {}", e);
                std::process::exit(1);
            }
        },
    };

    // Initialize application state
    let app_state = match state::AppState::new(&config_path) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    // Single-threaded runtime: every store mutation runs to completion on this thread
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(console::run(app_state)) {
        tracing::error!("Console stopped: {}", e);
        std::process::exit(1);
    }

    tracing::info!("PMS Staff exited");
}
