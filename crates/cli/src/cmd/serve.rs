//! Run the HTTP API server

use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

const DEFAULT_PORT: u16 = 8787;

pub async fn run(root: &Path, port: Option<u16>) -> Result<()> {
    // 1. Open the store over the project's artifact locations
    let store = util::open_store(root);

    // 2. Pick the port: flag, then REWIND_PORT, then default
    let port = match port {
        Some(port) => port,
        None => std::env::var("REWIND_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_PORT),
    };

    println!(
        "{} {}",
        "Serving checkpoint API on".bold(),
        format!("http://0.0.0.0:{port}").cyan()
    );
    println!(
        "{} {}",
        "History artifact:".dimmed(),
        store.config().history_path.display()
    );

    // 3. Serve until interrupted
    server::start_server(store, port).await
}
