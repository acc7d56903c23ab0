//! Show checkpoint history

use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

pub async fn run(root: &Path, limit: Option<usize>) -> Result<()> {
    let store = util::open_store(root);
    let items = store.list()?;

    if items.is_empty() {
        println!("{}", "No checkpoints yet".dimmed());
        return Ok(());
    }

    let limit = limit.unwrap_or(20);
    for meta in items.iter().take(limit) {
        util::display_checkpoint_line(meta);
    }

    if items.len() > limit {
        println!(
            "{}",
            format!("... and {} more", items.len() - limit).dimmed()
        );
    }

    Ok(())
}
