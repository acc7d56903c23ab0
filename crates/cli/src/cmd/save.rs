//! Create a checkpoint from a JSON document file

use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::path::Path;

pub async fn run(root: &Path, file: &Path, message: Option<String>) -> Result<()> {
    // 1. Read the document
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let data: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    // 2. Snapshot it
    let store = util::open_store(root);
    let id = store.create(message, data)?;

    println!(
        "{} Created checkpoint {}",
        "✓".green(),
        id.to_string().yellow()
    );

    Ok(())
}
