//! Overwrite the live document from a JSON document file

use crate::util;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde_json::Value;
use std::path::Path;

pub async fn run(root: &Path, file: &Path) -> Result<()> {
    // 1. Read the document
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let data: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    // 2. Publish; this does not create a checkpoint — run `rewind save`
    //    first for a recoverable snapshot
    let store = util::open_store(root);
    let path = store.publish(data)?;

    println!("{} Published to {}", "✓".green(), path.display());

    Ok(())
}
