//! Overwrite the live document from a checkpoint

use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

pub async fn run(root: &Path, reference: &str, yes: bool) -> Result<()> {
    let store = util::open_store(root);

    // 1. Look up the checkpoint first so the prompt can say what it is
    let checkpoint = store.get(reference)?;

    // 2. Confirm; a restore fully replaces the live content
    if !yes {
        println!(
            "Restore checkpoint {} ({}) over the live document?",
            checkpoint.id.to_string().yellow(),
            checkpoint.message
        );
        println!("{}", "Current live content will be replaced.".dimmed());

        if !util::confirm("Continue? [y/N] ")? {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    // 3. Restore
    let path = store.restore(reference)?;

    println!(
        "{} Restored {} to {}",
        "✓".green(),
        checkpoint.id.to_string().yellow(),
        path.display()
    );

    Ok(())
}
