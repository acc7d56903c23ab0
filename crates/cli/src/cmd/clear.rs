//! Delete all checkpoints

use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

pub async fn run(root: &Path, yes: bool) -> Result<()> {
    let store = util::open_store(root);
    let count = store.list()?.len();

    if count == 0 {
        println!("{}", "No checkpoints to clear".dimmed());
        return Ok(());
    }

    if !yes {
        println!(
            "This permanently deletes {} checkpoint(s). There is no undo.",
            count.to_string().yellow()
        );

        if !util::confirm("Continue? [y/N] ")? {
            println!("{}", "Aborted".dimmed());
            return Ok(());
        }
    }

    store.clear()?;
    println!("{} Cleared {} checkpoint(s)", "✓".green(), count);

    Ok(())
}
