//! Show one checkpoint in detail

use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use store::ContentCounts;

pub async fn run(root: &Path, reference: &str) -> Result<()> {
    // 1. Load the checkpoint
    let store = util::open_store(root);
    let checkpoint = store.get(reference)?;

    // 2. Display metadata
    println!(
        "{} {}",
        "Checkpoint".bold(),
        checkpoint.id.to_string().yellow()
    );
    println!(
        "{}  {}",
        "Created:".dimmed(),
        util::format_relative_time(checkpoint.ts_unix_ms)
    );
    println!("{}  {}", "Message:".dimmed(), checkpoint.message);
    println!(
        "{}    {}",
        "Delta:".dimmed(),
        util::format_delta(&checkpoint.delta).cyan()
    );

    // 3. Content summary of the stored document
    let counts = ContentCounts::of(&checkpoint.data);
    println!();
    println!("Cohorts: {}", counts.cohorts.to_string().yellow());
    println!("Courses: {}", counts.courses.to_string().yellow());
    println!("Lessons: {}", counts.lessons.to_string().yellow());

    Ok(())
}
