//! Show the live document location and content summary

use crate::util;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use store::ContentCounts;

pub async fn run(root: &Path) -> Result<()> {
    let store = util::open_store(root);
    let (path, data) = store.live();

    println!("{} {}", "Live document".bold(), path.display());
    if !path.exists() {
        println!(
            "{}",
            "File does not exist yet; it reads as an empty document".dimmed()
        );
    }

    let counts = ContentCounts::of(&data);
    println!();
    println!("Cohorts: {}", counts.cohorts.to_string().yellow());
    println!("Courses: {}", counts.courses.to_string().yellow());
    println!("Lessons: {}", counts.lessons.to_string().yellow());

    Ok(())
}
