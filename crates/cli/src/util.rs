//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::{Path, PathBuf};
use store::{CheckpointMeta, Delta, Store, StoreConfig};

/// Resolve the project root: an explicit `--root` wins; otherwise walk up
/// from the cwd to the nearest directory containing rewind.toml, falling
/// back to the cwd itself when none is found.
pub fn resolve_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = explicit {
        return Ok(root);
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(find_root_from(&cwd).unwrap_or(cwd))
}

fn find_root_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if current.join(store::config::CONFIG_FILE).exists() {
            return Some(current);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Open the store for a project root
pub fn open_store(root: &Path) -> Store {
    Store::open(StoreConfig::load(root))
}

/// Ask a yes/no question on stdin
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

/// Format timestamp as relative time ("2 hours ago")
pub fn format_relative_time(ts_ms: u64) -> String {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    let datetime = UNIX_EPOCH + Duration::from_millis(ts_ms);

    if let Ok(elapsed) = SystemTime::now().duration_since(datetime) {
        let seconds = elapsed.as_secs();

        if seconds < 60 {
            format!("{} seconds ago", seconds)
        } else if seconds < 3600 {
            format!("{} minutes ago", seconds / 60)
        } else if seconds < 86400 {
            format!("{} hours ago", seconds / 3600)
        } else if seconds < 604800 {
            format!("{} days ago", seconds / 86400)
        } else {
            format!("{} weeks ago", seconds / 604800)
        }
    } else {
        "in the future".to_string()
    }
}

/// Signed per-field summary, e.g. "cohorts +1 | courses +2 | lessons -3"
pub fn format_delta(delta: &Delta) -> String {
    format!(
        "cohorts {:+} | courses {:+} | lessons {:+}",
        delta.cohorts, delta.courses, delta.lessons
    )
}

/// Display a checkpoint in compact one-line format
pub fn display_checkpoint_line(meta: &CheckpointMeta) {
    let id = meta.id.to_string();
    let id_short = &id[..8];
    let time_str = format_relative_time(meta.ts_unix_ms);

    println!(
        "{} {} {} ({})",
        id_short.yellow(),
        time_str.dimmed(),
        meta.message,
        format_delta(&meta.delta).cyan()
    );
}
