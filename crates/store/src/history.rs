//! Bounded checkpoint history on a flat JSON artifact
//!
//! The history is a single JSON array of checkpoints, newest first. Reads
//! never fail: a missing or corrupt artifact is an empty history, healed by
//! the next successful write.

use crate::checkpoint::Checkpoint;
use crate::error::Result;
use crate::fsutil::atomic_write;
use serde::Deserialize;
use std::path::Path;

/// Maximum number of checkpoints retained; older entries are silently
/// dropped when a new one would exceed this.
pub const MAX_CHECKPOINTS: usize = 50;

/// Read the history artifact, newest first. Missing or unparseable
/// artifacts read as empty.
pub fn read(path: &Path) -> Vec<Checkpoint> {
    match std::fs::read_to_string(path) {
        Ok(text) => parse(&text),
        Err(_) => Vec::new(),
    }
}

/// Persist the full history atomically, pretty-printed.
pub fn write(path: &Path, items: &[Checkpoint]) -> Result<()> {
    let body = serde_json::to_vec_pretty(items)?;
    atomic_write(path, &body)
}

/// Accepts the bare-array shape this store writes, plus the wrapped
/// `{"items": [...]}` shape older tooling produced.
fn parse(text: &str) -> Vec<Checkpoint> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum HistoryFile {
        Flat(Vec<Checkpoint>),
        Wrapped { items: Vec<Checkpoint> },
    }

    match serde_json::from_str(text) {
        Ok(HistoryFile::Flat(items)) => items,
        Ok(HistoryFile::Wrapped { items }) => items,
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample(message: &str) -> Checkpoint {
        Checkpoint::new(message.to_string(), json!({ "cohorts": [] }), None)
    }

    #[test]
    fn test_missing_artifact_reads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(read(&dir.path().join("absent.json")).is_empty());
    }

    #[test]
    fn test_corrupt_artifact_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checkpoints.json");

        std::fs::write(&path, "{ not json at all").unwrap();
        assert!(read(&path).is_empty());

        // Well-formed JSON of the wrong shape is corrupt too
        std::fs::write(&path, "\"just a string\"").unwrap();
        assert!(read(&path).is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checkpoints.json");

        let items = vec![sample("two"), sample("one")];
        write(&path, &items).unwrap();

        let back = read(&path);
        assert_eq!(back.len(), 2);
        assert_eq!(back[0].id, items[0].id);
        assert_eq!(back[0].message, "two");
        assert_eq!(back[1].message, "one");
    }

    #[test]
    fn test_wrapped_items_shape_is_accepted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checkpoints.json");

        let inner = serde_json::to_value(vec![sample("wrapped")]).unwrap();
        let wrapped = json!({ "items": inner });
        std::fs::write(&path, serde_json::to_vec_pretty(&wrapped).unwrap()).unwrap();

        let back = read(&path);
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].message, "wrapped");
    }

    #[test]
    fn test_corrupt_artifact_heals_on_next_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checkpoints.json");

        std::fs::write(&path, "garbage").unwrap();
        write(&path, &[sample("fresh")]).unwrap();

        let back = read(&path);
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].message, "fresh");
    }
}
