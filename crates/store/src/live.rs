//! Live document location and access
//!
//! The live document is the currently-published application data, shared
//! with the rest of the deployment. Its location is re-resolved on every
//! operation so a file created by another process becomes visible without a
//! restart.

use crate::error::Result;
use crate::fsutil::atomic_write;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Pick the live document location: the first candidate that exists wins;
/// when none exist yet, the first candidate is the default write target.
///
/// Pure over the candidate list; callers hold the invariant that the list
/// is non-empty (config normalization guarantees it).
pub fn resolve_path(candidates: &[PathBuf]) -> PathBuf {
    candidates
        .iter()
        .find(|p| p.exists())
        .cloned()
        .unwrap_or_else(|| candidates[0].clone())
}

/// Read the live document, `{}` when missing or unparseable.
pub fn read(path: &Path) -> Value {
    match std::fs::read_to_string(path) {
        Ok(text) => serde_json::from_str(&text).unwrap_or_else(|_| empty_document()),
        Err(_) => empty_document(),
    }
}

/// Overwrite the live document atomically, pretty-printed. Full replace,
/// not a merge.
pub fn write(path: &Path, data: &Value) -> Result<()> {
    let body = serde_json::to_vec_pretty(data)?;
    atomic_write(path, &body)
}

fn empty_document() -> Value {
    Value::Object(serde_json::Map::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_prefers_first_existing_candidate() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("appdata.json");
        let second = dir.path().join("data/appdata.json");

        std::fs::create_dir_all(second.parent().unwrap()).unwrap();
        std::fs::write(&second, "{}").unwrap();

        // Only the second candidate exists
        let candidates = vec![first.clone(), second.clone()];
        assert_eq!(resolve_path(&candidates), second);

        // Once the first appears, it wins
        std::fs::write(&first, "{}").unwrap();
        assert_eq!(resolve_path(&candidates), first);
    }

    #[test]
    fn test_resolve_defaults_to_first_candidate() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("appdata.json");
        let second = dir.path().join("data/appdata.json");

        assert_eq!(resolve_path(&[first.clone(), second]), first);
    }

    #[test]
    fn test_read_falls_back_to_empty_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appdata.json");

        assert_eq!(read(&path), json!({}));

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(read(&path), json!({}));
    }

    #[test]
    fn test_write_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("appdata.json");

        let doc = json!({ "cohorts": [{ "courses": [] }], "vendors": [1, 2] });
        write(&path, &doc).unwrap();

        assert_eq!(read(&path), doc);
    }
}
