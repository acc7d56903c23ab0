//! Store configuration
//!
//! Artifact locations are configuration, not hardcoded paths. An optional
//! `rewind.toml` at the project root overrides the defaults:
//!
//! ```toml
//! [store]
//! history_path = "data/checkpoints.json"
//! live_candidates = ["appdata.json", "data/appdata.json"]
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file name probed at the project root
pub const CONFIG_FILE: &str = "rewind.toml";

const DEFAULT_HISTORY_PATH: &str = "data/checkpoints.json";
const DEFAULT_LIVE_CANDIDATES: [&str; 2] = ["appdata.json", "data/appdata.json"];

/// Resolved artifact locations for a store.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Checkpoint history artifact
    pub history_path: PathBuf,
    /// Candidate live document locations, probed in order; never empty
    pub live_candidates: Vec<PathBuf>,
}

impl StoreConfig {
    /// Default locations relative to `root`.
    pub fn with_root(root: &Path) -> Self {
        Self {
            history_path: root.join(DEFAULT_HISTORY_PATH),
            live_candidates: DEFAULT_LIVE_CANDIDATES
                .iter()
                .map(|p| root.join(p))
                .collect(),
        }
    }

    /// Load `<root>/rewind.toml` when present, else defaults. A config file
    /// that does not parse is ignored with a warning rather than taking the
    /// store down.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(_) => return Self::with_root(root),
        };

        match toml::from_str::<ConfigFile>(&text) {
            Ok(file) => Self::from_section(root, file.store),
            Err(e) => {
                tracing::warn!("ignoring unparseable {}: {}", path.display(), e);
                Self::with_root(root)
            }
        }
    }

    fn from_section(root: &Path, section: StoreSection) -> Self {
        let defaults = Self::with_root(root);

        let history_path = section
            .history_path
            .map(|p| root.join(p))
            .unwrap_or(defaults.history_path);

        // An empty candidate list would leave nowhere to write; fall back
        let live_candidates: Vec<PathBuf> = section
            .live_candidates
            .unwrap_or_default()
            .iter()
            .map(|p| root.join(p))
            .collect();
        let live_candidates = if live_candidates.is_empty() {
            defaults.live_candidates
        } else {
            live_candidates
        };

        Self {
            history_path,
            live_candidates,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    store: StoreSection,
}

#[derive(Debug, Default, Deserialize)]
struct StoreSection {
    history_path: Option<PathBuf>,
    live_candidates: Option<Vec<PathBuf>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::load(dir.path());

        assert_eq!(config.history_path, dir.path().join("data/checkpoints.json"));
        assert_eq!(
            config.live_candidates,
            vec![
                dir.path().join("appdata.json"),
                dir.path().join("data/appdata.json"),
            ]
        );
    }

    #[test]
    fn test_config_file_overrides() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"
[store]
history_path = "state/history.json"
live_candidates = ["published.json"]
"#,
        )
        .unwrap();

        let config = StoreConfig::load(dir.path());
        assert_eq!(config.history_path, dir.path().join("state/history.json"));
        assert_eq!(config.live_candidates, vec![dir.path().join("published.json")]);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[store]\nhistory_path = \"h.json\"\n",
        )
        .unwrap();

        let config = StoreConfig::load(dir.path());
        assert_eq!(config.history_path, dir.path().join("h.json"));
        assert_eq!(config.live_candidates.len(), 2);
    }

    #[test]
    fn test_empty_candidates_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[store]\nlive_candidates = []\n",
        )
        .unwrap();

        let config = StoreConfig::load(dir.path());
        assert!(!config.live_candidates.is_empty());
    }

    #[test]
    fn test_unparseable_config_is_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{{ nope").unwrap();

        let config = StoreConfig::load(dir.path());
        assert_eq!(config.history_path, dir.path().join("data/checkpoints.json"));
    }
}
