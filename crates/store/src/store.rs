//! Checkpoint store operations
//!
//! Every operation re-reads the artifacts it needs; nothing is cached
//! across calls. Concurrent writers can lose updates to each other (last
//! write wins) — an accepted property of this low-volume administrative
//! surface rather than something papered over with locking.

use crate::checkpoint::{Checkpoint, CheckpointMeta};
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::history::{self, MAX_CHECKPOINTS};
use crate::live;
use serde_json::Value;
use std::path::PathBuf;
use ulid::Ulid;

/// Label used when the caller supplies none
pub const DEFAULT_MESSAGE: &str = "Checkpoint";

/// Checkpoint store over the history artifact and the live document.
pub struct Store {
    config: StoreConfig,
}

impl Store {
    /// Open a store over the given artifact locations.
    pub fn open(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Artifact locations this store operates on
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Snapshot `data` as a new checkpoint and return its id.
    ///
    /// The document must be a JSON object. The delta is computed against
    /// the newest checkpoint visible in this read of the history; the
    /// history is then capped at [`MAX_CHECKPOINTS`] entries and persisted
    /// in one durable write.
    pub fn create(&self, message: Option<String>, data: Value) -> Result<Ulid> {
        if !data.is_object() {
            return Err(StoreError::MissingData);
        }

        let mut items = history::read(&self.config.history_path);
        let checkpoint = Checkpoint::new(
            message.unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
            data,
            items.first(),
        );
        let id = checkpoint.id;

        items.insert(0, checkpoint);
        items.truncate(MAX_CHECKPOINTS);
        history::write(&self.config.history_path, &items)?;

        tracing::debug!(checkpoint = %id, total = items.len(), "created checkpoint");
        Ok(id)
    }

    /// All checkpoints, newest first, metadata only.
    pub fn list(&self) -> Result<Vec<CheckpointMeta>> {
        let items = history::read(&self.config.history_path);
        Ok(items.iter().map(Checkpoint::meta).collect())
    }

    /// One checkpoint with its full document copy.
    pub fn get(&self, id: &str) -> Result<Checkpoint> {
        let items = history::read(&self.config.history_path);
        find(&items, id).cloned().ok_or(StoreError::NotFound)
    }

    /// Drop every checkpoint. Idempotent and irreversible.
    pub fn clear(&self) -> Result<()> {
        history::write(&self.config.history_path, &[])?;
        tracing::info!("cleared checkpoint history");
        Ok(())
    }

    /// Overwrite the live document with a checkpoint's stored copy.
    /// Returns the live path written. The history itself is untouched.
    pub fn restore(&self, id: &str) -> Result<PathBuf> {
        let items = history::read(&self.config.history_path);
        let found = find(&items, id).ok_or(StoreError::NotFound)?;

        let path = live::resolve_path(&self.config.live_candidates);
        live::write(&path, &found.data)?;

        tracing::info!(checkpoint = %found.id, path = %path.display(), "restored checkpoint");
        Ok(path)
    }

    /// Overwrite the live document with caller-supplied content. Does not
    /// create a checkpoint; callers wanting a recoverable snapshot call
    /// [`Store::create`] first.
    pub fn publish(&self, data: Value) -> Result<PathBuf> {
        if !data.is_object() {
            return Err(StoreError::MissingData);
        }

        let path = live::resolve_path(&self.config.live_candidates);
        live::write(&path, &data)?;

        tracing::info!(path = %path.display(), "published live document");
        Ok(path)
    }

    /// Current live document and its resolved location. Reads `{}` when
    /// the file is missing or unreadable.
    pub fn live(&self) -> (PathBuf, Value) {
        let path = live::resolve_path(&self.config.live_candidates);
        let data = live::read(&path);
        (path, data)
    }
}

/// An id that does not parse as a ULID matches nothing; ids are opaque to
/// callers and a malformed one is just an unknown checkpoint.
fn find<'a>(items: &'a [Checkpoint], id: &str) -> Option<&'a Checkpoint> {
    let id = Ulid::from_string(id).ok()?;
    items.iter().find(|cp| cp.id == id)
}
