//! Filesystem helpers

use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write `data` to `target` atomically.
///
/// The bytes go to a temporary file in the target's directory, get fsynced,
/// then replace the target in a single rename. A crash between those steps
/// leaves the previous target content intact; readers never observe a
/// partial write. Parent directories are created when absent.
pub fn atomic_write(target: &Path, data: &[u8]) -> Result<()> {
    let dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_target() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested/deeper/doc.json");

        atomic_write(&target, b"{\"a\":1}").unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"{\"a\":1}");
    }

    #[test]
    fn test_atomic_write_replaces_target() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("doc.json");

        atomic_write(&target, b"old").unwrap();
        atomic_write(&target, b"new").unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"new");
    }

    #[test]
    fn test_interrupted_write_leaves_target_intact() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("doc.json");
        std::fs::write(&target, b"original").unwrap();

        // Simulate a crash after the temporary-file stage but before the
        // atomic replace: the temp file is written and then abandoned.
        let mut tmp = NamedTempFile::new_in(dir.path()).unwrap();
        tmp.write_all(b"half-written replacement").unwrap();
        tmp.as_file().sync_all().unwrap();
        drop(tmp);

        assert_eq!(std::fs::read(&target).unwrap(), b"original");
    }
}
