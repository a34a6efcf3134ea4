//! Atomic I/O operations

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::{Error, Result};

/// Read the entire content of a text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file.
///
/// Uses write-to-temp-then-rename: the temp file is created in the target's
/// directory (same filesystem, so the rename is atomic) with a restrictive
/// 0o600 creation mode, flushed to disk, then renamed over the target. A
/// reader of the target never observes a partial write; on any error before
/// the rename the target is untouched and the temp file is removed on drop.
///
/// If the target already exists its permission mode is carried over to the
/// replacement, so files owned by other software keep their modes.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    temp.write_all(content)
        .map_err(|e| Error::io(temp.path().to_path_buf(), e))?;

    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(temp.path(), meta.permissions())
            .map_err(|e| Error::io(temp.path().to_path_buf(), e))?;
    }

    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path().to_path_buf(), e))?;

    temp.persist(path).map_err(|e| Error::io(path, e.error))?;

    tracing::debug!(path = %path.display(), "atomically replaced file");
    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
