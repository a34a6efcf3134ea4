//! The splice operation: read, validate, rewrite, atomically replace.

use std::path::Path;

use crate::{Error, Result};

/// Marker strings delimiting a managed block, plus the warning banner placed
/// right after the begin marker on every insert.
#[derive(Debug, Clone, Copy)]
pub struct BlockDelimiters<'a> {
    pub begin: &'a str,
    pub end: &'a str,
    pub banner: &'a str,
}

/// Classification of a host file with respect to the managed block.
enum BlockState {
    /// Neither marker present; a block may be appended.
    Absent,
    /// Exactly one well-formed block; byte offset one past the end marker.
    Present { begin_pos: usize, after_end: usize },
}

fn classify(content: &str, delims: &BlockDelimiters<'_>, path: &Path) -> Result<BlockState> {
    let begin_pos = content.find(delims.begin);
    let end_pos = content.find(delims.end);
    match (begin_pos, end_pos) {
        (None, None) => Ok(BlockState::Absent),
        (Some(begin), Some(end)) if end >= begin + delims.begin.len() => {
            Ok(BlockState::Present {
                begin_pos: begin,
                after_end: end + delims.end.len(),
            })
        }
        // Dangling marker, or end before begin: never auto-repaired.
        _ => Err(Error::MalformedBlock {
            path: path.to_path_buf(),
        }),
    }
}

fn splice_in(
    content: &str,
    delims: &BlockDelimiters<'_>,
    body: Option<&str>,
    path: &Path,
) -> Result<String> {
    let (prefix, suffix) = match classify(content, delims, path)? {
        BlockState::Absent => (content, ""),
        BlockState::Present {
            begin_pos,
            after_end,
        } => {
            let suffix = &content[after_end..];
            // Exactly zero or one block is supported; a stray copy of either
            // marker after the block means the file was edited by hand.
            if suffix.contains(delims.begin) || suffix.contains(delims.end) {
                return Err(Error::RepeatedDelimiters {
                    path: path.to_path_buf(),
                });
            }
            (&content[..begin_pos], suffix)
        }
    };

    let mut updated = String::with_capacity(content.len());
    updated.push_str(prefix);
    if let Some(body) = body {
        updated.push_str(delims.begin);
        updated.push_str(delims.banner);
        updated.push_str(body);
        updated.push_str(delims.end);
    }
    updated.push_str(suffix);
    Ok(updated)
}

/// Splice `body` into `content`, returning the rewritten content.
///
/// With `body` present the managed block is inserted (appended when no block
/// exists) or replaced in place; with `body` absent the block is removed.
/// Content outside the block is preserved byte for byte. Fails with
/// [`Error::MalformedBlock`] when only one marker is present or the end
/// marker precedes the begin marker, and with [`Error::RepeatedDelimiters`]
/// when either marker occurs again after a well-formed block.
pub fn splice_content(
    content: &str,
    delims: &BlockDelimiters<'_>,
    body: Option<&str>,
) -> Result<String> {
    splice_in(content, delims, body, Path::new("<content>"))
}

/// Splice `body` into the managed block of the file at `path`.
///
/// The file is read in full, validated, rewritten, and atomically replaced
/// via a same-directory temp file (restrictive creation mode, fsynced, then
/// renamed over the original). On any failure the host file is left exactly
/// as it was; no reader ever observes a partially written file.
pub fn splice_file(path: &Path, delims: &BlockDelimiters<'_>, body: Option<&str>) -> Result<()> {
    let content = uds_fs::io::read_text(path)?;
    let updated = splice_in(&content, delims, body, path)?;
    uds_fs::io::write_atomic(path, updated.as_bytes())?;
    tracing::debug!(
        path = %path.display(),
        action = if body.is_some() { "install" } else { "remove" },
        "spliced managed block"
    );
    Ok(())
}
