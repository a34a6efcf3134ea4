//! Service-account-owned file creation under a narrowed umask

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use nix::sys::stat::{Mode, umask};
use nix::unistd::{User, chown};

use crate::{Error, Result};

/// RAII guard that narrows the process umask and restores the previous mask
/// when dropped, on every exit path including errors.
pub struct ScopedUmask {
    previous: Mode,
}

impl ScopedUmask {
    /// Narrow the umask to `mask` until the guard is dropped.
    pub fn new(mask: Mode) -> Self {
        Self {
            previous: umask(mask),
        }
    }

    /// Narrow the umask to 0o077: files and directories created while the
    /// guard lives are readable by their owner only.
    pub fn restrictive() -> Self {
        Self::new(Mode::from_bits_truncate(0o077))
    }
}

impl Drop for ScopedUmask {
    fn drop(&mut self) {
        umask(self.previous);
    }
}

fn chown_err(path: &Path, errno: nix::errno::Errno) -> Error {
    Error::io(path, std::io::Error::from_raw_os_error(errno as i32))
}

/// Write `content` to `path` with owner-only permissions, owned by `account`.
///
/// The account is resolved to its uid/gid before anything is created; an
/// unresolvable account fails with [`Error::UnknownAccount`] and leaves the
/// filesystem untouched. The parent directory is created if missing
/// (idempotent), and both the directory and the file are chowned to the
/// account. The file is opened with mode 0o600 so no window exists where the
/// content is readable by others.
pub fn write_owned_file(path: &Path, content: &str, account: &str) -> Result<()> {
    let user = User::from_name(account)
        .ok()
        .flatten()
        .ok_or_else(|| Error::UnknownAccount {
            name: account.to_string(),
        })?;

    let _mask = ScopedUmask::restrictive();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        chown(parent, Some(user.uid), Some(user.gid)).map_err(|e| chown_err(parent, e))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    file.sync_all().map_err(|e| Error::io(path, e))?;

    chown(path, Some(user.uid), Some(user.gid)).map_err(|e| chown_err(path, e))?;

    tracing::debug!(path = %path.display(), account, "wrote owned file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Runs in the unit-test binary, where nothing else touches the
    // process-global umask concurrently.
    #[test]
    fn test_scoped_umask_restores_previous_mask() {
        let original = umask(Mode::from_bits_truncate(0o022));
        {
            let _guard = ScopedUmask::restrictive();
            let inside = umask(Mode::from_bits_truncate(0o077));
            assert_eq!(inside, Mode::from_bits_truncate(0o077));
        }
        let after = umask(original);
        assert_eq!(after, Mode::from_bits_truncate(0o022));
    }
}
