use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Advisory file lock serializing snapshot writes.
///
/// Uses platform-native flock (Unix) so a TUI and a CLI invocation running
/// against the same fade directory never interleave their overwrites.
pub struct StoreLock {
    _file: File,
    path: PathBuf,
}

/// Error type for lock operations
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not open lock file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("timed out waiting for {path}: another fade process may be writing")]
    Timeout { path: PathBuf },
}

impl StoreLock {
    /// Acquire the lock, waiting up to `timeout` for a holder to release it.
    pub fn acquire(fade_dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        let path = fade_dir.join(".lock");
        fs::create_dir_all(fade_dir).map_err(|e| LockError::Open {
            path: path.clone(),
            source: e,
        })?;
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|e| LockError::Open {
                path: path.clone(),
                source: e,
            })?;

        let deadline = Instant::now() + timeout;
        while try_flock(&file).is_err() {
            if Instant::now() >= deadline {
                return Err(LockError::Timeout { path });
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        Ok(StoreLock { _file: file, path })
    }

    /// Acquire with the default timeout (2 seconds)
    pub fn acquire_default(fade_dir: &Path) -> Result<Self, LockError> {
        Self::acquire(fade_dir, Duration::from_secs(2))
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        // flock releases when the descriptor closes; the file itself is
        // just a name, safe to clean up
        let _ = fs::remove_file(&self.path);
    }
}

#[cfg(unix)]
fn try_flock(file: &File) -> Result<(), std::io::Error> {
    use std::os::unix::io::AsRawFd;
    let ret = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
    if ret == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

#[cfg(not(unix))]
fn try_flock(_file: &File) -> Result<(), std::io::Error> {
    Ok(())
}
