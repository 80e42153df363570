//! Bearer credential storage.
//!
//! The credential outlives any single request: it is written by login and
//! registration flows, read by the HTTP wrapper on every outgoing call, and
//! removed on logout. Keeping the storage behind a trait lets tests inject
//! an in-memory fake instead of touching the real token file.

use std::io;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

/// Where the bearer credential lives between requests.
pub trait CredentialStore: Send + Sync {
    /// Current token, if a session is active.
    fn get(&self) -> Option<String>;

    /// Persist the token after a successful login or registration.
    fn set(&self, token: &str) -> io::Result<()>;

    /// Drop the stored token (logout).
    fn clear(&self) -> io::Result<()>;
}

/// Token persisted as a single file under the platform data directory.
///
/// The file is re-read on every request, so external changes (another
/// process logging out, for example) take effect immediately.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store the token at `<platform data dir>/budget-tracker/token`.
    pub fn at_default_location() -> io::Result<Self> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "no platform data directory")
        })?;
        Ok(Self::new(data_dir.join("budget-tracker").join("token")))
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    fn set(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// In-memory credential store for tests and short-lived embeddings.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out already holding a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<String> {
        self.lock().clone()
    }

    fn set(&self, token: &str) -> io::Result<()> {
        *self.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.lock() = None;
        Ok(())
    }
}
