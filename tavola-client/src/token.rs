//! Token storage
//!
//! One bearer token at a time, read at the start of every request and
//! written only by login success and the 401 handler. The store is an
//! injected trait object so hosts and tests can substitute their own
//! persistence.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistent slot holding the session's bearer token
pub trait TokenStore: Send + Sync {
    /// Current token, if a session is live
    fn get(&self) -> Option<String>;
    /// Replace the stored token
    fn set(&self, token: &str);
    /// Evict the stored token
    fn clear(&self);
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredToken {
    token: String,
}

/// File-backed token store, surviving process restarts
///
/// Unreadable or malformed files degrade to "no token"; expiry is not
/// inspected here, it is detected reactively through 401 responses.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        let json = fs::read_to_string(&self.path).ok()?;
        let stored: StoredToken = serde_json::from_str(&json).ok()?;
        Some(stored.token)
    }

    fn set(&self, token: &str) {
        let stored = StoredToken {
            token: token.to_string(),
        };
        let write = self.ensure_dir().and_then(|_| {
            let json = serde_json::to_string_pretty(&stored)?;
            fs::write(&self.path, json)
        });
        if let Err(e) = write {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist token");
        }
    }

    fn clear(&self) {
        if self.path.exists()
            && let Err(e) = fs::remove_file(&self.path)
        {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to clear token");
        }
    }
}

/// In-memory token store for tests and hosts that manage persistence
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.lock().expect("token slot poisoned").clone()
    }

    fn set(&self, token: &str) {
        *self.slot.lock().expect("token slot poisoned") = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot.lock().expect("token slot poisoned") = None;
    }
}
