//! JSON-file session store
//!
//! One file per key under a data directory, each wrapping the record in an
//! envelope with an absolute UTC expiry. Expired or unparseable payloads
//! load as absent (logged), matching the defensive-fallback error policy.

use super::{SessionRecord, SessionStore, StoreError};
use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed session store
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    expires_at: DateTime<Utc>,
    record: SessionRecord,
}

impl FileStore {
    /// Store sessions under `dir` (created on first save)
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store sessions under the platform data directory
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` when no data directory exists for
    /// the current user.
    pub fn open_default() -> Result<Self, StoreError> {
        let base = dirs::data_dir()
            .ok_or_else(|| StoreError::Unavailable("no user data directory".to_string()))?;
        Ok(Self::new(base.join("pitwall")))
    }

    /// Directory the store writes into
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<SessionRecord>, StoreError> {
        let path = self.path_for(key);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Unavailable(e.to_string())),
        };

        let envelope: Envelope = match serde_json::from_str(&content) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Discarding unparseable session file {}: {e}", path.display());
                return Ok(None);
            }
        };

        if envelope.expires_at <= Utc::now() {
            debug!("Session file {} has expired", path.display());
            return Ok(None);
        }

        Ok(Some(envelope.record))
    }

    fn save(&mut self, key: &str, record: &SessionRecord, ttl: Duration) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let envelope = Envelope {
            expires_at: Utc::now() + ttl,
            record: record.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        fs::write(self.path_for(key), json).map_err(|e| StoreError::Unavailable(e.to_string()))
    }
}
