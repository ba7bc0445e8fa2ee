//! In-memory session store
//!
//! Backs tests and the ephemeral fallback path when no data directory is
//! available. Honors the same expiry semantics as the file store.

use super::{SessionRecord, SessionStore, StoreError};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// HashMap-backed session store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, (DateTime<Utc>, SessionRecord)>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored (possibly expired) entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<SessionRecord>, StoreError> {
        match self.entries.get(key) {
            Some((expires_at, _)) if *expires_at <= Utc::now() => Ok(None),
            Some((_, record)) => Ok(Some(record.clone())),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, record: &SessionRecord, ttl: Duration) -> Result<(), StoreError> {
        self.entries
            .insert(key.to_string(), (Utc::now() + ttl, record.clone()));
        Ok(())
    }
}
