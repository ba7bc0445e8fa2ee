//! Day-scoped session persistence
//!
//! The game only needs a small key-value surface: load a possibly-present
//! session record, save one with an expiry. Storage trouble is never fatal —
//! a failed load means "no prior session" and a failed save is logged while
//! the in-memory session stays authoritative.

mod file;
mod memory;
mod record;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::SessionRecord;

use chrono::Duration;
use std::fmt;

/// The fixed key the daily session record is stored under
pub const SESSION_KEY: &str = "daily_session";

/// Error type for storage operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store cannot be reached or written
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "Session store unavailable: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Adapter interface the game session persists through
pub trait SessionStore {
    /// Load the record stored under `key`, if present and unexpired
    ///
    /// Corrupt or expired payloads are reported as `Ok(None)`; only a store
    /// that cannot be reached at all errors.
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` when the store cannot be read.
    fn load(&self, key: &str) -> Result<Option<SessionRecord>, StoreError>;

    /// Save `record` under `key`, expiring after `ttl`
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` when the store cannot be written.
    fn save(&mut self, key: &str, record: &SessionRecord, ttl: Duration) -> Result<(), StoreError>;
}
