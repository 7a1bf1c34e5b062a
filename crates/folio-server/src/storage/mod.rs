//! Storage layer
//!
//! Two interchangeable backends behind one trait: an in-process store that
//! lives for the process lifetime, and an embedded SQLite database that
//! survives restarts. The backend is picked once at startup; handlers only
//! ever see `Arc<dyn Store>`.

pub mod db;
pub mod memory;

use async_trait::async_trait;
use folio_types::{GuestbookEntry, LikeState, ValidationError};
use thiserror::Error;

pub use db::Database;
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("store is unavailable")]
    Unavailable,

    #[error("store query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Unavailable
            }
            other => StoreError::Query(other.to_string()),
        }
    }
}

/// Which backend is serving requests, reported by the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Database,
}

impl std::fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Memory => write!(f, "memory"),
            StoreBackend::Database => write!(f, "database"),
        }
    }
}

/// The entire query contract the handlers need from a backend.
///
/// Absence of a guestbook entry on delete is an expected outcome and comes
/// back as `false`, not as an error.
#[async_trait]
pub trait Store: Send + Sync {
    /// All guestbook entries, newest first. Ties on the timestamp keep
    /// insertion order.
    async fn list_entries(&self) -> StoreResult<Vec<GuestbookEntry>>;

    /// Validate, then insert a new entry with a fresh id and a
    /// server-assigned timestamp. Rejected input must not mutate state.
    async fn append_entry(&self, name: &str, message: &str) -> StoreResult<GuestbookEntry>;

    /// Delete the entry with the given id, reporting whether one existed.
    async fn remove_entry(&self, id: &str) -> StoreResult<bool>;

    /// Aggregate count plus this visitor's membership. An empty visitor id
    /// always reads as not liked; the count stays the true aggregate.
    async fn like_state(&self, visitor_id: &str) -> StoreResult<LikeState>;

    /// Flip this visitor's membership in the on-set. Toggling twice returns
    /// to the original state.
    async fn toggle_like(&self, visitor_id: &str) -> StoreResult<LikeState>;

    fn backend(&self) -> StoreBackend;
}
