//! In-process store (process lifetime only)
//!
//! The guestbook and the like on-set each live under their own lock; every
//! operation holds one guard across its whole read-modify-write, so two
//! toggles for the same visitor cannot interleave. Everything is lost on
//! restart.

use async_trait::async_trait;
use chrono::Utc;
use folio_types::{validate_entry, validate_visitor_id, GuestbookEntry, LikeState};
use std::collections::HashSet;
use tokio::sync::RwLock;

use super::{Store, StoreBackend, StoreResult};

pub struct MemoryStore {
    entries: RwLock<Vec<GuestbookEntry>>,
    liked_visitors: RwLock<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            liked_visitors: RwLock::new(HashSet::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_entries(&self) -> StoreResult<Vec<GuestbookEntry>> {
        let entries = self.entries.read().await;
        let mut out = entries.clone();
        // Stable sort: entries with equal timestamps keep insertion order
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn append_entry(&self, name: &str, message: &str) -> StoreResult<GuestbookEntry> {
        let (name, message) = validate_entry(name, message)?;

        let entry = GuestbookEntry {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            message,
            created_at: Utc::now(),
        };

        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn remove_entry(&self, id: &str) -> StoreResult<bool> {
        let mut entries = self.entries.write().await;
        match entries.iter().position(|e| e.id == id) {
            Some(index) => {
                entries.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn like_state(&self, visitor_id: &str) -> StoreResult<LikeState> {
        let liked_visitors = self.liked_visitors.read().await;
        Ok(LikeState {
            count: liked_visitors.len() as u64,
            liked: !visitor_id.is_empty() && liked_visitors.contains(visitor_id),
        })
    }

    async fn toggle_like(&self, visitor_id: &str) -> StoreResult<LikeState> {
        let visitor_id = validate_visitor_id(visitor_id)?;

        // Check, flip, and count under one guard
        let mut liked_visitors = self.liked_visitors.write().await;
        let liked = if liked_visitors.remove(visitor_id) {
            false
        } else {
            liked_visitors.insert(visitor_id.to_string());
            true
        };

        Ok(LikeState {
            count: liked_visitors.len() as u64,
            liked,
        })
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}
