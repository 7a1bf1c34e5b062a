//! Guestbook entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single guestbook message
///
/// Entries are immutable once created; the only way to get rid of one is an
/// explicit delete by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestbookEntry {
    pub id: String,
    pub name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl GuestbookEntry {
    /// Human-readable timestamp for display surfaces. Not part of the wire
    /// format, which carries `createdAt` as RFC 3339.
    pub fn display_created_at(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }
}
