//! Like counter types

use serde::{Deserialize, Serialize};

/// Aggregate like count plus whether the requesting visitor is in the on-set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeState {
    pub count: u64,
    pub liked: bool,
}

impl LikeState {
    /// State reported when no backend can be consulted
    pub fn unavailable() -> Self {
        Self {
            count: 0,
            liked: false,
        }
    }
}
