//! Folio Types - Pure type definitions for the portfolio API
//!
//! This crate contains only data types and pure validation helpers with no
//! async runtime dependencies, so every store backend shares the same rules.

pub mod entry;
pub mod like;
pub mod validate;

pub use entry::*;
pub use like::*;
pub use validate::*;
