//! Request extractors

pub mod json;
pub mod visitor;

pub use json::ApiJson;
pub use visitor::VisitorId;
