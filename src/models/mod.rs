//! Data models for the event design store.
//!
//! Field names serialize in camelCase so the wire and persisted formats match
//! what the web client already reads.

mod asset;
mod comment;
mod datastore;
mod member;
mod project;

pub use asset::*;
pub use comment::*;
pub use datastore::*;
pub use member::*;
pub use project::*;
