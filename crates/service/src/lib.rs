//! Service layer for the site content.
//! - Owns the in-memory content document and persists it through a pluggable backend.
//! - Generic CRUD over the list collections, plus the hero and admin singletons.
//! - Reuses validation and entity definitions in `models` crate.

pub mod errors;
pub mod storage;
pub mod store;
pub mod content;
pub mod auth;
pub mod contact;
pub mod runtime;
#[cfg(test)]
pub mod test_support;

pub use store::ContentStore;
