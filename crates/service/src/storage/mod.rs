//! Storage abstractions for service layer
//!
//! The whole site lives in one [`document::ContentDocument`]; backends only
//! know how to load and save that document.

pub mod document;
pub mod backend;
pub mod json_file;
pub mod memory;
pub mod legacy;

pub use backend::DocumentBackend;
pub use document::{Collection, ContentDocument};
