//! Content entities for the marketing site.
//!
//! Every collection item is a plain body type wrapped in [`record::Record`],
//! which carries the server-assigned id and timestamps.

pub mod errors;
pub mod record;
pub mod numeric;
pub mod service;
pub mod metric;
pub mod process;
pub mod hero;
pub mod post;
pub mod contact;
pub mod admin;

pub use errors::ModelError;
pub use record::{Record, Validate};
