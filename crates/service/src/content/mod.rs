//! Content operations exposed to the HTTP layer.

pub mod collection;
pub mod hero;

pub use collection::CollectionService;
pub use hero::HeroService;
