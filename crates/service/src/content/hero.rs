use std::sync::Arc;

use tracing::info;

use models::hero::Hero;

use crate::errors::ServiceError;
use crate::store::ContentStore;

/// The hero banner singleton.
#[derive(Clone)]
pub struct HeroService {
    store: Arc<ContentStore>,
}

impl HeroService {
    pub fn new(store: Arc<ContentStore>) -> Self { Self { store } }

    pub async fn get(&self) -> Option<Hero> {
        self.store.read(|doc| doc.hero.clone()).await
    }

    /// Replace the whole hero object. An all-empty hero (e.g. a `{}` body)
    /// clears it, so readers see "never set" again.
    pub async fn replace(&self, hero: Hero) -> Result<Option<Hero>, ServiceError> {
        let stored = (hero != Hero::default()).then_some(hero);
        let next = stored.clone();
        self.store
            .update(move |doc| {
                doc.hero = next;
                Ok(())
            })
            .await?;
        info!(cleared = stored.is_none(), highlights = stored.as_ref().map_or(0, |h| h.highlights.len()), "hero replaced");
        Ok(stored)
    }
}
