use std::sync::Arc;

use service::{
    auth::AuthService,
    contact::ContactService,
    content::{CollectionService, HeroService},
    storage::Collection,
    ContentStore,
};

/// Handles shared by every handler; all of them point at the same store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub hero: HeroService,
    pub auth: AuthService<ContentStore>,
    pub contact: ContactService,
}

impl AppState {
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self {
            hero: HeroService::new(store.clone()),
            auth: AuthService::new(store.clone()),
            contact: ContactService::new(store.clone()),
            store,
        }
    }

    pub fn collection<T: Collection>(&self) -> CollectionService<T> {
        CollectionService::new(self.store.clone())
    }
}
