use std::sync::Arc;

use parking_lot::Mutex;

use super::{config::Config, store::FavoritesStore};

pub struct State {
    pub config: Config,
    pub favorites: Mutex<FavoritesStore>,
}

impl State {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self {
            config,
            favorites: Mutex::new(FavoritesStore::new()),
        })
    }
}
