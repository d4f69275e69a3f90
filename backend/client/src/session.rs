use crate::{
    favorites::{FavoritesSync, SyncError, Toggled},
    lookup::PokeApi,
    view::{Notice, Screen, View},
    viewer::Viewer,
};

/// Drives a [`View`] from user actions: searching, stepping through the
/// dex, the shiny toggle and favorites.
pub struct Session<V: View> {
    api: PokeApi,
    favorites: FavoritesSync,
    viewer: Viewer,
    view: V,
}

impl<V: View> Session<V> {
    pub fn new(api: PokeApi, favorites: FavoritesSync, view: V) -> Self {
        Self {
            api,
            favorites,
            viewer: Viewer::new(),
            view,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn favorites(&self) -> &FavoritesSync {
        &self.favorites
    }

    pub async fn start(&mut self) {
        self.view.render(Screen::Welcome);

        let failed = self.favorites.load().await.err();
        self.view.favorites(self.favorites.favorites());

        if let Some(e) = failed {
            self.view.notify(failure_notice(e, "Failed to load favorites"));
        }
    }

    pub async fn search(&mut self, query: &str) {
        self.lookup(query, false).await;
    }

    /// Same as [`Session::search`], with the card drawn shiny from the start.
    pub async fn search_shiny(&mut self, query: &str) {
        self.lookup(query, true).await;
    }

    async fn lookup(&mut self, query: &str, shiny: bool) {
        if query.trim().is_empty() {
            self.viewer.clear();
            self.view.render(Screen::Welcome);
            return;
        }

        self.view.render(Screen::Loading);

        match self.api.fetch(query).await {
            Ok(pokemon) => {
                self.viewer.show(pokemon);
                if shiny {
                    self.viewer.toggle_shiny();
                }
                self.render_card();
            }
            Err(e) => {
                self.viewer.clear();
                self.view.render(Screen::Failed(&e));
            }
        }
    }

    pub async fn next(&mut self) -> bool {
        match self.viewer.next_id() {
            Some(id) => {
                self.search(&id.to_string()).await;
                true
            }
            None => false,
        }
    }

    pub async fn prev(&mut self) -> bool {
        match self.viewer.prev_id() {
            Some(id) => {
                self.search(&id.to_string()).await;
                true
            }
            None => false,
        }
    }

    pub fn toggle_shiny(&mut self) {
        if self.viewer.toggle_shiny() {
            self.render_card();
        }
    }

    pub fn cry(&self) -> Option<&str> {
        self.viewer.cry_url()
    }

    pub async fn toggle_favorite(&mut self) {
        let Some(pokemon) = self.viewer.current() else {
            return;
        };
        let adding = !self.favorites.is_favorite(pokemon.id);

        let notice = match self.favorites.toggle(pokemon).await {
            Ok(Toggled::Added(entry)) => Notice::success(format!(
                "{} added to favorites!",
                entry.name.to_uppercase()
            )),
            Ok(Toggled::Removed(entry)) => Notice::success(format!(
                "{} removed from favorites",
                entry.name.to_uppercase()
            )),
            Err(e) if adding => failure_notice(e, "Failed to add to favorites"),
            Err(e) => failure_notice(e, "Failed to remove from favorites"),
        };

        self.render_card();
        self.view.favorites(self.favorites.favorites());
        self.view.notify(notice);
    }

    /// Removal from the favorites list, independent of what is on screen.
    pub async fn remove_favorite(&mut self, id: u32) {
        let notice = match self.favorites.remove(id).await {
            Ok(entry) => Notice::success(format!(
                "{} removed from favorites",
                entry.name.to_uppercase()
            )),
            Err(e) => failure_notice(e, "Failed to remove from favorites"),
        };

        if self.viewer.current().is_some_and(|pokemon| pokemon.id == id) {
            self.render_card();
        }
        self.view.favorites(self.favorites.favorites());
        self.view.notify(notice);
    }

    fn render_card(&mut self) {
        let favorite = self
            .viewer
            .current()
            .is_some_and(|pokemon| self.favorites.is_favorite(pokemon.id));

        if let Some(card) = self.viewer.card(favorite) {
            self.view.render(Screen::Card(&card));
        }
    }
}

fn failure_notice(e: SyncError, fallback: &str) -> Notice {
    match e {
        SyncError::Rejected { error, .. } => Notice::error(error),
        _ => Notice::error(fallback),
    }
}
