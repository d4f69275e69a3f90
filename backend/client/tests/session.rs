use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use client::{
    favorites::{FavoritesSync, SyncError, Toggled},
    lookup::{LookupError, PokeApi},
    session::Session,
    view::{Notice, NoticeKind, Screen, View},
    viewer::Card,
};
use dex::FavoriteEntry;
use serde_json::{Value, json};
use server::{build_router, config::Config, state::State};
use tokio::net::TcpListener;

fn pokemon_json(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "height": 4,
        "weight": 60,
        "sprites": {
            "front_default": format!("https://sprites/{id}.png"),
            "front_shiny": format!("https://sprites/shiny/{id}.png"),
            "other": {
                "official-artwork": {
                    "front_default": format!("https://artwork/{id}.png"),
                    "front_shiny": format!("https://artwork/shiny/{id}.png")
                }
            }
        },
        "types": [{"slot": 1, "type": {"name": "electric"}}],
        "stats": [{"base_stat": 35, "stat": {"name": "hp"}}],
        "cries": {"latest": format!("https://cries/{id}.ogg"), "legacy": null}
    })
}

async fn pokemon(Path(query): Path<String>) -> Response {
    match query.as_str() {
        "broken" => (StatusCode::OK, r#"{"id": "#).into_response(),
        "teapot" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
        "pikachu" | "25" => Json(pokemon_json(25, "pikachu")).into_response(),
        other => match other.parse::<u32>() {
            Ok(id) if (1..=1010).contains(&id) => {
                Json(pokemon_json(id, &format!("pokemon-{id}"))).into_response()
            }
            _ => StatusCode::NOT_FOUND.into_response(),
        },
    }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    addr
}

async fn spawn_backends() -> (String, String) {
    let favorites = serve(build_router(State::new(Config::default()))).await;
    let pokeapi = serve(Router::new().route("/api/v2/pokemon/{query}", get(pokemon))).await;

    (
        format!("http://{favorites}"),
        format!("http://{pokeapi}/api/v2/pokemon"),
    )
}

async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    format!("http://{addr}")
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Welcome,
    Loading,
    Failed(String),
    Card(Card),
    Favorites(Vec<u32>),
    Notice(Notice),
}

#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl Recorder {
    fn last_card(&self) -> Option<&Card> {
        self.events.iter().rev().find_map(|event| match event {
            Event::Card(card) => Some(card),
            _ => None,
        })
    }

    fn last_notice(&self) -> Option<&Notice> {
        self.events.iter().rev().find_map(|event| match event {
            Event::Notice(notice) => Some(notice),
            _ => None,
        })
    }
}

impl View for Recorder {
    fn render(&mut self, screen: Screen<'_>) {
        self.events.push(match screen {
            Screen::Welcome => Event::Welcome,
            Screen::Loading => Event::Loading,
            Screen::Failed(e) => Event::Failed(e.to_string()),
            Screen::Card(card) => Event::Card(card.clone()),
        });
    }

    fn favorites(&mut self, favorites: &[FavoriteEntry]) {
        self.events
            .push(Event::Favorites(favorites.iter().map(|f| f.id).collect()));
    }

    fn notify(&mut self, notice: Notice) {
        self.events.push(Event::Notice(notice));
    }
}

fn ids(sync: &FavoritesSync) -> Vec<u32> {
    sync.favorites().iter().map(|f| f.id).collect()
}

#[tokio::test]
async fn sync_mirrors_server_responses() {
    let (backend, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let api = PokeApi::new(http.clone(), pokeapi);
    let mut sync = FavoritesSync::new(http.clone(), backend.clone());

    assert_eq!(sync.load().await.expect("load"), 0);

    let pikachu = api.fetch("pikachu").await.expect("fetch pikachu");
    let entry = sync.add(&pikachu).await.expect("add pikachu");
    assert_eq!(entry.id, 25);
    assert_eq!(entry.sprite.as_deref(), Some("https://sprites/25.png"));
    assert!(sync.is_favorite(25));

    let mut other = FavoritesSync::new(http, backend);
    assert_eq!(other.load().await.expect("load"), 1);
    assert_eq!(other.favorites()[0], entry);

    let removed = sync.remove(25).await.expect("remove pikachu");
    assert_eq!(removed.name, "pikachu");
    assert!(!sync.is_favorite(25));
}

#[tokio::test]
async fn toggle_converges() {
    let (backend, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let api = PokeApi::new(http.clone(), pokeapi);
    let mut sync = FavoritesSync::new(http, backend);
    let bulbasaur = api.fetch("1").await.expect("fetch 1");

    let first = sync.toggle(&bulbasaur).await.expect("first toggle");
    assert!(matches!(first, Toggled::Added(ref entry) if entry.id == 1));
    assert_eq!(ids(&sync), [1]);

    let second = sync.toggle(&bulbasaur).await.expect("second toggle");
    assert!(matches!(second, Toggled::Removed(ref entry) if entry.id == 1));
    assert!(sync.favorites().is_empty());
}

#[tokio::test]
async fn stale_mirror_rejections_leave_it_unchanged() {
    let (backend, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let api = PokeApi::new(http.clone(), pokeapi);
    let pikachu = api.fetch("pikachu").await.expect("fetch pikachu");

    let mut first = FavoritesSync::new(http.clone(), backend.clone());
    first.add(&pikachu).await.expect("add pikachu");

    let mut stale = FavoritesSync::new(http, backend);
    let err = stale.add(&pikachu).await.unwrap_err();
    match err {
        SyncError::Rejected { status, error } => {
            assert_eq!(status, reqwest::StatusCode::CONFLICT);
            assert_eq!(error, "Already in favorites");
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(stale.favorites().is_empty());

    let err = first.remove(4).await.unwrap_err();
    assert!(matches!(
        err,
        SyncError::Rejected { status, .. } if status == reqwest::StatusCode::NOT_FOUND
    ));
    assert_eq!(ids(&first), [25]);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let (_, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let api = PokeApi::new(http.clone(), pokeapi);
    let pikachu = api.fetch("pikachu").await.expect("fetch pikachu");
    let mut sync = FavoritesSync::new(http, dead_url().await);

    assert!(matches!(sync.load().await, Err(SyncError::Network(_))));
    assert!(matches!(sync.add(&pikachu).await, Err(SyncError::Network(_))));
    assert!(sync.favorites().is_empty());
}

#[tokio::test]
async fn lookup_failures_are_distinguished() {
    let (_, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let api = PokeApi::new(http.clone(), pokeapi);

    assert!(matches!(api.fetch("   ").await, Err(LookupError::EmptyQuery)));
    assert!(matches!(
        api.fetch("Missingno").await,
        Err(LookupError::NotFound(ref name)) if name == "missingno"
    ));
    assert!(matches!(
        api.fetch("broken").await,
        Err(LookupError::Malformed(_))
    ));
    assert!(matches!(
        api.fetch("teapot").await,
        Err(LookupError::Unavailable(status)) if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
    ));

    let offline = PokeApi::new(http, dead_url().await);
    assert!(matches!(
        offline.fetch("pikachu").await,
        Err(LookupError::Network(_))
    ));

    let pikachu = api.fetch("  PIKACHU ").await.expect("normalized query");
    assert_eq!(pikachu.id, 25);
}

#[tokio::test]
async fn session_flow() {
    let (backend, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let mut session = Session::new(
        PokeApi::new(http.clone(), pokeapi),
        FavoritesSync::new(http, backend),
        Recorder::default(),
    );

    session.start().await;
    assert_eq!(
        session.view().events,
        [Event::Welcome, Event::Favorites(vec![])]
    );

    session.search("Pikachu").await;
    let card = session.view().last_card().expect("pikachu card");
    assert_eq!(card.number, "#025");
    assert_eq!(card.name, "PIKACHU");
    assert_eq!(card.sprite.as_deref(), Some("https://artwork/25.png"));
    assert!(!card.favorite);

    session.toggle_shiny();
    let card = session.view().last_card().expect("shiny card");
    assert!(card.shiny);
    assert_eq!(card.sprite.as_deref(), Some("https://artwork/shiny/25.png"));

    session.toggle_favorite().await;
    assert!(session.view().last_card().expect("card").favorite);
    assert_eq!(
        session.view().last_notice(),
        Some(&Notice::success("PIKACHU added to favorites!"))
    );
    assert!(session.view().events.contains(&Event::Favorites(vec![25])));

    assert!(session.next().await);
    let card = session.view().last_card().expect("next card");
    assert_eq!(card.id, 26);
    assert!(!card.shiny);
    assert!(!card.favorite);
    assert_eq!(session.cry(), Some("https://cries/26.ogg"));

    assert!(session.prev().await);
    assert!(session.view().last_card().expect("prev card").favorite);

    session.toggle_favorite().await;
    assert_eq!(
        session.view().last_notice(),
        Some(&Notice::success("PIKACHU removed from favorites"))
    );
    assert!(session.favorites().favorites().is_empty());
}

#[tokio::test]
async fn session_error_states() {
    let (backend, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let mut session = Session::new(
        PokeApi::new(http.clone(), pokeapi),
        FavoritesSync::new(http, backend),
        Recorder::default(),
    );

    session.search("missingno").await;
    assert!(matches!(
        session.view().events.as_slice(),
        [Event::Loading, Event::Failed(_)]
    ));
    assert!(session.viewer().current().is_none());
    assert!(!session.next().await);

    // nothing on screen, nothing to favorite
    session.toggle_favorite().await;
    assert!(session.view().last_notice().is_none());

    session.search("").await;
    assert_eq!(session.view().events.last(), Some(&Event::Welcome));

    session.search("1").await;
    assert!(!session.prev().await);
    assert!(!session.view().last_card().expect("card").can_prev);
}

#[tokio::test]
async fn session_reports_favorite_failures() {
    let (_, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let mut session = Session::new(
        PokeApi::new(http.clone(), pokeapi),
        FavoritesSync::new(http, dead_url().await),
        Recorder::default(),
    );

    session.start().await;
    session.search("pikachu").await;
    session.toggle_favorite().await;

    let notice = session.view().last_notice().expect("failure notice");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Failed to add to favorites");
    assert!(!session.view().last_card().expect("card").favorite);
}

#[tokio::test]
async fn session_removes_from_list() {
    let (backend, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let mut session = Session::new(
        PokeApi::new(http.clone(), pokeapi),
        FavoritesSync::new(http, backend),
        Recorder::default(),
    );

    session.search("4").await;
    session.toggle_favorite().await;
    session.search("7").await;
    session.toggle_favorite().await;
    assert_eq!(ids(session.favorites()), [4, 7]);

    session.remove_favorite(4).await;
    assert_eq!(ids(session.favorites()), [7]);
    assert_eq!(
        session.view().last_notice(),
        Some(&Notice::success("POKEMON-4 removed from favorites"))
    );

    session.remove_favorite(4).await;
    assert_eq!(
        session.view().last_notice(),
        Some(&Notice::error("Not found in favorites"))
    );
    assert_eq!(ids(session.favorites()), [7]);
}

#[tokio::test]
async fn session_reports_failed_startup_load() {
    let (_, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let mut session = Session::new(
        PokeApi::new(http.clone(), pokeapi),
        FavoritesSync::new(http, dead_url().await),
        Recorder::default(),
    );

    session.start().await;

    assert_eq!(
        session.view().events,
        [
            Event::Welcome,
            Event::Favorites(vec![]),
            Event::Notice(Notice::error("Failed to load favorites")),
        ]
    );
}

#[tokio::test]
async fn shiny_search_draws_one_card() {
    let (backend, pokeapi) = spawn_backends().await;
    let http = reqwest::Client::new();
    let mut session = Session::new(
        PokeApi::new(http.clone(), pokeapi),
        FavoritesSync::new(http, backend),
        Recorder::default(),
    );

    session.search_shiny("pikachu").await;

    let [Event::Loading, Event::Card(card)] = session.view().events.as_slice() else {
        panic!("unexpected events {:?}", session.view().events);
    };
    assert!(card.shiny);
    assert_eq!(card.sprite.as_deref(), Some("https://artwork/shiny/25.png"));

    session.next().await;
    assert!(!session.view().last_card().expect("next card").shiny);
}
