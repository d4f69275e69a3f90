use anyhow::bail;
use clap::{Parser, Subcommand};
use client::{
    favorites::{FavoritesSync, Toggled},
    lookup::PokeApi,
    models::ENDPOINT,
    session::Session,
    view::{Notice, NoticeKind, Screen, View},
    viewer::Card,
};
use dex::FavoriteEntry;
use tokio::io::{AsyncBufReadExt, BufReader, stdin};
use tracing_subscriber::{EnvFilter, fmt};

const BAR_WIDTH: usize = 30;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Favorites server base URL.
    #[arg(long, env = "POKEDEX_BACKEND", default_value = "http://localhost:3000")]
    backend: String,

    /// Pokemon data API base URL.
    #[arg(long, env = "POKEDEX_POKEAPI", default_value = ENDPOINT)]
    pokeapi: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a Pokemon by name or number.
    Show {
        query: String,

        #[arg(long)]
        shiny: bool,
    },
    /// List favorites stored on the server.
    Favorites,
    /// Add a Pokemon to favorites, or remove it if it already is one.
    Toggle { query: String },
    /// Remove a favorite by id.
    Remove { id: u32 },
    /// Interactive session: n/p navigate, s shiny, f favorite, r <id> remove, c cry, q quit.
    Browse,
}

struct Terminal;

impl View for Terminal {
    fn render(&mut self, screen: Screen<'_>) {
        match screen {
            Screen::Welcome => println!("Search for a Pokemon by name or number."),
            Screen::Loading => println!("Loading..."),
            Screen::Failed(e) => println!("Lookup failed: {e}"),
            Screen::Card(card) => print_card(card),
        }
    }

    fn favorites(&mut self, favorites: &[FavoriteEntry]) {
        if favorites.is_empty() {
            println!("No favorites yet!");
            return;
        }

        println!("Favorites ({}):", favorites.len());
        for favorite in favorites {
            println!(
                "  {:>5}  {}",
                format!("#{:03}", favorite.id),
                favorite.name.to_uppercase()
            );
        }
    }

    fn notify(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Success => println!("* {}", notice.message),
            NoticeKind::Error => eprintln!("! {}", notice.message),
        }
    }
}

fn print_card(card: &Card) {
    let heart = if card.favorite { "<3" } else { "  " };
    let shiny = if card.shiny { " (shiny)" } else { "" };

    println!();
    println!("{} {}{} {heart}", card.number, card.name, shiny);
    println!("  {}", card.types.join(" / "));
    if let Some(sprite) = &card.sprite {
        println!("  {sprite}");
    }
    for stat in &card.stats {
        let filled = (stat.percentage / 100.0 * BAR_WIDTH as f64).round() as usize;
        println!(
            "  {:<4}[{:<width$}] {:>3}",
            stat.label,
            "=".repeat(filled),
            stat.value,
            width = BAR_WIDTH
        );
    }
    println!("  Height {}  Weight {}", card.height, card.weight);
    println!();
}

#[derive(Debug, PartialEq, Eq)]
enum Action<'a> {
    Quit,
    Next,
    Prev,
    Shiny,
    Favorite,
    Remove(Option<u32>),
    Cry,
    Search(&'a str),
}

impl<'a> Action<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();

        match line.split_once(char::is_whitespace) {
            Some(("r" | "rm", id)) => {
                Action::Remove(id.trim().parse().ok().filter(|&id| id > 0))
            }
            _ => match line {
                "q" | "quit" => Action::Quit,
                "n" | "next" => Action::Next,
                "p" | "prev" => Action::Prev,
                "s" | "shiny" => Action::Shiny,
                "f" | "fav" => Action::Favorite,
                "r" | "rm" => Action::Remove(None),
                "c" | "cry" => Action::Cry,
                query => Action::Search(query),
            },
        }
    }
}

async fn browse(mut session: Session<Terminal>) -> anyhow::Result<()> {
    session.start().await;

    let mut lines = BufReader::new(stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Action::parse(&line) {
            Action::Quit => break,
            Action::Next => {
                if !session.next().await {
                    println!("No next Pokemon.");
                }
            }
            Action::Prev => {
                if !session.prev().await {
                    println!("No previous Pokemon.");
                }
            }
            Action::Shiny => session.toggle_shiny(),
            Action::Favorite => session.toggle_favorite().await,
            Action::Remove(Some(id)) => session.remove_favorite(id).await,
            Action::Remove(None) => println!("Usage: r <id>"),
            Action::Cry => match session.cry() {
                Some(url) => println!("Cry: {url}"),
                None => println!("No cry available."),
            },
            Action::Search(query) => session.search(query).await,
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let args = Args::parse();

    let http = reqwest::Client::new();
    let api = PokeApi::new(http.clone(), &args.pokeapi);
    let mut favorites = FavoritesSync::new(http, &args.backend);

    match args.command {
        Command::Show { query, shiny } => {
            let mut session = Session::new(api, favorites, Terminal);
            session.start().await;
            if shiny {
                session.search_shiny(&query).await;
            } else {
                session.search(&query).await;
            }
        }
        Command::Favorites => {
            favorites.load().await?;
            Terminal.favorites(favorites.favorites());
        }
        Command::Toggle { query } => {
            let pokemon = api.fetch(&query).await?;
            favorites.load().await?;

            match favorites.toggle(&pokemon).await? {
                Toggled::Added(entry) => {
                    println!("{} added to favorites!", entry.name.to_uppercase())
                }
                Toggled::Removed(entry) => {
                    println!("{} removed from favorites", entry.name.to_uppercase())
                }
            }
        }
        Command::Remove { id } => {
            if id == 0 {
                bail!("id must be a positive integer");
            }

            let entry = favorites.remove(id).await?;
            println!("{} removed from favorites", entry.name.to_uppercase());
        }
        Command::Browse => browse(Session::new(api, favorites, Terminal)).await?,
    }

    Ok(())
}
