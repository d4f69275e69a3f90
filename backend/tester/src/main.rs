use std::env;

use anyhow::{Context, ensure};
use client::favorites::{FavoritesSync, SyncError};
use dex::{FAVORITES_PATH, Failure, FavoritesList, NewFavorite};
use reqwest::{Client, StatusCode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let http = Client::new();
    let url = format!("{backend}{FAVORITES_PATH}");

    println!("Testing {backend}");

    let before = list(&http, &url).await?;
    println!("Starting with {} favorites", before.count);
    ensure!(
        before.data.iter().all(|f| ![1, 4, 25].contains(&f.id)),
        "ids 1, 4 and 25 must not be favorites before running"
    );

    for (id, name) in [(1, "bulbasaur"), (4, "charmander")] {
        let res = http
            .post(&url)
            .json(&NewFavorite::new(id, name, None))
            .send()
            .await?;
        println!("Add {name}: {}", res.status());
        ensure!(res.status() == StatusCode::CREATED, "add {name} failed");
    }

    let after_adds = list(&http, &url).await?;
    let names: Vec<&str> = after_adds.data.iter().map(|f| f.name.as_str()).collect();
    println!("Favorites: {names:?}");
    ensure!(
        after_adds.count == before.count + 2,
        "count should grow by two"
    );
    ensure!(
        names.ends_with(&["bulbasaur", "charmander"]),
        "insertion order lost"
    );

    let res = http.delete(format!("{url}/1")).send().await?;
    println!("Remove bulbasaur: {}", res.status());
    ensure!(res.status() == StatusCode::OK, "remove bulbasaur failed");

    let after_remove = list(&http, &url).await?;
    println!("Favorites now: {}", after_remove.count);
    ensure!(
        after_remove.data.iter().all(|f| f.id != 1),
        "bulbasaur still listed"
    );

    for attempt in 1..=2 {
        let res = http
            .post(&url)
            .json(&NewFavorite::new(25, "pikachu", None))
            .send()
            .await?;
        let status = res.status();

        if attempt == 1 {
            println!("Add pikachu: {status}");
            ensure!(status == StatusCode::CREATED, "first pikachu add failed");
        } else {
            let failure: Failure = res.json().await.context("conflict body")?;
            println!("Add pikachu again: {status} {:?}", failure.error);
            ensure!(status == StatusCode::CONFLICT, "duplicate add not rejected");
            ensure!(failure.error == "Already in favorites", "wrong conflict error");
        }
    }

    let mut sync = FavoritesSync::new(http.clone(), &backend);
    sync.load().await?;
    ensure!(sync.is_favorite(25), "pikachu missing from mirror");

    for id in [4, 25] {
        sync.remove(id).await?;
    }
    match sync.remove(25).await {
        Err(SyncError::Rejected { status, error }) => {
            println!("Remove pikachu again: {status} {error:?}")
        }
        other => anyhow::bail!("expected a 404 rejection, got {other:?}"),
    }

    println!("Cleaned up, {} favorites left", list(&http, &url).await?.count);

    Ok(())
}

async fn list(http: &Client, url: &str) -> anyhow::Result<FavoritesList> {
    Ok(http.get(url).send().await?.json().await?)
}
