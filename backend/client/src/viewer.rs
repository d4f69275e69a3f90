use crate::{
    models::{MAX_POKEMON, Pokemon},
    utils::{dex_number, tenths},
};

/// Base stat that fills a whole bar.
pub const STAT_SCALE: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLevel {
    Low,
    Medium,
    High,
}

impl StatLevel {
    pub fn of(value: u32) -> Self {
        match value {
            80.. => StatLevel::High,
            50..80 => StatLevel::Medium,
            _ => StatLevel::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatRow {
    pub label: String,
    pub value: u32,
    pub percentage: f64,
    pub level: StatLevel,
}

/// Everything a view needs to draw the current Pokemon.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u32,
    pub number: String,
    pub name: String,
    pub sprite: Option<String>,
    pub types: Vec<String>,
    pub stats: Vec<StatRow>,
    pub height: String,
    pub weight: String,
    pub shiny: bool,
    pub favorite: bool,
    pub can_prev: bool,
    pub can_next: bool,
}

#[derive(Debug, Default)]
pub struct Viewer {
    current: Option<Pokemon>,
    shiny: bool,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Pokemon> {
        self.current.as_ref()
    }

    pub fn is_shiny(&self) -> bool {
        self.shiny
    }

    pub fn show(&mut self, pokemon: Pokemon) {
        self.current = Some(pokemon);
        self.shiny = false;
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.shiny = false;
    }

    /// Returns false when there is nothing to make shiny.
    pub fn toggle_shiny(&mut self) -> bool {
        if self.current.is_none() {
            return false;
        }

        self.shiny = !self.shiny;
        true
    }

    pub fn sprite_url(&self) -> Option<&str> {
        let sprites = &self.current.as_ref()?.sprites;
        let artwork = &sprites.other.official_artwork;

        if self.shiny {
            artwork
                .front_shiny
                .as_deref()
                .or(sprites.front_shiny.as_deref())
                .or(artwork.front_default.as_deref())
        } else {
            artwork
                .front_default
                .as_deref()
                .or(sprites.front_default.as_deref())
        }
    }

    pub fn cry_url(&self) -> Option<&str> {
        let cries = self.current.as_ref()?.cries.as_ref()?;

        cries.latest.as_deref().or(cries.legacy.as_deref())
    }

    pub fn prev_id(&self) -> Option<u32> {
        self.current
            .as_ref()
            .map(|pokemon| pokemon.id)
            .filter(|&id| id > 1)
            .map(|id| id - 1)
    }

    pub fn next_id(&self) -> Option<u32> {
        self.current
            .as_ref()
            .map(|pokemon| pokemon.id)
            .filter(|&id| id < MAX_POKEMON)
            .map(|id| id + 1)
    }

    pub fn card(&self, favorite: bool) -> Option<Card> {
        let pokemon = self.current.as_ref()?;

        Some(Card {
            id: pokemon.id,
            number: dex_number(pokemon.id),
            name: pokemon.name.to_uppercase(),
            sprite: self.sprite_url().map(str::to_string),
            types: pokemon.types.iter().map(|t| t.kind.name.clone()).collect(),
            stats: pokemon
                .stats
                .iter()
                .map(|slot| stat_row(&slot.stat.name, slot.base_stat))
                .collect(),
            height: tenths(pokemon.height, "m"),
            weight: tenths(pokemon.weight, "kg"),
            shiny: self.shiny,
            favorite,
            can_prev: self.prev_id().is_some(),
            can_next: self.next_id().is_some(),
        })
    }
}

pub fn stat_label(name: &str) -> &str {
    match name {
        "hp" => "HP",
        "attack" => "ATK",
        "defense" => "DEF",
        "special-attack" => "SPA",
        "special-defense" => "SPD",
        "speed" => "SPE",
        other => other,
    }
}

fn stat_row(name: &str, value: u32) -> StatRow {
    StatRow {
        label: stat_label(name).to_string(),
        value,
        percentage: (f64::from(value) * 100.0 / STAT_SCALE).min(100.0),
        level: StatLevel::of(value),
    }
}
