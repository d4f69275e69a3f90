use serde::Deserialize;

pub const ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";

/// Highest national dex number the viewer navigates to.
pub const MAX_POKEMON: u32 = 1010;

#[derive(Deserialize, Debug, Clone)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Decimetres.
    #[serde(default)]
    pub height: u32,
    /// Hectograms.
    #[serde(default)]
    pub weight: u32,
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub cries: Option<Cries>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Cries {
    #[serde(default)]
    pub latest: Option<String>,
    #[serde(default)]
    pub legacy: Option<String>,
}
