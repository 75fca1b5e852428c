//! Data models for Pokémon records and the upstream PokeAPI payloads

use serde::{Deserialize, Deserializer};

use crate::errors::{PokeError, Result};

/// Number of Pokémon shown per listing page
pub const PAGE_SIZE: u32 = 20;

/// A single Pokémon as rendered by the site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRecord {
    pub name: String,
    pub id: u32,
    pub abilities: Vec<String>,
    pub types: Vec<String>,
    pub sprites: Sprites,
}

/// Image URLs for a Pokémon. Upstream `null` and `""` both decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub dream_world: DreamWorldSprites,
    pub home: HomeSprites,
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DreamWorldSprites {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub front_default: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub front_female: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HomeSprites {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub front_default: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub front_female: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub front_shiny: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub front_shiny_female: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArtworkSprites {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub front_default: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub front_shiny: Option<String>,
}

impl Sprites {
    /// Best available picture: official artwork, then home render, then the
    /// classic front sprite.
    pub fn preferred_image(&self) -> Option<&str> {
        self.official_artwork
            .front_default
            .as_deref()
            .or(self.home.front_default.as_deref())
            .or(self.front_default.as_deref())
    }

    /// Best available shiny picture, if any.
    pub fn preferred_shiny(&self) -> Option<&str> {
        self.official_artwork
            .front_shiny
            .as_deref()
            .or(self.home.front_shiny.as_deref())
    }
}

impl PokemonRecord {
    /// Decode an upstream `/pokemon/{name}` body.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let api: ApiPokemon = serde_json::from_slice(body)?;
        Ok(api.into())
    }
}

/// One entry of the upstream listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingSummary {
    pub name: String,
}

/// Upstream `/pokemon?offset=&limit=` body
#[derive(Debug, Deserialize)]
pub struct ApiPokemonList {
    #[serde(default)]
    pub count: Option<u32>,
    pub results: Vec<ListingSummary>,
}

impl ApiPokemonList {
    pub fn from_json(body: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// A 1-based listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
}

impl PageRequest {
    pub const FIRST: Self = Self { page: 1 };

    /// Returns `None` for page 0.
    pub fn new(page: u32) -> Option<Self> {
        (page >= 1).then_some(Self { page })
    }

    /// Parse the raw `page` query parameter of the load-more endpoint.
    ///
    /// Missing, non-integer, zero and negative values are all rejected.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        raw.and_then(|value| value.parse::<i64>().ok())
            .and_then(|page| u32::try_from(page).ok())
            .and_then(Self::new)
            .ok_or_else(|| PokeError::Validation("Invalid page number".to_string()))
    }

    pub fn number(self) -> u32 {
        self.page
    }

    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(PAGE_SIZE)
    }

    pub fn limit(self) -> u32 {
        PAGE_SIZE
    }

    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiPokemon {
    name: String,
    id: u32,
    #[serde(default)]
    abilities: Vec<ApiAbilitySlot>,
    #[serde(default)]
    types: Vec<ApiTypeSlot>,
    #[serde(default)]
    sprites: ApiSprites,
}

#[derive(Debug, Deserialize)]
struct ApiAbilitySlot {
    ability: ApiNamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiTypeSlot {
    #[serde(rename = "type")]
    kind: ApiNamedResource,
}

#[derive(Debug, Deserialize)]
struct ApiNamedResource {
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSprites {
    #[serde(default, deserialize_with = "empty_as_none")]
    front_default: Option<String>,
    #[serde(default)]
    other: ApiOtherSprites,
}

#[derive(Debug, Default, Deserialize)]
struct ApiOtherSprites {
    #[serde(default, deserialize_with = "null_as_default")]
    dream_world: DreamWorldSprites,
    #[serde(default, deserialize_with = "null_as_default")]
    home: HomeSprites,
    #[serde(rename = "official-artwork", default, deserialize_with = "null_as_default")]
    official_artwork: ArtworkSprites,
}

impl From<ApiPokemon> for PokemonRecord {
    fn from(api: ApiPokemon) -> Self {
        Self {
            name: api.name,
            id: api.id,
            abilities: api.abilities.into_iter().map(|a| a.ability.name).collect(),
            types: api.types.into_iter().map(|t| t.kind.name).collect(),
            sprites: Sprites {
                front_default: api.sprites.front_default,
                dream_world: api.sprites.other.dream_world,
                home: api.sprites.other.home,
                official_artwork: api.sprites.other.official_artwork,
            },
        }
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
