use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::errors::{PokeError, Result};
use crate::models::{ApiPokemonList, ListingSummary, PageRequest, PokemonRecord};
use crate::traits::PokemonSource;

/// HTTP client for the PokeAPI REST endpoints.
///
/// Holds nothing but the upstream base URL and a pooled `reqwest` client, so
/// cloning is cheap and requests never share state.
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokeError::UpstreamStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_by_name(&self, name: &str) -> Result<PokemonRecord> {
        let url = self.detail_url(name)?;
        let body = self.get(&url).await?;

        PokemonRecord::from_json(&body)
    }

    async fn fetch_listing(&self, page: PageRequest) -> Result<Vec<ListingSummary>> {
        let url = self.listing_url(page);
        let body = self.get(&url).await?;
        let listing = ApiPokemonList::from_json(&body)?;

        debug!(
            "Listing page {} returned {} of {:?} Pokémon",
            page.number(),
            listing.results.len(),
            listing.count
        );

        Ok(listing.results)
    }
}
