//! Traits and interfaces for the Pokémon data source

use async_trait::async_trait;

use crate::errors::{PokeError, Result};
use crate::models::{ListingSummary, PageRequest, PokemonRecord};

/// Trait for anything that can serve Pokémon records to the page layer
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Base URL of the upstream API, without a trailing slash
    fn base_url(&self) -> &str;

    /// Fetch a single Pokémon by name or numeric id
    ///
    /// # Returns
    /// * `Result<PokemonRecord>` - The decoded record or the first failure
    async fn fetch_by_name(&self, name: &str) -> Result<PokemonRecord>;

    /// Fetch the name summaries of one listing page
    async fn fetch_listing(&self, page: PageRequest) -> Result<Vec<ListingSummary>>;

    /// Fetch every Pokémon of a listing page with full details
    ///
    /// Details are fetched one at a time in listing order. The first failure
    /// aborts the page; there is no partial result.
    async fn fetch_page(&self, page: PageRequest) -> Result<Vec<PokemonRecord>> {
        let summaries = self.fetch_listing(page).await?;

        let mut pokemon = Vec::with_capacity(summaries.len());
        for summary in &summaries {
            pokemon.push(self.fetch_by_name(&summary.name).await?);
        }

        Ok(pokemon)
    }

    /// Build the detail URL for a name
    ///
    /// # Arguments
    /// * `name` - Pokémon name, rejected only when empty
    fn detail_url(&self, name: &str) -> Result<String> {
        if name.is_empty() {
            return Err(PokeError::Validation(
                "Pokémon name must not be empty".to_string(),
            ));
        }

        Ok(format!("{}/pokemon/{}", self.base_url(), urlencoding::encode(name)))
    }

    /// Build the listing URL for a page
    fn listing_url(&self, page: PageRequest) -> String {
        format!(
            "{}/pokemon?offset={}&limit={}",
            self.base_url(),
            page.offset(),
            page.limit()
        )
    }
}
