use std::sync::Arc;

use tracing::info;

use crate::errors::Result;
use crate::models::{PageRequest, PokemonRecord};
use crate::traits::PokemonSource;

pub const HOME_TITLE: &str = "Home Page";
pub const DETAIL_TITLE: &str = "Pokémon Details";

/// One page worth of listing cards plus the page the "load more" button asks for
#[derive(Debug, Clone)]
pub struct ListFragment {
    pub pokemon: Vec<PokemonRecord>,
    pub next_page: PageRequest,
}

/// The full landing page
#[derive(Debug, Clone)]
pub struct HomePage {
    pub title: &'static str,
    pub listing: ListFragment,
}

/// The full single-Pokémon page
#[derive(Debug, Clone)]
pub struct DetailPage {
    pub title: &'static str,
    pub pokemon: PokemonRecord,
}

/// Turns inbound page requests into upstream calls and view data
#[derive(Clone)]
pub struct PageAssembler {
    source: Arc<dyn PokemonSource>,
}

impl PageAssembler {
    pub fn new(source: Arc<dyn PokemonSource>) -> Self {
        Self { source }
    }

    pub async fn home(&self) -> Result<HomePage> {
        let listing = self.load_more(PageRequest::FIRST).await?;

        Ok(HomePage {
            title: HOME_TITLE,
            listing,
        })
    }

    pub async fn detail(&self, name: &str) -> Result<DetailPage> {
        let pokemon = self.source.fetch_by_name(name).await?;
        info!("Loaded details for {} (#{})", pokemon.name, pokemon.id);

        Ok(DetailPage {
            title: DETAIL_TITLE,
            pokemon,
        })
    }

    pub async fn load_more(&self, page: PageRequest) -> Result<ListFragment> {
        let pokemon = self.source.fetch_page(page).await?;
        info!("Loaded {} Pokémon for page {}", pokemon.len(), page.number());

        Ok(ListFragment {
            pokemon,
            next_page: page.next(),
        })
    }
}
