use axum::Router;
use axum::extract::{Path, Query, RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::errors::Result;
use crate::models::PageRequest;
use crate::pages::PageAssembler;
use crate::render;

#[derive(Debug, Deserialize)]
pub struct LoadMoreParams {
    page: Option<String>,
}

pub fn router(assembler: PageAssembler) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/poke/:name", get(pokemon_detail))
        .route("/load-more/", get(load_more))
        .route("/load-more", get(load_more_redirect))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(assembler)
}

async fn home(State(assembler): State<PageAssembler>) -> Result<Html<String>> {
    let page = assembler
        .home()
        .await
        .inspect_err(|e| error!("Error rendering home page: {}", e))?;

    Ok(Html(render::render_home(&page)))
}

async fn pokemon_detail(
    State(assembler): State<PageAssembler>,
    Path(name): Path<String>,
) -> Result<Html<String>> {
    let page = assembler
        .detail(&name)
        .await
        .inspect_err(|e| error!("Error rendering details for {}: {}", name, e))?;

    Ok(Html(render::render_detail(&page)))
}

async fn load_more(
    State(assembler): State<PageAssembler>,
    Query(params): Query<LoadMoreParams>,
) -> Result<Html<String>> {
    let page = PageRequest::parse(params.page.as_deref())?;

    let fragment = assembler
        .load_more(page)
        .await
        .inspect_err(|e| error!("Error loading page {}: {}", page.number(), e))?;

    Ok(Html(render::render_fragment(&fragment)))
}

/// `/load-more` without the slash moves permanently to `/load-more/`, query kept.
async fn load_more_redirect(RawQuery(query): RawQuery) -> Response {
    let location = match query {
        Some(query) => format!("/load-more/?{query}"),
        None => "/load-more/".to_string(),
    };

    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
