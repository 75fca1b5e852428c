//! HTML rendering for the listing, detail and load-more views
//!
//! Every piece of upstream text goes through [`escape`] before it lands in the
//! markup, and names used in links are percent-encoded.

use crate::models::PokemonRecord;
use crate::pages::{DetailPage, HomePage, ListFragment};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; margin: 0; background: #f4f4f8; color: #222; }
header { background: #e3350d; padding: 1rem 2rem; }
header a { color: #fff; font-size: 1.5rem; font-weight: bold; text-decoration: none; }
main { padding: 2rem; }
.poke-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 1rem; }
.poke-tile { background: #fff; border-radius: 8px; padding: 1rem; text-align: center; color: inherit; text-decoration: none; }
.poke-tile img { width: 120px; height: 120px; }
.poke-id { color: #888; }
.types { list-style: none; padding: 0; display: flex; gap: .25rem; justify-content: center; }
.type { background: #ddd; border-radius: 4px; padding: 0 .5rem; }
.load-more { grid-column: 1 / -1; padding: 1rem; font-size: 1rem; cursor: pointer; }
.poke-card { background: #fff; border-radius: 8px; padding: 2rem; max-width: 640px; margin: 0 auto; }
.poke-card .artwork { width: 100%; max-width: 320px; }
.gallery { display: flex; flex-wrap: wrap; gap: .5rem; }
.gallery img { width: 96px; height: 96px; }
";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Wrap rendered content in the full site document.
pub fn layout(title: &str, main_content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="{HTMX_SRC}"></script>
<style>{STYLE}</style>
</head>
<body>
<header><a href="/">Pokédex</a></header>
<main>
{main_content}
</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

pub fn render_home(page: &HomePage) -> String {
    let grid = format!(
        "<section class=\"poke-grid\">\n{}</section>",
        render_fragment(&page.listing)
    );
    layout(page.title, &grid)
}

pub fn render_detail(page: &DetailPage) -> String {
    layout(page.title, &pokemon_card(&page.pokemon))
}

/// Listing tiles followed by a button that swaps itself for the next page.
pub fn render_fragment(fragment: &ListFragment) -> String {
    let mut html = String::new();

    for pokemon in &fragment.pokemon {
        html.push_str(&pokemon_tile(pokemon));
    }

    html.push_str(&format!(
        "<button class=\"load-more\" hx-get=\"/load-more/?page={}\" hx-trigger=\"click\" hx-swap=\"outerHTML\">Load more</button>\n",
        fragment.next_page.number()
    ));

    html
}

fn pokemon_tile(pokemon: &PokemonRecord) -> String {
    let image = pokemon
        .sprites
        .preferred_image()
        .map(|src| {
            format!(
                "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                escape(src),
                escape(&pokemon.name)
            )
        })
        .unwrap_or_default();

    format!(
        "<a class=\"poke-tile\" href=\"/poke/{link}\">{image}<span class=\"poke-id\">#{id}</span><h2>{name}</h2>{types}</a>\n",
        link = urlencoding::encode(&pokemon.name),
        id = pokemon.id,
        name = escape(&pokemon.name),
        types = type_badges(&pokemon.types),
    )
}

fn pokemon_card(pokemon: &PokemonRecord) -> String {
    let sprites = &pokemon.sprites;
    let name = escape(&pokemon.name);

    let artwork = sprites
        .preferred_image()
        .map(|src| format!("<img class=\"artwork\" src=\"{}\" alt=\"{name}\">", escape(src)))
        .unwrap_or_default();

    let abilities: String = pokemon
        .abilities
        .iter()
        .map(|ability| format!("<li class=\"ability\">{}</li>", escape(ability)))
        .collect();

    let gallery: String = [
        ("shiny", sprites.preferred_shiny()),
        ("sprite", sprites.front_default.as_deref()),
        ("dream world", sprites.dream_world.front_default.as_deref()),
        ("dream world female", sprites.dream_world.front_female.as_deref()),
        ("home female", sprites.home.front_female.as_deref()),
        ("home shiny female", sprites.home.front_shiny_female.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, src)| {
        src.map(|src| format!("<img src=\"{}\" alt=\"{name} {label}\" title=\"{label}\">", escape(src)))
    })
    .collect();

    format!(
        r#"<article class="poke-card">
<h1>{name} <span class="poke-id">#{id}</span></h1>
{artwork}
<h2>Types</h2>
{types}
<h2>Abilities</h2>
<ul class="abilities">{abilities}</ul>
<div class="gallery">{gallery}</div>
<p><a href="/">Back to the list</a></p>
</article>"#,
        id = pokemon.id,
        types = type_badges(&pokemon.types),
    )
}

fn type_badges(types: &[String]) -> String {
    let badges: String = types
        .iter()
        .map(|kind| {
            let kind = escape(kind);
            format!("<li class=\"type type-{kind}\">{kind}</li>")
        })
        .collect();

    format!("<ul class=\"types\">{badges}</ul>")
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::*;
    use crate::models::{PageRequest, Sprites};
    use crate::pages::{DETAIL_TITLE, HOME_TITLE};

    fn pokemon(name: &str, id: u32) -> PokemonRecord {
        PokemonRecord {
            name: name.to_string(),
            id,
            abilities: vec!["static".to_string(), "lightning-rod".to_string()],
            types: vec!["electric".to_string()],
            sprites: Sprites {
                front_default: Some("https://img.test/front.png".to_string()),
                ..Sprites::default()
            },
        }
    }

    fn select<'a>(document: &'a Html, selector: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(selector).unwrap();
        document.select(&selector).collect()
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<script>alert("x & 'y'")</script>"#),
            "&lt;script&gt;alert(&quot;x &amp; &#x27;y&#x27;&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("pikachu"), "pikachu");
    }

    #[test]
    fn fragment_has_tiles_in_order_and_next_button() {
        let fragment = ListFragment {
            pokemon: vec![pokemon("bulbasaur", 1), pokemon("ivysaur", 2)],
            next_page: PageRequest::new(3).unwrap(),
        };

        let document = Html::parse_fragment(&render_fragment(&fragment));

        let links: Vec<_> = select(&document, "a.poke-tile")
            .iter()
            .filter_map(|a| a.value().attr("href"))
            .collect();
        assert_eq!(links, vec!["/poke/bulbasaur", "/poke/ivysaur"]);

        let buttons = select(&document, "button.load-more");
        assert_eq!(buttons.len(), 1);
        assert_eq!(buttons[0].value().attr("hx-get"), Some("/load-more/?page=3"));
        assert_eq!(buttons[0].value().attr("hx-swap"), Some("outerHTML"));
    }

    #[test]
    fn empty_fragment_still_points_forward() {
        let fragment = ListFragment {
            pokemon: Vec::new(),
            next_page: PageRequest::new(70).unwrap(),
        };

        let html = render_fragment(&fragment);

        assert!(!html.contains("poke-tile"));
        assert!(html.contains("/load-more/?page=70"));
    }

    #[test]
    fn home_wraps_fragment_in_layout() {
        let page = HomePage {
            title: HOME_TITLE,
            listing: ListFragment {
                pokemon: vec![pokemon("bulbasaur", 1)],
                next_page: PageRequest::new(2).unwrap(),
            },
        };

        let document = Html::parse_document(&render_home(&page));

        let title: String = select(&document, "title")[0].text().collect();
        assert_eq!(title, "Home Page");
        assert_eq!(select(&document, "section.poke-grid a.poke-tile").len(), 1);
        assert_eq!(select(&document, "script[src]").len(), 1);
    }

    #[test]
    fn detail_shows_name_id_types_and_abilities() {
        let page = DetailPage {
            title: DETAIL_TITLE,
            pokemon: pokemon("pikachu", 25),
        };

        let document = Html::parse_document(&render_detail(&page));

        let heading: String = select(&document, "article.poke-card h1")[0].text().collect();
        assert_eq!(heading, "pikachu #25");

        let types: Vec<String> = select(&document, "li.type")
            .iter()
            .map(|li| li.text().collect())
            .collect();
        assert_eq!(types, vec!["electric"]);

        let abilities: Vec<String> = select(&document, "li.ability")
            .iter()
            .map(|li| li.text().collect())
            .collect();
        assert_eq!(abilities, vec!["static", "lightning-rod"]);

        let artwork = select(&document, "img.artwork");
        assert_eq!(artwork[0].value().attr("src"), Some("https://img.test/front.png"));
    }

    #[test]
    fn upstream_text_is_escaped() {
        let mut evil = pokemon("<b>mew</b>", 151);
        evil.types = vec!["\"psychic\"".to_string()];

        let html = render_detail(&DetailPage {
            title: DETAIL_TITLE,
            pokemon: evil.clone(),
        });
        assert!(!html.contains("<b>mew</b>"));
        assert!(html.contains("&lt;b&gt;mew&lt;/b&gt;"));
        assert!(html.contains("type-&quot;psychic&quot;"));

        let tile = render_fragment(&ListFragment {
            pokemon: vec![evil],
            next_page: PageRequest::new(2).unwrap(),
        });
        assert!(tile.contains("href=\"/poke/%3Cb%3Emew%3C%2Fb%3E\""));
    }
}
