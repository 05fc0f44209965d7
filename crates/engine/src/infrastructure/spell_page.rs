//! Spell page extraction.
//!
//! Turns a reference page into a [`SpellRecord`]. Selector queries do all the
//! navigation except the components blurb, which needs the one regex step in
//! [`extract_components`]. Nothing here touches the network.

use std::sync::LazyLock;

use beholder_domain::{SpellAttribute, SpellRecord};
use regex_lite::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::infrastructure::ports::ExtractionError;

struct SpellPageSelectors {
    title: Selector,
    image: Selector,
    description: Selector,
    statblock_item: Selector,
    statblock_label: Selector,
    statblock_value: Selector,
    components: Selector,
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

static SELECTORS: LazyLock<SpellPageSelectors> = LazyLock::new(|| SpellPageSelectors {
    title: selector("h1.page-title"),
    image: selector(".spell-image"),
    description: selector(".more-info-content p"),
    statblock_item: selector("div.ddb-statblock-item"),
    statblock_label: selector(".ddb-statblock-item-label"),
    statblock_value: selector(".ddb-statblock-item-value"),
    components: selector(".components-blurb"),
});

static COMPONENTS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\)").expect("valid regex"));

/// Parse raw HTML and extract the spell it describes.
pub fn parse_spell_page(html: &str, source_url: &str) -> Result<SpellRecord, ExtractionError> {
    let document = Html::parse_document(html);
    extract_spell(&document, source_url)
}

/// Extract a spell record from a parsed page.
///
/// Missing pieces are tolerated: no title gives an empty title, no image
/// gives no thumbnail, no blurb gives no components. The only failure is a
/// components blurb with text but no parenthesized group.
pub fn extract_spell(document: &Html, source_url: &str) -> Result<SpellRecord, ExtractionError> {
    let selectors = &*SELECTORS;

    let title = document
        .select(&selectors.title)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let image_url = document
        .select(&selectors.image)
        .next()
        .and_then(|image| image.value().attr("src"))
        .filter(|src| !src.trim().is_empty())
        .map(str::to_string);

    let description: String = document
        .select(&selectors.description)
        .map(element_text)
        .collect();

    let attributes = document
        .select(&selectors.statblock_item)
        .map(|item| {
            SpellAttribute::inline(
                nested_text(item, &selectors.statblock_label).trim(),
                nested_text(item, &selectors.statblock_value).trim(),
            )
        })
        .collect();

    let blurb: String = document
        .select(&selectors.components)
        .map(element_text)
        .collect();
    let components = if blurb.trim().is_empty() {
        None
    } else {
        Some(extract_components(&blurb)?)
    };

    Ok(SpellRecord::new(
        &title,
        source_url,
        image_url,
        &description,
        attributes,
        components,
    ))
}

/// Text inside the first parenthesized group of a components blurb.
///
/// `"* - (a tiny ball of bat guano and sulfur)"` gives
/// `"a tiny ball of bat guano and sulfur"`.
pub fn extract_components(blurb: &str) -> Result<String, ExtractionError> {
    COMPONENTS_RE
        .captures(blurb)
        .and_then(|captures| captures.get(1))
        .map(|group| group.as_str().to_string())
        .ok_or_else(|| ExtractionError::MalformedComponents(blurb.trim().to_string()))
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

fn nested_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element.select(selector).map(element_text).collect()
}
