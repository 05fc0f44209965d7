//! Spell summary scraped from a reference page.

use serde::{Deserialize, Serialize};
use url::Url;

/// How a labeled attribute should be laid out when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldDisplay {
    /// Rendered side by side with neighbouring inline attributes
    Inline,
    /// Rendered on its own row
    Block,
}

impl FieldDisplay {
    pub fn is_inline(self) -> bool {
        matches!(self, Self::Inline)
    }
}

/// A (label, value) pair from the spell's statblock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellAttribute {
    pub label: String,
    pub value: String,
    pub display: FieldDisplay,
}

impl SpellAttribute {
    pub fn inline(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            display: FieldDisplay::Inline,
        }
    }

    pub fn block(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            display: FieldDisplay::Block,
        }
    }
}

/// Normalized spell summary, built fresh from one fetched page.
///
/// Title and description are whitespace-trimmed on construction, and the
/// image URL is always absolute. A blank image reference counts as no image.
/// Attributes keep page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellRecord {
    title: String,
    source_url: String,
    image_url: Option<String>,
    description: String,
    attributes: Vec<SpellAttribute>,
    components: Option<String>,
}

impl SpellRecord {
    pub fn new(
        title: &str,
        source_url: impl Into<String>,
        image_url: Option<String>,
        description: &str,
        attributes: Vec<SpellAttribute>,
        components: Option<String>,
    ) -> Self {
        let source_url = source_url.into();
        let image_url = image_url
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| normalize_image_url(&raw, &source_url));

        Self {
            title: title.trim().to_string(),
            source_url,
            image_url,
            description: description.trim().to_string(),
            attributes,
            components,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Statblock attributes in page order.
    pub fn attributes(&self) -> &[SpellAttribute] {
        &self.attributes
    }

    pub fn components(&self) -> Option<&str> {
        self.components.as_deref()
    }

    /// Attributes followed by the components, when present, as a block field.
    pub fn fields(&self) -> Vec<SpellAttribute> {
        let mut fields = self.attributes.clone();
        if let Some(components) = &self.components {
            fields.push(SpellAttribute::block("Components", components.as_str()));
        }
        fields
    }
}

/// Make an image reference absolute.
///
/// - Values already carrying an `https:` or `http:` scheme (any case) are
///   returned unchanged.
/// - Protocol-relative values (`//host/x.png`) are prefixed with `https:`.
/// - Path-relative values are resolved against `base`, falling back to the
///   `https:` prefix when `base` is not a usable URL.
pub fn normalize_image_url(raw: &str, base: &str) -> String {
    let raw = raw.trim();
    let lower = raw.to_ascii_lowercase();
    if lower.starts_with("https:") || lower.starts_with("http:") {
        return raw.to_string();
    }

    if raw.starts_with("//") {
        return format!("https:{}", raw);
    }

    match Url::parse(base).and_then(|base| base.join(raw)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("https:{}", raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.dndbeyond.com/spells/fireball";

    #[test]
    fn protocol_relative_image_gets_https() {
        assert_eq!(
            normalize_image_url("//example.com/x.png", BASE),
            "https://example.com/x.png"
        );
    }

    #[test]
    fn protocol_relative_image_gets_https_even_from_http_base() {
        assert_eq!(
            normalize_image_url("//example.com/x.png", "http://example.org/spells/x"),
            "https://example.com/x.png"
        );
    }

    #[test]
    fn absolute_https_image_is_unchanged_in_any_case() {
        assert_eq!(
            normalize_image_url("https://cdn.example.com/a.png", BASE),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(
            normalize_image_url("HTTPS://cdn.example.com/A.png", BASE),
            "HTTPS://cdn.example.com/A.png"
        );
    }

    #[test]
    fn root_relative_image_resolves_against_source() {
        assert_eq!(
            normalize_image_url("/attachments/icon.png", BASE),
            "https://www.dndbeyond.com/attachments/icon.png"
        );
    }

    #[test]
    fn unusable_base_falls_back_to_prefix() {
        assert_eq!(
            normalize_image_url("/x.png", "not a url"),
            "https:/x.png"
        );
    }

    #[test]
    fn record_trims_title_and_description() {
        let record = SpellRecord::new(
            "  Fireball \n",
            BASE,
            None,
            "\n  A bright streak flashes.  ",
            vec![],
            None,
        );
        assert_eq!(record.title(), "Fireball");
        assert_eq!(record.description(), "A bright streak flashes.");
        assert_eq!(record.image_url(), None);
    }

    #[test]
    fn record_normalizes_image_on_construction() {
        let record = SpellRecord::new(
            "Fireball",
            BASE,
            Some("//media.example.com/fireball.jpg".to_string()),
            "",
            vec![],
            None,
        );
        assert_eq!(
            record.image_url(),
            Some("https://media.example.com/fireball.jpg")
        );
    }

    #[test]
    fn record_drops_blank_image() {
        for raw in ["", "  \n"] {
            let record = SpellRecord::new("Fireball", BASE, Some(raw.to_string()), "", vec![], None);
            assert_eq!(record.image_url(), None);
        }
    }

    #[test]
    fn fields_append_components_as_block() {
        let record = SpellRecord::new(
            "Fireball",
            BASE,
            None,
            "",
            vec![
                SpellAttribute::inline("Level", "3rd"),
                SpellAttribute::inline("Range/Area", "150 ft. (20 ft.)"),
            ],
            Some("a tiny ball of bat guano and sulfur".to_string()),
        );

        let fields = record.fields();
        let labels: Vec<&str> = fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Level", "Range/Area", "Components"]);
        assert!(fields[0].display.is_inline());
        assert_eq!(fields[2].display, FieldDisplay::Block);
        assert_eq!(fields[2].value, "a tiny ball of bat guano and sulfur");
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = SpellRecord::new("Fireball", BASE, None, "", vec![], None);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["sourceUrl"], BASE);
        assert!(json["imageUrl"].is_null());
    }
}
