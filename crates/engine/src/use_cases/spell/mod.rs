//! Spell lookup use cases.
//!
//! The flow is:
//! 1. Normalize the requested name into a page slug
//! 2. Fetch the spell page (one attempt)
//! 3. Extract a `SpellRecord` from the page
//! 4. Render the record as a rich message

use std::sync::Arc;

use beholder_domain::SpellRecord;

use crate::infrastructure::ports::{
    EmbedField, EmbedFooter, ExtractionError, PageFetcher, RichMessage,
};
use crate::infrastructure::spell_page::parse_spell_page;

pub const FOOTER_ICON_URL: &str =
    "https://www.dndbeyond.com/Content/1-0-377-0/Skins/Waterdeep/images/dnd-beyond-b-red.png";
pub const FOOTER_TEXT: &str = "DnD Beyond";

/// Container for spell use cases.
#[derive(Clone)]
pub struct SpellUseCases {
    pub lookup: Arc<LookupSpell>,
}

impl SpellUseCases {
    pub fn new(lookup: Arc<LookupSpell>) -> Self {
        Self { lookup }
    }
}

/// Fetch and extract one spell page.
pub struct LookupSpell {
    fetcher: Arc<dyn PageFetcher>,
    base_url: String,
}

impl LookupSpell {
    /// `base_url` must end with `/`; the slug is appended to it.
    pub fn new(fetcher: Arc<dyn PageFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// Page URL for a spell name as typed by the user.
    pub fn spell_url(&self, name: &str) -> String {
        format!("{}{}", self.base_url, normalize_spell_name(name))
    }

    pub async fn execute(&self, name: &str) -> Result<SpellRecord, ExtractionError> {
        let url = self.spell_url(name);
        let html = self.fetcher.fetch(&url).await?;
        let record = parse_spell_page(&html, &url)?;

        tracing::debug!(
            url = %url,
            title = %record.title(),
            attributes = record.attributes().len(),
            "Extracted spell"
        );
        Ok(record)
    }
}

/// Lowercase, drop apostrophes, then turn spaces into hyphens:
/// "Tasha's Hideous Laughter" becomes "tashas-hideous-laughter".
pub fn normalize_spell_name(name: &str) -> String {
    name.to_lowercase()
        .replace(['\'', '\u{2019}'], "")
        .replace(' ', "-")
}

/// Render a spell record as a rich message with the reference-site footer.
pub fn spell_message(record: &SpellRecord) -> RichMessage {
    RichMessage {
        title: record.title().to_string(),
        url: record.source_url().to_string(),
        thumbnail_url: record.image_url().map(str::to_string),
        description: record.description().to_string(),
        fields: record
            .fields()
            .into_iter()
            .map(|attribute| EmbedField {
                name: attribute.label,
                value: attribute.value,
                inline: attribute.display.is_inline(),
            })
            .collect(),
        footer: EmbedFooter {
            icon_url: FOOTER_ICON_URL.to_string(),
            text: FOOTER_TEXT.to_string(),
        },
    }
}
