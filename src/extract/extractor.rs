//! Field extraction from detail pages

use scraper::Selector;
use tracing::{debug, warn};

use super::{ExtractError, SpecField, SpecRecord};
use crate::catalog::MarkupMap;
use crate::markup::{Document, ParseError, compile_selector, first_text};

/// Name reported when the canonical URL is missing
const CANONICAL_URL: &str = "canonical url";

/// Reads a [`SpecRecord`] out of a parsed detail page
#[derive(Debug, Clone)]
pub struct SpecExtractor {
    canonical: Selector,
    canonical_attr: String,
    fields: Vec<(SpecField, Selector)>,
}

impl SpecExtractor {
    /// Compile the detail-page selectors of `markup`
    pub fn new(markup: &MarkupMap) -> Result<Self, ParseError> {
        let fields = markup
            .fields
            .iter()
            .map(|entry| {
                compile_selector(&markup.selector_for(&entry.key)).map(|s| (entry.field, s))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            canonical: compile_selector(&markup.canonical_url.selector)?,
            canonical_attr: markup.canonical_url.attribute.clone(),
            fields,
        })
    }

    /// Extract the record; only a missing canonical URL is an error
    pub fn extract(&self, page: &Document) -> Result<SpecRecord, ExtractError> {
        let url = page
            .attr_of_first(&self.canonical, &self.canonical_attr)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                warn!("Detail page has no canonical URL");
                ExtractError::MissingRequiredField {
                    field: CANONICAL_URL,
                }
            })?;

        let record = self
            .fields
            .iter()
            .fold(SpecRecord::new(url), |record, (field, selector)| {
                let value = page.select_first(selector).and_then(first_text);
                record.with_field(*field, value)
            });

        debug!(url = %record.url, "Extracted specification record");
        Ok(record)
    }
}
