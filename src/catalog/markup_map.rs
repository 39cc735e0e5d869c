//! Versioned mapping from logical fields to catalog markup
//!
//! Every selector the pipeline uses against the catalog lives here, so a
//! change in the upstream page structure is a data change to one table.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extract::SpecField;

/// Selector plus the attribute to read from the matched element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrSelector {
    /// CSS selector
    pub selector: String,
    /// Attribute holding the value
    pub attribute: String,
}

impl AttrSelector {
    fn new(selector: &str, attribute: &str) -> Self {
        Self {
            selector: selector.to_string(),
            attribute: attribute.to_string(),
        }
    }
}

/// Element whose trimmed text marks a condition on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMarker {
    /// CSS selector of candidate elements
    pub selector: String,
    /// Exact trimmed text identifying the marker
    pub text: String,
}

/// Catalog key identifying one specification field on a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldKey {
    /// Logical field
    pub field: SpecField,
    /// Value substituted for `{key}` in the field selector template
    pub key: String,
}

/// Placeholder in [`MarkupMap::field_selector`]
pub const KEY_PLACEHOLDER: &str = "{key}";

/// Complete markup contract with the catalog site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupMap {
    /// Identifier of this revision of the mapping
    pub version: String,

    /// Listing-page element present only for a single match
    pub redirect: AttrSelector,

    /// Listing-page marker for zero matches
    pub no_results: TextMarker,

    /// One listed search result
    pub result_entry: String,

    /// Title link inside a result entry; its text is the product title
    pub result_link: AttrSelector,

    /// Detail-page canonical URL
    pub canonical_url: AttrSelector,

    /// Selector template for a field value, `{key}` is replaced by the field key
    pub field_selector: String,

    /// Fields to extract; fields not listed are always absent
    pub fields: Vec<FieldKey>,
}

impl Default for MarkupMap {
    fn default() -> Self {
        Self {
            version: "ark-2020.1".to_string(),
            redirect: AttrSelector::new("input#FormRedirectUrl", "value"),
            no_results: TextMarker {
                selector: "h2".to_string(),
                text: "No products matching your request were found.".to_string(),
            },
            result_entry: "div.search-result".to_string(),
            result_link: AttrSelector::new("h4.result-title a", "href"),
            canonical_url: AttrSelector::new(r#"meta[property="og:url"]"#, "content"),
            field_selector: r#"span.value[data-key="{key}"]"#.to_string(),
            fields: SpecField::ALL
                .iter()
                .map(|field| FieldKey {
                    field: *field,
                    key: field.default_key().to_string(),
                })
                .collect(),
        }
    }
}

impl MarkupMap {
    /// Load a mapping from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("reading {}: {}", path.display(), e)))?;
        serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("parsing {}: {}", path.display(), e)))
    }

    /// Selector text for one field key
    pub fn selector_for(&self, key: &str) -> String {
        self.field_selector.replace(KEY_PLACEHOLDER, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_covers_every_field() {
        let map = MarkupMap::default();
        assert_eq!(map.fields.len(), SpecField::ALL.len());
        assert_eq!(map.version, "ark-2020.1");
    }

    #[test]
    fn test_selector_for() {
        let map = MarkupMap::default();
        assert_eq!(
            map.selector_for("CoreCount"),
            r#"span.value[data-key="CoreCount"]"#
        );
    }

    #[test]
    fn test_from_json_file() {
        let mut map = MarkupMap::default();
        map.version = "custom-1".to_string();
        map.fields.truncate(2);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string_pretty(&map).unwrap().as_bytes())
            .unwrap();

        let loaded = MarkupMap::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_from_json_file_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let result = MarkupMap::from_json_file(file.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
