//! Markup parsing on top of `scraper`
//!
//! Parsing is permissive: any non-blank input yields a navigable document.
//! Lookups return `Option` rather than failing when a node is missing.

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

/// Error type for markup handling
#[derive(Debug, Error)]
pub enum ParseError {
    /// The page body was empty or whitespace only
    #[error("Document is empty")]
    EmptyDocument,

    /// A selector in the markup map could not be compiled
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector {
        /// The selector text
        selector: String,
        /// Parser diagnostic
        reason: String,
    },
}

/// A parsed page
pub struct Document {
    html: Html,
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").finish_non_exhaustive()
    }
}

impl Document {
    /// Parse raw markup into a document
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        if text.trim().is_empty() {
            return Err(ParseError::EmptyDocument);
        }
        Ok(Self {
            html: Html::parse_document(text),
        })
    }

    /// First element matching `selector`, if any
    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    /// All elements matching `selector`, in document order
    pub fn select_all<'a>(
        &'a self,
        selector: &'a Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(selector)
    }

    /// Value of `attr` on the first element matching `selector`
    pub fn attr_of_first(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.select_first(selector)
            .and_then(|element| element.value().attr(attr))
            .map(|value| value.to_string())
    }
}

/// Compile a CSS selector, mapping failures to [`ParseError`]
pub fn compile_selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::InvalidSelector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// Trimmed concatenation of all text under the element, `None` when blank
pub fn full_text(element: ElementRef<'_>) -> Option<String> {
    let text = element.text().collect::<String>();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Trimmed content of the element's first text node
pub fn first_text(element: ElementRef<'_>) -> Option<String> {
    element.text().next().map(|text| text.trim().to_string())
}
