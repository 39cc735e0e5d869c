//! # Specification Extraction
//!
//! Turns a parsed product detail page into a [`SpecRecord`]. The page's
//! canonical URL is mandatory; every other field is looked up through the
//! markup map and recorded as absent when its element is missing.

mod error;
mod extractor;
mod record;

pub use error::ExtractError;
pub use extractor::SpecExtractor;
pub use record::{SpecField, SpecRecord};
