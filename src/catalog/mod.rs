//! Catalog site configuration and markup contract

mod config;
mod markup_map;

pub use config::{CatalogConfig, CatalogConfigBuilder};
pub use markup_map::{AttrSelector, FieldKey, KEY_PLACEHOLDER, MarkupMap, TextMarker};
