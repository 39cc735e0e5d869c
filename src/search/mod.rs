//! # Catalog Search Resolution
//!
//! First network stage of the pipeline: submit the query to the catalog's
//! search endpoint and turn the listing page into an ordered set of detail
//! page URLs.
//!
//! ## Listing outcomes
//!
//! 1. A redirect field is present: the catalog matched exactly one product,
//!    the field's URL is the whole result
//! 2. The "no results" marker is present: the result set is empty
//! 3. Otherwise every listed entry with a readable title and link becomes a
//!    candidate, minus titles matching the ignore list
//!
//! Entries whose markup is incomplete are skipped, never fatal.

mod filter;
mod resolver;

pub use filter::NoiseFilter;
pub use resolver::{SearchResolver, SearchResultSet};
