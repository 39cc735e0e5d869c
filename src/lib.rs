//! # arkspec - Processor specification lookup
//!
//! This crate resolves a free-text product query into structured
//! specification records by searching a product catalog, fetching the
//! matching detail pages, and extracting a fixed set of fields from their
//! markup.
//!
//! ## Features
//!
//! - Short-circuit routing of junk queries before any network access
//! - Search listing resolution with single-match redirects and noise filtering
//! - Tolerant field extraction driven by a versioned markup map
//! - Concurrent detail-page fetching with stable listing order
//! - Per-query HTTP sessions and a whole-query timeout
//!
//! ## Example
//!
//! ```rust,no_run
//! use arkspec::catalog::CatalogConfig;
//! use arkspec::pipeline::{Pipeline, QueryOutcome};
//! use arkspec::router::RouterConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = Pipeline::http(&CatalogConfig::default(), &RouterConfig::default())?;
//!
//!     match pipeline.run_query("i7-9700", "requester-1").await? {
//!         QueryOutcome::Canned(response) => println!("{}", response.text),
//!         QueryOutcome::NoResults { query } => {
//!             println!("{}", QueryOutcome::no_results_message(&query))
//!         }
//!         QueryOutcome::Results(results) => {
//!             for entry in results.entries() {
//!                 println!("{} of {}: {}", entry.position, entry.total, entry.record.url);
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```

mod error;

pub mod assemble;
pub mod catalog;
pub mod extract;
pub mod fetch;
pub mod markup;
pub mod pipeline;
pub mod router;
pub mod search;

pub use error::{Error, RETRIEVAL_FAILED_MESSAGE};

/// Re-export of types module for public use
pub mod prelude {
    pub use crate::assemble::{PagedRecord, PaginatedResultSet};
    pub use crate::catalog::{CatalogConfig, MarkupMap};
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::extract::{SpecField, SpecRecord};
    pub use crate::pipeline::{Pipeline, QueryOutcome};
    pub use crate::router::RouterConfig;
}
