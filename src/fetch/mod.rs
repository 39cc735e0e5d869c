//! # Page Fetching
//!
//! The pipeline only needs one capability from the network: given a URL,
//! return the page's markup. This module defines that seam and the
//! reqwest-backed implementation used in production.
//!
//! ## Key Components
//!
//! - `PageFetcher`: fetch raw markup by URL
//! - `Transport`: opens a query-scoped session implementing `PageFetcher`
//! - `HttpTransport` / `HttpSession`: reqwest implementation
//!
//! Sessions hold pooled connections. A session is opened at the start of a
//! query and released when the query finishes, fails, or is cancelled.

mod error;
mod http;

pub use error::FetchError;
pub use http::{HttpSession, HttpTransport};

use std::future::Future;

use url::Url;

/// Retrieves the raw markup of a page
pub trait PageFetcher {
    /// Fetch the page at `url`, failing on transport errors and non-success statuses
    fn fetch_page(&self, url: &Url) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Opens fetch sessions scoped to a single query
pub trait Transport {
    /// Session type handed to the pipeline stages
    type Session: PageFetcher;

    /// Open a new session; dropping it releases its resources
    fn open_session(&self) -> Result<Self::Session, FetchError>;
}
