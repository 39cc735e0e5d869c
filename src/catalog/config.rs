//! # Catalog Configuration Module
//!
//! Everything the pipeline needs to know about the upstream catalog: where
//! it lives, how its search endpoint is addressed, which listings count as
//! noise, and the markup contract used to read its pages.
//!
//! ## Key Components
//!
//! - `CatalogConfig`: immutable settings handed to each pipeline stage
//! - `CatalogConfigBuilder`: builder for overriding defaults

use std::time::Duration;

use super::MarkupMap;

/// Browser user agent; the catalog serves reduced pages to unknown agents
const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 ",
    "(KHTML, like Gecko) Chrome/80.0.3987.163 Safari/537.36"
);

/// Listing titles containing any of these are accessories or category pages
const DEFAULT_IGNORE_WORDS: &[&str] = &[
    "generation",
    "ethernet",
    "wireless",
    "products formerly",
    "heat sink",
    "compute module",
    "board",
];

/// Configuration for the catalog pipeline
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Origin of the catalog; relative links are resolved against it
    pub base_url: String,

    /// Path of the search endpoint
    pub search_path: String,

    /// Fixed query parameters sent with every search
    pub search_params: Vec<(String, String)>,

    /// Name of the query parameter carrying the search text
    pub query_param: String,

    /// User agent to use for requests
    pub user_agent: String,

    /// Budget for a whole query, listing and detail pages included
    pub query_timeout: Duration,

    /// Per-request timeout enforced by the HTTP client
    pub request_timeout: Duration,

    /// Maximum number of detail pages fetched at once
    pub concurrency: usize,

    /// Lowercase substrings marking a listing as noise
    pub ignore_words: Vec<String>,

    /// Markup contract with the catalog
    pub markup: MarkupMap,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ark.intel.com".to_string(),
            search_path: "/content/www/us/en/ark/search.html".to_string(),
            search_params: vec![("_charset_".to_string(), "UTF-8".to_string())],
            query_param: "q".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            query_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(10),
            concurrency: 4,
            ignore_words: DEFAULT_IGNORE_WORDS.iter().map(|w| w.to_string()).collect(),
            markup: MarkupMap::default(),
        }
    }
}

/// Builder for CatalogConfig
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    config: CatalogConfig,
}

impl CatalogConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: CatalogConfig::default(),
        }
    }

    /// Set the catalog origin
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    /// Set the search endpoint path
    pub fn search_path(mut self, search_path: impl Into<String>) -> Self {
        self.config.search_path = search_path.into();
        self
    }

    /// Replace the fixed query parameters sent with every search
    pub fn search_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.config.search_params = params
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Set the name of the query parameter carrying the search text
    pub fn query_param(mut self, query_param: impl Into<String>) -> Self {
        self.config.query_param = query_param.into();
        self
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the whole-query timeout
    pub fn query_timeout(mut self, query_timeout: Duration) -> Self {
        self.config.query_timeout = query_timeout;
        self
    }

    /// Set the per-request timeout
    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.config.request_timeout = request_timeout;
        self
    }

    /// Set the detail-page fetch concurrency (at least 1)
    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency.max(1);
        self
    }

    /// Replace the ignore list; entries are lowercased
    pub fn ignore_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.config.ignore_words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Set the markup contract
    pub fn markup(mut self, markup: MarkupMap) -> Self {
        self.config.markup = markup;
        self
    }

    /// Build the configuration
    pub fn build(self) -> CatalogConfig {
        self.config
    }
}

impl CatalogConfig {
    /// Create a new builder
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::new()
    }
}
