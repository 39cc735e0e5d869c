//! Search listing resolution

use scraper::Selector;
use tracing::{debug, info, instrument, warn};
use url::Url;

use super::NoiseFilter;
use crate::catalog::CatalogConfig;
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::markup::{Document, compile_selector, full_text};

/// Ordered detail-page URLs resolved for one query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResultSet {
    urls: Vec<Url>,
}

impl SearchResultSet {
    /// Wrap an ordered list of URLs
    pub fn new(urls: Vec<Url>) -> Self {
        Self { urls }
    }

    /// The URLs, in listing order
    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl From<Vec<Url>> for SearchResultSet {
    fn from(urls: Vec<Url>) -> Self {
        Self::new(urls)
    }
}

/// A candidate found on the listing page
#[derive(Debug, Clone, PartialEq, Eq)]
struct Candidate {
    title: String,
    url: Url,
}

/// Maps a query to detail-page URLs via the catalog's search page
#[derive(Debug, Clone)]
pub struct SearchResolver {
    base_url: Url,
    search_url: Url,
    query_param: String,
    redirect: Selector,
    redirect_attr: String,
    no_results: Selector,
    no_results_text: String,
    entry: Selector,
    link: Selector,
    link_attr: String,
    filter: NoiseFilter,
}

impl SearchResolver {
    /// Build a resolver for the catalog described by `config`
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::Config(format!("invalid catalog url '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "catalog url {} cannot be a base",
                base_url
            )));
        }
        let mut search_url = base_url.join(&config.search_path).map_err(|e| {
            Error::Config(format!("invalid search path '{}': {}", config.search_path, e))
        })?;
        search_url
            .query_pairs_mut()
            .clear()
            .extend_pairs(config.search_params.iter());
        let markup = &config.markup;

        Ok(Self {
            base_url,
            search_url,
            query_param: config.query_param.clone(),
            redirect: compile_selector(&markup.redirect.selector)?,
            redirect_attr: markup.redirect.attribute.clone(),
            no_results: compile_selector(&markup.no_results.selector)?,
            no_results_text: markup.no_results.text.clone(),
            entry: compile_selector(&markup.result_entry)?,
            link: compile_selector(&markup.result_link.selector)?,
            link_attr: markup.result_link.attribute.clone(),
            filter: NoiseFilter::new(&config.ignore_words),
        })
    }

    /// Search endpoint URL carrying the encoded query
    pub fn search_url(&self, query: &str) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut().append_pair(&self.query_param, query);
        url
    }

    /// Fetch the listing for `query` and resolve it
    #[instrument(skip(self, fetcher))]
    pub async fn resolve<F: PageFetcher>(
        &self,
        fetcher: &F,
        query: &str,
    ) -> Result<SearchResultSet> {
        let url = self.search_url(query);
        debug!("Searching {}", url);

        let body = fetcher.fetch_page(&url).await?;
        let page = Document::parse(&body)?;
        let results = self.resolve_listing(&page);

        info!("Resolved {} candidate pages", results.len());
        Ok(results)
    }

    /// Resolve an already parsed listing page
    pub fn resolve_listing(&self, page: &Document) -> SearchResultSet {
        if let Some(url) = self.redirect_target(page) {
            debug!("Single match redirect to {}", url);
            return SearchResultSet::new(vec![url]);
        }

        if self.has_no_results_marker(page) {
            debug!("Listing reports no matches");
            return SearchResultSet::default();
        }

        let urls = self
            .candidates(page)
            .into_iter()
            .filter(|candidate| {
                let noise = self.filter.is_noise(&candidate.title);
                if noise {
                    debug!(title = %candidate.title, "Ignoring listing");
                }
                !noise
            })
            .map(|candidate| candidate.url)
            .collect();

        SearchResultSet::new(urls)
    }

    fn redirect_target(&self, page: &Document) -> Option<Url> {
        let value = page.attr_of_first(&self.redirect, &self.redirect_attr)?;
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match self.base_url.join(value) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Unusable redirect target '{}': {}", value, e);
                None
            }
        }
    }

    fn has_no_results_marker(&self, page: &Document) -> bool {
        page.select_all(&self.no_results)
            .any(|element| full_text(element).as_deref() == Some(self.no_results_text.as_str()))
    }

    fn candidates(&self, page: &Document) -> Vec<Candidate> {
        page.select_all(&self.entry)
            .filter_map(|entry| {
                let link = entry.select(&self.link).next()?;
                let title = full_text(link)?;
                let href = link.value().attr(&self.link_attr)?;
                match self.base_url.join(href.trim()) {
                    Ok(url) => Some(Candidate { title, url }),
                    Err(e) => {
                        warn!("Skipping listing with bad link '{}': {}", href, e);
                        None
                    }
                }
            })
            .collect()
    }
}
