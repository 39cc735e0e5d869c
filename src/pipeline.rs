//! # Query Pipeline
//!
//! Entry point tying the stages together:
//!
//! 1. `QueryRouter` answers junk queries without touching the network
//! 2. `SearchResolver` turns the query into detail-page URLs
//! 3. `ResultAssembler` fetches and extracts every URL, preserving order
//!
//! Each query opens its own transport session and runs under a single
//! timeout. When the timeout fires, in-flight fetches are dropped along with
//! the session and no partial result is returned.

use std::time::Duration;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::assemble::{PaginatedResultSet, ResultAssembler};
use crate::catalog::CatalogConfig;
use crate::error::{Error, Result};
use crate::extract::SpecExtractor;
use crate::fetch::{HttpTransport, Transport};
use crate::router::{CannedResponse, QueryRouter, RouterConfig};
use crate::search::SearchResolver;

/// Result of a query that did not fail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// The router answered; no search was made
    Canned(CannedResponse),

    /// The catalog matched nothing
    NoResults {
        /// The query as given
        query: String,
    },

    /// One or more records, in listing order
    Results(PaginatedResultSet),
}

impl QueryOutcome {
    /// Message for an empty search, with the query set in a code span
    pub fn no_results_message(query: &str) -> String {
        format!("No results found for {}", code_span(query))
    }
}

/// Wrap `text` in a Markdown code span it cannot break out of.
///
/// The fence is one backtick longer than the longest backtick run inside
/// the text, and padded when the text starts or ends with a backtick.
pub fn code_span(text: &str) -> String {
    let longest_run = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest_run + 1);
    let pad = if text.starts_with('`') || text.ends_with('`') {
        " "
    } else {
        ""
    };
    format!("{fence}{pad}{text}{pad}{fence}")
}

/// The complete query-to-records pipeline
#[derive(Debug)]
pub struct Pipeline<T: Transport> {
    router: QueryRouter,
    resolver: SearchResolver,
    assembler: ResultAssembler,
    transport: T,
    query_timeout: Duration,
}

impl Pipeline<HttpTransport> {
    /// Pipeline fetching over HTTP with the configured user agent
    pub fn http(config: &CatalogConfig, router: &RouterConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.user_agent.clone(), config.request_timeout);
        Self::new(config, router, transport)
    }
}

impl<T: Transport> Pipeline<T> {
    /// Build a pipeline, compiling all selectors and patterns up front
    pub fn new(config: &CatalogConfig, router: &RouterConfig, transport: T) -> Result<Self> {
        let extractor = SpecExtractor::new(&config.markup)?;
        Ok(Self {
            router: QueryRouter::new(router)?,
            resolver: SearchResolver::new(config)?,
            assembler: ResultAssembler::new(extractor, config.concurrency),
            transport,
            query_timeout: config.query_timeout,
        })
    }

    /// Run one query on behalf of `requester`
    #[instrument(skip(self))]
    pub async fn run_query(&self, query: &str, requester: &str) -> Result<QueryOutcome> {
        if let Some(response) = self.router.route(query, requester) {
            info!("Query answered by router");
            return Ok(QueryOutcome::Canned(response));
        }

        let results = tokio::time::timeout(self.query_timeout, self.search(query))
            .await
            .map_err(|_| {
                warn!("Query timed out after {:?}", self.query_timeout);
                Error::Timeout(self.query_timeout)
            })??;

        if results.is_empty() {
            info!("No results");
            return Ok(QueryOutcome::NoResults {
                query: query.to_string(),
            });
        }
        info!("Returning {} records", results.total());
        Ok(QueryOutcome::Results(results))
    }

    async fn search(&self, query: &str) -> Result<PaginatedResultSet> {
        let session = self.transport.open_session()?;
        let urls = self.resolver.resolve(&session, query).await?;
        self.assembler.assemble(&session, &urls).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use crate::fetch::testing::StaticTransport;
    use mockito::Server;

    const SEARCH_PATH: &str = "/content/www/us/en/ark/search.html";

    fn entry(title: &str, href: &str) -> String {
        format!(
            r#"<div class="search-result">
                 <h4 class="result-title"><a href="{href}">{title}</a></h4>
               </div>"#
        )
    }

    fn detail(url: &str, number: &str) -> String {
        format!(
            r#"<html><head><meta property="og:url" content="{url}"></head><body>
               <span class="value" data-key="ProcessorNumber">{number}</span>
               <span class="value" data-key="CoreCount">8</span>
               </body></html>"#
        )
    }

    fn search_url(base: &str, query: &str) -> String {
        let config = CatalogConfig::builder().base_url(base).build();
        let resolver = SearchResolver::new(&config).unwrap();
        resolver.search_url(query).to_string()
    }

    fn pipeline(transport: StaticTransport) -> Pipeline<StaticTransport> {
        Pipeline::new(
            &CatalogConfig::default(),
            &RouterConfig::default(),
            transport,
        )
        .unwrap()
    }

    #[test]
    fn test_code_span() {
        assert_eq!(code_span("i7-9700"), "`i7-9700`");
        assert_eq!(code_span("a`b"), "``a`b``");
        assert_eq!(code_span("``x"), "``` ``x ```");
        assert_eq!(
            QueryOutcome::no_results_message("foo`bar"),
            "No results found for ``foo`bar``"
        );
    }

    #[tokio::test]
    async fn test_mention_short_circuits_without_fetching() {
        let transport = StaticTransport::new();
        let pipeline = pipeline(transport.clone());

        let outcome = pipeline.run_query("@everyone", "42").await.unwrap();
        assert!(matches!(outcome, QueryOutcome::Canned(_)));
        assert!(transport.fetched().is_empty());
        assert_eq!(transport.opened_sessions(), 0);
    }

    #[tokio::test]
    async fn test_end_to_end_filters_and_orders() {
        let base = "https://ark.intel.com";
        let listing = format!(
            "<html><body>{}{}{}</body></html>",
            entry("Intel® Core™ i7-9700 Processor", "/products/191792.html"),
            entry("Intel® Compute Module Kit", "/products/100.html"),
            entry("Intel® Core™ i7-9700K Processor", "/products/186604.html"),
        );
        let first = "https://ark.intel.com/products/191792.html";
        let second = "https://ark.intel.com/products/186604.html";
        let transport = StaticTransport::new()
            .page(&search_url(base, "i7-9700"), &listing)
            .delayed_page(first, &detail(first, "i7-9700"), Duration::from_millis(30))
            .page(second, &detail(second, "i7-9700K"));
        let pipeline = pipeline(transport.clone());

        let outcome = pipeline.run_query("i7-9700", "42").await.unwrap();
        let QueryOutcome::Results(results) = outcome else {
            panic!("expected results, got {outcome:?}");
        };

        assert_eq!(results.total(), 2);
        let entries = results.entries();
        assert_eq!(entries[0].record.url, first);
        assert_eq!(entries[0].position, 1);
        assert_eq!(entries[0].record.processor_number.as_deref(), Some("i7-9700"));
        assert_eq!(entries[1].record.url, second);
        assert_eq!(entries[1].position, 2);
        assert!(entries.iter().all(|e| e.total == 2));

        assert_eq!(transport.fetched().len(), 3);
        assert_eq!(transport.live_sessions(), 0);
    }

    #[tokio::test]
    async fn test_zero_matches_is_no_results() {
        let transport = StaticTransport::new().page(
            &search_url("https://ark.intel.com", "zzz`"),
            "<html><body><h2>No products matching your request were found.</h2></body></html>",
        );
        let pipeline = pipeline(transport.clone());

        let outcome = pipeline.run_query("zzz`", "42").await.unwrap();
        assert_eq!(
            outcome,
            QueryOutcome::NoResults {
                query: "zzz`".to_string()
            }
        );
        assert_eq!(
            QueryOutcome::no_results_message("zzz`"),
            "No results found for `` zzz` ``"
        );
        assert_eq!(transport.fetched().len(), 1);
    }

    #[tokio::test]
    async fn test_timeout_drops_session() {
        let base = "https://ark.intel.com";
        let transport = StaticTransport::new().delayed_page(
            &search_url(base, "slow"),
            "<html></html>",
            Duration::from_secs(5),
        );
        let config = CatalogConfig::builder()
            .query_timeout(Duration::from_millis(50))
            .build();
        let pipeline =
            Pipeline::new(&config, &RouterConfig::default(), transport.clone()).unwrap();

        let result = pipeline.run_query("slow", "42").await;
        assert!(matches!(result, Err(Error::Timeout(_))));
        assert_eq!(transport.opened_sessions(), 1);
        assert_eq!(transport.live_sessions(), 0);
    }

    #[tokio::test]
    async fn test_fetch_error_releases_session() {
        let transport = StaticTransport::new();
        let pipeline = pipeline(transport.clone());

        let result = pipeline.run_query("i3", "42").await;
        assert!(matches!(result, Err(Error::Fetch(FetchError::NotFound(_)))));
        assert_eq!(transport.live_sessions(), 0);
    }

    #[tokio::test]
    async fn test_http_pipeline_single_redirect() {
        let mut server = Server::new_async().await;
        let listing = server
            .mock("GET", SEARCH_PATH)
            .match_query(mockito::Matcher::UrlEncoded("q".into(), "i5-9400".into()))
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(format!(
                r#"<html><body>
                     <input id="FormRedirectUrl" value="/products/190883.html">{}
                   </body></html>"#,
                entry("Intel® Core™ i3-9100", "/products/134870.html")
            ))
            .expect(1)
            .create_async()
            .await;
        let detail_url = format!("{}/products/190883.html", server.url());
        let detail_page = server
            .mock("GET", "/products/190883.html")
            .with_status(200)
            .with_body(detail(&detail_url, "i5-9400"))
            .expect(1)
            .create_async()
            .await;
        let other = server
            .mock("GET", "/products/134870.html")
            .expect(0)
            .create_async()
            .await;

        let config = CatalogConfig::builder().base_url(server.url()).build();
        let pipeline = Pipeline::http(&config, &RouterConfig::default()).unwrap();
        let outcome = pipeline.run_query("i5-9400", "42").await.unwrap();

        let QueryOutcome::Results(results) = outcome else {
            panic!("expected results, got {outcome:?}");
        };
        assert!(results.is_single());
        assert_eq!(results.entries()[0].record.url, detail_url);

        listing.assert_async().await;
        detail_page.assert_async().await;
        other.assert_async().await;
    }

    #[tokio::test]
    async fn test_http_pipeline_server_error() {
        let mut server = Server::new_async().await;
        let listing = server
            .mock("GET", SEARCH_PATH)
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let config = CatalogConfig::builder().base_url(server.url()).build();
        let pipeline = Pipeline::http(&config, &RouterConfig::default()).unwrap();
        let result = pipeline.run_query("i9", "42").await;

        assert!(matches!(
            result,
            Err(Error::Fetch(FetchError::Status { status: 500, .. }))
        ));
        listing.assert_async().await;
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = CatalogConfig::builder().base_url("not a url").build();
        let result = Pipeline::http(&config, &RouterConfig::default());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
