//! Detail page fetching and record assembly

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, instrument};
use url::Url;

use super::PaginatedResultSet;
use crate::error::Result;
use crate::extract::{SpecExtractor, SpecRecord};
use crate::fetch::PageFetcher;
use crate::markup::Document;
use crate::search::SearchResultSet;

/// Fetches resolved detail pages and extracts their records
#[derive(Debug, Clone)]
pub struct ResultAssembler {
    extractor: SpecExtractor,
    concurrency: usize,
}

impl ResultAssembler {
    /// Create an assembler fetching up to `concurrency` pages at once
    pub fn new(extractor: SpecExtractor, concurrency: usize) -> Self {
        Self {
            extractor,
            concurrency: concurrency.max(1),
        }
    }

    /// Fetch and extract every URL in `results`.
    ///
    /// Pages may complete in any order; each result is slotted back by its
    /// listing position. The first failure aborts the whole assembly and
    /// drops any fetches still in flight.
    #[instrument(skip_all, fields(pages = results.len()))]
    pub async fn assemble<F: PageFetcher>(
        &self,
        fetcher: &F,
        results: &SearchResultSet,
    ) -> Result<PaginatedResultSet> {
        if results.is_empty() {
            return Ok(PaginatedResultSet::default());
        }

        let mut slots: Vec<Option<SpecRecord>> = vec![None; results.len()];
        let mut completed = stream::iter(results.urls().iter().enumerate())
            .map(|(index, url)| self.fetch_record(fetcher, index, url))
            .buffer_unordered(self.concurrency);

        while let Some((index, record)) = completed.try_next().await? {
            slots[index] = Some(record);
        }

        let records: Vec<SpecRecord> = slots.into_iter().flatten().collect();
        info!("Assembled {} records", records.len());
        Ok(PaginatedResultSet::from_records(records))
    }

    async fn fetch_record<F: PageFetcher>(
        &self,
        fetcher: &F,
        index: usize,
        url: &Url,
    ) -> Result<(usize, SpecRecord)> {
        let body = fetcher.fetch_page(url).await?;
        let page = Document::parse(&body)?;
        let record = self.extractor.extract(&page)?;
        debug!(position = index + 1, %url, "Extracted detail page");
        Ok((index, record))
    }
}
