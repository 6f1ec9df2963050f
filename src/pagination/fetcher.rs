//! The paginated fetch loop

use super::types::{FetchState, ListPage};
use crate::error::Result;
use crate::http::{HttpClient, RequestConfig};
use crate::types::Resource;
use futures::stream::{self, Stream, TryStreamExt};
use tracing::debug;

/// A paginated fetch against one list endpoint
///
/// Holds the endpoint path, the fixed query parameters, and an optional cap
/// on the total number of items delivered. The page token is owned entirely
/// by the fetch loop; it never appears in the fixed parameters.
///
/// Items are delivered in server order, pages concatenated in request order.
/// Any failure aborts the remaining pagination and surfaces as the run's
/// single error; partial results are never returned as success.
#[derive(Debug)]
pub struct PagedFetch<'a> {
    client: &'a HttpClient,
    path: String,
    query: Vec<(String, String)>,
    limit: Option<usize>,
}

impl<'a> PagedFetch<'a> {
    /// Create a fetch for an endpoint path with fixed query parameters
    pub fn new(client: &'a HttpClient, path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            client,
            path: path.into(),
            query,
            limit: None,
        }
    }

    /// Cap the total number of items delivered across all pages
    ///
    /// Once the cap is met the fetch returns without requesting another
    /// page, even if the current page carried a continuation token.
    #[must_use]
    pub fn limit(mut self, max_items: usize) -> Self {
        self.limit = Some(max_items);
        self
    }

    /// Fetch all pages and return the accumulated items
    pub async fn collect(self) -> Result<Vec<Resource>> {
        let mut items = Vec::new();
        self.run(|item| items.push(item)).await?;
        Ok(items)
    }

    /// Fetch all pages, invoking the visitor once per item in delivery
    /// order, and return the number of items delivered
    pub async fn visit<F>(self, mut on_item: F) -> Result<usize>
    where
        F: FnMut(&Resource),
    {
        self.run(|item| on_item(&item)).await
    }

    /// The fetch loop
    ///
    /// Two states: a page left to request, or done. Every item of a page is
    /// handed to the sink before the next page is requested; hitting the
    /// cap mid-page stops delivery and skips the remaining requests.
    async fn run<F>(self, mut sink: F) -> Result<usize>
    where
        F: FnMut(Resource),
    {
        let mut state = FetchState::start();
        let mut delivered = 0usize;
        let mut pages = 0u32;

        if self.limit == Some(0) {
            return Ok(0);
        }

        while let FetchState::Fetching(token) = state {
            let page = self.fetch_page(token.as_deref()).await?;
            let next = FetchState::advance(page.next_page_token.clone());
            let items = page.take_items()?;
            pages += 1;

            debug!(
                "page {} of '{}': {} items, continuation: {}",
                pages,
                self.path,
                items.len(),
                !next.is_done()
            );

            for item in items {
                sink(item);
                delivered += 1;
                if Some(delivered) == self.limit {
                    return Ok(delivered);
                }
            }

            state = next;
        }

        Ok(delivered)
    }

    /// Fetch items as a stream, pages requested lazily as the stream is
    /// polled
    pub fn stream(self) -> impl Stream<Item = Result<Resource>> + 'a {
        let PagedFetch {
            client,
            path,
            query,
            limit,
        } = self;

        let initial = if limit == Some(0) {
            FetchState::Done
        } else {
            FetchState::start()
        };

        stream::try_unfold(
            (initial, 0usize),
            move |(state, delivered)| {
                let path = path.clone();
                let query = query.clone();
                async move {
                    let FetchState::Fetching(token) = state else {
                        return Ok::<_, crate::error::Error>(None);
                    };

                    let fetch = PagedFetch::new(client, path, query);
                    let page = fetch.fetch_page(token.as_deref()).await?;
                    let next = FetchState::advance(page.next_page_token.clone());
                    let mut items = page.take_items()?;

                    // Apply the cap, terminating instead of requesting more
                    let (next, delivered) = match limit {
                        Some(cap) if delivered + items.len() >= cap => {
                            items.truncate(cap - delivered);
                            (FetchState::Done, cap)
                        }
                        _ => (next, delivered + items.len()),
                    };

                    Ok(Some((items, (next, delivered))))
                }
            },
        )
        .map_ok(|batch| stream::iter(batch.into_iter().map(Ok)))
        .try_flatten()
    }

    /// Request one page, with the token applied when present
    async fn fetch_page(&self, page_token: Option<&str>) -> Result<ListPage> {
        let mut config = RequestConfig::new();
        for (key, value) in &self.query {
            config = config.query(key.clone(), value.clone());
        }
        if let Some(token) = page_token {
            config = config.query("pageToken", token);
        }
        self.client.get_json_with_config(&self.path, config).await
    }
}
