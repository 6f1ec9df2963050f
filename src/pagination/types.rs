//! Pagination types
//!
//! The list-response envelope and the two-state fetch machine.

use crate::error::{Error, Result};
use crate::types::{PageInfo, Resource};
use serde::Deserialize;

/// The response envelope common to all YouTube list endpoints
///
/// `items` is optional on purpose: an envelope that *omits* the key is a
/// shape mismatch, which is different from a present-but-empty page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage {
    /// Resource kind, e.g. `youtube#playlistItemListResponse`
    #[serde(default)]
    pub kind: Option<String>,
    /// Entity tag of the response
    #[serde(default)]
    pub etag: Option<String>,
    /// The page's resources, in server-defined order
    pub items: Option<Vec<Resource>>,
    /// Continuation token; absent on the last page
    pub next_page_token: Option<String>,
    /// Paging metadata
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

impl ListPage {
    /// Take the page's items, reporting a missing `items` key as a shape
    /// mismatch
    pub fn take_items(self) -> Result<Vec<Resource>> {
        self.items.ok_or_else(|| Error::missing_field("items"))
    }

    /// The continuation token, with the empty string treated as absent
    pub fn continuation(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// State of a pagination run
///
/// `Fetching(None)` is the first page, `Fetching(Some(token))` a follow-up
/// page, `Done` means no token was returned or the item cap was reached.
/// There are no other states; a run is not resumable, a new run starts from
/// the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    /// A page remains to be requested, with the token to request it with
    Fetching(Option<String>),
    /// Pagination is complete
    Done,
}

impl FetchState {
    /// Initial state: first page, no token
    pub fn start() -> Self {
        Self::Fetching(None)
    }

    /// Compute the state after a page: follow a non-empty token, stop
    /// otherwise
    pub fn advance(next_page_token: Option<String>) -> Self {
        match next_page_token {
            Some(token) if !token.is_empty() => Self::Fetching(Some(token)),
            _ => Self::Done,
        }
    }

    /// Check whether pagination is complete
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}
