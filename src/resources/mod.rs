//! Typed list-request builders
//!
//! One small builder per listed resource. Each builder carries only the
//! fixed parameters of a listing: the part selector, the resource filter,
//! and the page size. The page token never lives here; it is owned by the
//! pagination loop.

mod captions;
mod channels;
mod comment_threads;
mod comments;
mod playlist_items;
mod playlists;
mod search;
mod subscriptions;
mod videos;

pub use captions::CaptionsList;
pub use channels::ChannelsList;
pub use comment_threads::{CommentThreadsList, ThreadOrder};
pub use comments::CommentsList;
pub use playlist_items::PlaylistItemsList;
pub use playlists::PlaylistsList;
pub use search::{SearchList, SearchOrder, SearchType};
pub use subscriptions::SubscriptionsList;
pub use videos::VideosList;

use crate::types::MAX_PAGE_SIZE;

/// A listing request against one API endpoint
pub trait ListRequest {
    /// Endpoint path under the API base, e.g. `"playlistItems"`
    fn endpoint(&self) -> &'static str;

    /// The request's fixed query parameters
    fn params(&self) -> Vec<(String, String)>;
}

/// Join part names into the comma-separated `part` selector
pub(crate) fn join_parts<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parts
        .into_iter()
        .map(|p| p.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Clamp a requested page size to the API maximum
pub(crate) fn clamp_page_size(n: u32) -> u32 {
    n.min(MAX_PAGE_SIZE)
}
