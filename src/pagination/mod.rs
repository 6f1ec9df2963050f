//! Paginated resource retrieval
//!
//! Every YouTube list endpoint pages the same way: a response carries an
//! `items` array and, while more pages exist, an opaque `nextPageToken` to
//! feed back as the `pageToken` query parameter. [`PagedFetch`] owns that
//! loop once, for all endpoints: issue the first request without a token,
//! deliver each item in server order, follow the token until the server
//! stops returning one or the caller's item cap is reached.

mod fetcher;
mod types;

pub use fetcher::PagedFetch;
pub use types::{FetchState, ListPage};
