//! CLI module
//!
//! Command-line interface for querying the API.
//!
//! # Commands
//!
//! - `channel` - Look up a channel by id or handle
//! - `videos` - Look up videos by id
//! - `playlist-items` - List the entries of a playlist
//! - `search` - Search for videos, channels, or playlists
//! - `comments` - List the comment threads of a video

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
