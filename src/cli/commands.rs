//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// YouTube Data API v3 client CLI
#[derive(Parser, Debug)]
#[command(name = "yt-data")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides config file and environment)
    #[arg(short = 'k', long, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a channel by id or handle
    Channel {
        /// Channel id (UC...)
        #[arg(long, conflicts_with = "handle")]
        id: Option<String>,

        /// Channel handle (@creator)
        #[arg(long)]
        handle: Option<String>,

        /// Parts to request (comma-separated)
        #[arg(long, default_value = "snippet,statistics")]
        parts: String,
    },

    /// Look up videos by id
    Videos {
        /// Video ids
        #[arg(required = true)]
        ids: Vec<String>,

        /// Parts to request (comma-separated)
        #[arg(long, default_value = "snippet,statistics")]
        parts: String,
    },

    /// List the entries of a playlist
    PlaylistItems {
        /// Playlist id
        #[arg(long)]
        playlist: String,

        /// Maximum items to fetch across all pages
        #[arg(long)]
        limit: Option<usize>,

        /// Parts to request (comma-separated)
        #[arg(long, default_value = "snippet,contentDetails")]
        parts: String,
    },

    /// Search for videos, channels, or playlists
    Search {
        /// Search terms
        query: String,

        /// Restrict results to one channel
        #[arg(long)]
        channel: Option<String>,

        /// Maximum results to fetch across all pages
        #[arg(long, default_value = "25")]
        limit: usize,
    },

    /// List the comment threads of a video
    Comments {
        /// Video id
        #[arg(long)]
        video: String,

        /// Maximum threads to fetch across all pages
        #[arg(long)]
        limit: Option<usize>,
    },
}
