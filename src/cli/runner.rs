//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::YouTube;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::resources::{
    ChannelsList, CommentThreadsList, ListRequest, PlaylistItemsList, SearchList, VideosList,
};
use crate::types::Resource;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;

        match &self.cli.command {
            Commands::Channel { id, handle, parts } => {
                let mut request = ChannelsList::new().parts(split_parts(parts));
                match (id, handle) {
                    (Some(id), _) => request = request.id(id),
                    (None, Some(handle)) => request = request.for_handle(handle),
                    (None, None) => {
                        return Err(Error::config("Specify --id or --handle"));
                    }
                }
                print_one(&client.one(&request).await?)
            }
            Commands::Videos { ids, parts } => {
                let mut request = VideosList::new().parts(split_parts(parts));
                for id in ids {
                    request = request.id(id);
                }
                print_listing(&client, &request, None).await
            }
            Commands::PlaylistItems {
                playlist,
                limit,
                parts,
            } => {
                let request = PlaylistItemsList::new(playlist)
                    .parts(split_parts(parts))
                    .max_results(50);
                print_listing(&client, &request, *limit).await
            }
            Commands::Search {
                query,
                channel,
                limit,
            } => {
                let mut request = SearchList::new(query).max_results(50);
                if let Some(channel) = channel {
                    request = request.channel_id(channel);
                }
                print_listing(&client, &request, Some(*limit)).await
            }
            Commands::Comments { video, limit } => {
                let request = CommentThreadsList::for_video(video).max_results(50);
                print_listing(&client, &request, *limit).await
            }
        }
    }

    /// Build the client from flags, config file, and environment
    fn client(&self) -> Result<YouTube> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::from_env(),
        };
        if let Some(key) = &self.cli.api_key {
            config.api_key = Some(key.clone());
            config.oauth = None;
        }
        YouTube::from_config(&config)
    }
}

fn split_parts(parts: &str) -> Vec<&str> {
    parts.split(',').map(str::trim).collect()
}

/// Print a single resource as pretty JSON
fn print_one(resource: &Resource) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(resource)?);
    Ok(())
}

/// Print a listing, one JSON resource per line
async fn print_listing<R: ListRequest>(
    client: &YouTube,
    request: &R,
    limit: Option<usize>,
) -> Result<()> {
    let mut fetch = client.list(request);
    if let Some(cap) = limit {
        fetch = fetch.limit(cap);
    }

    let count = fetch
        .visit(|item| {
            println!("{item}");
        })
        .await?;
    tracing::debug!(count, endpoint = request.endpoint(), "listing complete");
    Ok(())
}
