mod error;
mod github_client;
mod models;
mod reporter;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::github_client::GithubClient;
use crate::reporter::ActivityReporter;

/// Prints a categorized summary of a user's recent public GitHub activity.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// GitHub username to fetch activity for
    username: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    info!("Fetching activity for {}", args.username);
    let client = GithubClient::new()?;
    let body = client.fetch_events(&args.username).await?;

    let events = models::parse_events(&body)?;

    let mut reporter = ActivityReporter::new(args.username);
    reporter.report(&events)?;
    Ok(())
}
