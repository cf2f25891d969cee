//! Tracker Profiles - Scrapes Valorant player profiles from tracker.gg
//!
//! With no arguments, scrapes the two demonstration accounts under the default
//! namespace and prints the records as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracker_profiles::render::{render_outcomes, render_profiles};
use tracker_profiles::{
    init_logging, FetchOptions, OutputFormat, PageSchema, ProfileParser, ProfileScraper,
    TrackerClient, DEFAULT_BASE_URL, DEFAULT_UID_NAMESPACE, DEMO_USERNAMES,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape Valorant player profiles from tracker.gg", long_about = None)]
struct Args {
    /// Riot IDs to scrape, e.g. "Name#TAG"
    usernames: Vec<String>,

    /// UUID namespace used to derive profile UIDs
    #[arg(long, env = "TRACKER_UID_NAMESPACE", default_value = DEFAULT_UID_NAMESPACE)]
    namespace: String,

    /// Profile URL prefix; the encoded username and "/overview" are appended
    #[arg(long, env = "TRACKER_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// YAML file overriding page selectors
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Delay before each request in milliseconds
    #[arg(short, long, default_value_t = 0)]
    delay_ms: u64,

    /// Request timeout in seconds (client default when unset)
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// User-Agent header (client default when unset)
    #[arg(long, env = "TRACKER_USER_AGENT")]
    user_agent: Option<String>,

    /// Report every username instead of aborting on the first failure
    #[arg(short, long, default_value_t = false)]
    keep_going: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let args = Args::parse();
    init_logging(args.verbose)?;

    let schema = match &args.schema {
        Some(path) => PageSchema::from_yaml_file(path)
            .with_context(|| format!("Failed to load page schema from {:?}", path))?,
        None => PageSchema::default(),
    };
    let parser = ProfileParser::new(&schema).context("Invalid page schema")?;

    let options = FetchOptions {
        user_agent: args.user_agent.clone(),
        timeout: args.timeout_secs.map(Duration::from_secs),
        delay: Duration::from_millis(args.delay_ms),
    };
    let client = TrackerClient::new(&args.base_url, options)?;
    let scraper = ProfileScraper::new(client, parser, &args.namespace)?;

    let usernames = if args.usernames.is_empty() {
        info!("No usernames given, using demonstration accounts");
        DEMO_USERNAMES.iter().map(|s| s.to_string()).collect()
    } else {
        args.usernames.clone()
    };

    let output = if args.keep_going {
        let outcomes = scraper.scrape_each(&usernames).await;
        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        if failed > 0 {
            warn!("{} of {} profiles failed", failed, outcomes.len());
        }
        render_outcomes(&outcomes, args.format)?
    } else {
        let profiles = scraper
            .scrape_all(&usernames)
            .await
            .context("Profile batch failed")?;
        render_profiles(&profiles, args.format)?
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}
