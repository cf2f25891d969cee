//! Scraper for public Valorant player profiles on tracker.gg.
//!
//! One linear pipeline per username: fetch the overview page, parse it with a
//! [`PageSchema`] of CSS selectors, and tag the result with a name-based UUID.

pub mod batch;
pub mod error;
pub mod fetch;
pub mod identity;
pub mod models;
pub mod parser;
pub mod render;

pub use batch::{ProfileOutcome, ProfileScraper};
pub use error::{MissingField, Result, ScrapeError};
pub use fetch::{FetchOptions, TrackerClient, DEFAULT_BASE_URL};
pub use identity::{parse_namespace, profile_uid, DEFAULT_UID_NAMESPACE};
pub use models::{
    AgentSummary, CurrentSeason, PeakSeason, ProfileRecord, RankEntry, StatPair, TrackerScore,
};
pub use parser::{PageSchema, ProfileParser};
pub use render::OutputFormat;

/// Usernames scraped when none are given on the command line.
pub const DEMO_USERNAMES: [&str; 2] = ["PAIN#1VCT", "Lord Gargamel#1000"];

/// Install the compact stderr subscriber used by the binaries.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
