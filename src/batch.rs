//! Sequential scraping of a list of usernames.

use tracing::{error, info};
use uuid::Uuid;

use crate::error::{Result, ScrapeError};
use crate::fetch::TrackerClient;
use crate::identity::parse_namespace;
use crate::models::ProfileRecord;
use crate::parser::ProfileParser;

/// Result for a single username of a best-effort run.
#[derive(Debug)]
pub struct ProfileOutcome {
    pub username: String,
    pub result: Result<ProfileRecord>,
}

/// Fetch, parse, and identify profiles one username at a time.
pub struct ProfileScraper {
    client: TrackerClient,
    parser: ProfileParser,
    namespace: Uuid,
}

impl ProfileScraper {
    pub fn new(client: TrackerClient, parser: ProfileParser, namespace: &str) -> Result<Self> {
        Ok(Self {
            client,
            parser,
            namespace: parse_namespace(namespace)?,
        })
    }

    pub async fn scrape(&self, username: &str) -> Result<ProfileRecord> {
        let html = self.client.fetch_profile_page(username).await?;
        self.parser.parse(&html, username, &self.namespace)
    }

    /// All-or-nothing: the first failure aborts the batch and no records are returned.
    pub async fn scrape_all(&self, usernames: &[String]) -> Result<Vec<ProfileRecord>> {
        info!("Scraping {} profiles", usernames.len());
        let mut profiles = Vec::with_capacity(usernames.len());
        for username in usernames {
            match self.scrape(username).await {
                Ok(profile) => profiles.push(profile),
                Err(e) => {
                    error!("Aborting batch at '{}': {}", username, e);
                    return Err(e);
                }
            }
        }
        info!("Scraped {} profiles", profiles.len());
        Ok(profiles)
    }

    /// Best effort: one outcome per username, in input order.
    pub async fn scrape_each(&self, usernames: &[String]) -> Vec<ProfileOutcome> {
        info!("Scraping {} profiles (keep going)", usernames.len());
        let mut outcomes = Vec::with_capacity(usernames.len());
        let mut failures = 0;
        for username in usernames {
            let result = self.scrape(username).await;
            if let Err(e) = &result {
                error!("Error scraping '{}': {}", username, e);
                failures += 1;
            }
            outcomes.push(ProfileOutcome {
                username: username.clone(),
                result,
            });
        }
        info!(
            "Scraped {} profiles, {} failed",
            outcomes.len() - failures,
            failures
        );
        outcomes
    }
}

impl ProfileOutcome {
    pub fn error(&self) -> Option<&ScrapeError> {
        self.result.as_ref().err()
    }
}
