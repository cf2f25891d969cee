//! Error types for profile scraping.

use std::fmt;

/// A REQUIRED profile field that could not be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    CurrentRank,
    PeakRank,
    Avatar,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MissingField::CurrentRank => "current season rank",
            MissingField::PeakRank => "peak season rank",
            MissingField::Avatar => "avatar image",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} for {url}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("incomplete profile data for {username}: missing {field}")]
    IncompleteData { username: String, field: MissingField },
    #[error("invalid UID namespace {namespace:?}: {source}")]
    InvalidNamespace {
        namespace: String,
        #[source]
        source: uuid::Error,
    },
    #[error("invalid selector for {field} ({selector:?}): {message}")]
    InvalidSelector {
        field: &'static str,
        selector: String,
        message: String,
    },
    #[error("page schema error: {0}")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
