//! Rendering of scraped profiles for stdout.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;

use crate::batch::ProfileOutcome;
use crate::models::ProfileRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Human,
}

/// Serialized form of a best-effort outcome.
#[derive(Serialize, Debug)]
struct OutcomeEntry<'a> {
    username: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<&'a ProfileRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn render_profiles(profiles: &[ProfileRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(profiles).context("Failed to serialize profiles")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(profiles).context("Failed to serialize profiles")
        }
        OutputFormat::Human => {
            let mut out = String::new();
            for profile in profiles {
                writeln!(out, "{}", summary_line(profile))?;
            }
            Ok(out)
        }
    }
}

pub fn render_outcomes(outcomes: &[ProfileOutcome], format: OutputFormat) -> Result<String> {
    let entries: Vec<OutcomeEntry<'_>> = outcomes
        .iter()
        .map(|o| OutcomeEntry {
            username: &o.username,
            profile: o.result.as_ref().ok(),
            error: o.error().map(|e| e.to_string()),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&entries).context("Failed to serialize outcomes")
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(&entries).context("Failed to serialize outcomes")
        }
        OutputFormat::Human => {
            let mut out = String::new();
            for outcome in outcomes {
                match &outcome.result {
                    Ok(profile) => writeln!(out, "{}", summary_line(profile))?,
                    Err(e) => writeln!(out, "{}: FAILED ({})", outcome.username, e)?,
                }
            }
            Ok(out)
        }
    }
}

fn summary_line(profile: &ProfileRecord) -> String {
    let season = &profile.current_season;
    let mut line = format!("{}: {}", profile.username, season.rank);
    if let Some(rating) = &season.rating {
        line.push_str(&format!(" ({})", rating));
    }
    line.push_str(&format!(", peak {}", profile.peak_season.rank));
    if let Some(rating) = &profile.peak_season.rating {
        line.push_str(&format!(" ({})", rating));
    }
    if let Some(matches) = &profile.matches_played {
        line.push_str(&format!(", {}", matches));
    }
    if let Some(score) = &profile.tracker_score {
        line.push_str(&format!(", score {}/{}", score.score, score.max));
    }
    if let Some(agent) = season.top_agents.first() {
        line.push_str(&format!(", top agent {}", agent.name));
    }
    line
}
