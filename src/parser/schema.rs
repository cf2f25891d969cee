//! Selector table for the tracker profile page.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, ScrapeError};

const TOP_AGENTS_PATH: &str = "#app > div.trn-wrapper > div.trn-container > div > main \
    > div.content.no-card-margin \
    > div.site-container.trn-grid.trn-grid--vertical.trn-grid--small \
    > div.trn-grid.container > div.area-main > div.top-agents.area-top-agents \
    > div > div > div.st-content > div";

/// CSS selectors for every logical field on the page.
///
/// Keys left out of a YAML override keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageSchema {
    pub segment_stats: String,
    pub playtime: String,
    pub matches: String,

    /// One match per rank row, current season first.
    pub rank_rows: String,
    pub rank_value: String,
    pub rank_label: String,

    pub tracker_score: String,

    pub top_agents: String,
    pub agent_item: String,
    pub agent_value: String,

    /// Regions whose stat rows are merged, in order.
    pub stat_regions: Vec<String>,
    pub stat_row: String,
    pub stat_name: String,
    pub stat_value: String,

    pub avatar: String,
    pub avatar_attr: String,
}

impl Default for PageSchema {
    fn default() -> Self {
        Self {
            segment_stats: ".segment-stats".to_string(),
            playtime: ".playtime".to_string(),
            matches: ".matches".to_string(),
            rank_rows: "div.rating-entry > div.rating-entry__rank > div.flex-row \
                > div.rating-entry__rank-info"
                .to_string(),
            rank_value: "div.value".to_string(),
            rank_label: "div.label".to_string(),
            tracker_score: ".score__container > div.score__text > div.value".to_string(),
            top_agents: TOP_AGENTS_PATH.to_string(),
            agent_item: "div.st-content__item".to_string(),
            agent_value: "div.value".to_string(),
            stat_regions: vec!["div.main".to_string(), ".giant-stats".to_string()],
            stat_row: "div.stat > div.wrapper > div.numbers".to_string(),
            stat_name: ".name".to_string(),
            stat_value: ".value".to_string(),
            avatar: ".user-avatar .user-avatar__image".to_string(),
            avatar_attr: "src".to_string(),
        }
    }
}

impl PageSchema {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| ScrapeError::Schema(e.to_string()))
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScrapeError::Schema(format!("failed to read {:?}: {}", path.as_ref(), e))
        })?;
        Self::from_yaml_str(&text)
    }
}
