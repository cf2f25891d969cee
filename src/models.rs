//! Profile records assembled from a tracker page.

use serde::{Deserialize, Serialize};

// ============================================================================
// Output Record
// ============================================================================

/// One scraped player profile. Built once per username per run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub uid: uuid::Uuid,
    pub username: String,
    pub avatar_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches_played: Option<String>,
    pub current_season: CurrentSeason,
    pub peak_season: PeakSeason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracker_score: Option<TrackerScore>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentSeason {
    pub rank: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    pub top_agents: Vec<AgentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playtime: Option<String>,
    pub stats: Vec<StatPair>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PeakSeason {
    pub rank: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerScore {
    pub score: u32,
    pub max: u32,
}

// ============================================================================
// Page Fragments
// ============================================================================

/// A rank row as read off the page. Row 0 is the current season, row 1 the peak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub name: Option<String>,
    pub rating: Option<String>,
}

/// Per-agent summary from the "top agents" widget, in DOM value order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AgentSummary {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_played: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub win_percent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kd_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_damage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_combat_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_damage_delta: Option<String>,
}

impl AgentSummary {
    /// Maps value nodes by position. Returns `None` when there is no name.
    pub fn from_values(values: Vec<String>) -> Option<Self> {
        let mut values = values.into_iter().map(non_empty);
        let name = values.next().flatten()?;
        let mut next = || values.next().flatten();

        Some(Self {
            name,
            time_played: next(),
            win_percent: next(),
            kd_ratio: next(),
            average_damage: next(),
            average_combat_score: next(),
            average_damage_delta: next(),
        })
    }
}

/// Generic name/value stat. Duplicate names are kept.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatPair {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

pub(crate) fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == s.len() {
        Some(s)
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_values_map_by_position() {
        let values = ["Jett", "120h", "52.1%", "1.21", "150.3", "245.0", "+22"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let agent = AgentSummary::from_values(values).unwrap();
        assert_eq!(agent.name, "Jett");
        assert_eq!(agent.time_played.as_deref(), Some("120h"));
        assert_eq!(agent.average_damage_delta.as_deref(), Some("+22"));
    }

    #[test]
    fn short_agent_rows_leave_trailing_metrics_absent() {
        let agent = AgentSummary::from_values(vec!["Sage".into(), " 3h ".into()]).unwrap();
        assert_eq!(agent.time_played.as_deref(), Some("3h"));
        assert_eq!(agent.win_percent, None);
        assert_eq!(agent.average_damage_delta, None);
    }

    #[test]
    fn agent_without_name_is_rejected() {
        assert!(AgentSummary::from_values(vec![]).is_none());
        assert!(AgentSummary::from_values(vec!["  ".into(), "3h".into()]).is_none());
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let peak = PeakSeason {
            rank: "Gold 2".into(),
            rating: None,
        };
        let json = serde_json::to_value(&peak).unwrap();
        assert_eq!(json, serde_json::json!({ "rank": "Gold 2" }));
    }
}
