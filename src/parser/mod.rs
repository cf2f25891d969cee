//! Profile page parsing.

pub mod fields;
pub mod schema;

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::{MissingField, Result, ScrapeError};
use crate::identity::profile_uid;
use crate::models::{
    non_empty, AgentSummary, CurrentSeason, PeakSeason, ProfileRecord, RankEntry, StatPair,
};

pub use fields::{parse_tracker_score, split_rank};
pub use schema::PageSchema;

/// Compiled form of a [`PageSchema`].
#[derive(Debug, Clone)]
pub struct ProfileParser {
    segment_stats: Selector,
    playtime: Selector,
    matches: Selector,
    rank_rows: Selector,
    rank_value: Selector,
    rank_label: Selector,
    tracker_score: Selector,
    top_agents: Selector,
    agent_item: Selector,
    agent_value: Selector,
    stat_regions: Vec<Selector>,
    stat_row: Selector,
    stat_name: Selector,
    stat_value: Selector,
    avatar: Selector,
    avatar_attr: String,
}

fn compile(field: &'static str, selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::InvalidSelector {
        field,
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Concatenated text of every match of `selector` under `scope`.
fn text_under(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope.select(selector).flat_map(|el| el.text()).collect()
}

/// Matches of `selector` inside any match of `regions`, each node once and in
/// document order, even when regions nest.
fn select_within<'a>(
    document: &'a Html,
    regions: &Selector,
    selector: &Selector,
) -> Vec<ElementRef<'a>> {
    let region_ids: HashSet<_> = document.select(regions).map(|r| r.id()).collect();
    if region_ids.is_empty() {
        return Vec::new();
    }
    document
        .select(selector)
        .filter(|el| el.ancestors().any(|a| region_ids.contains(&a.id())))
        .collect()
}

impl ProfileParser {
    pub fn new(schema: &PageSchema) -> Result<Self> {
        let stat_regions = schema
            .stat_regions
            .iter()
            .map(|s| compile("stat_regions", s))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            segment_stats: compile("segment_stats", &schema.segment_stats)?,
            playtime: compile("playtime", &schema.playtime)?,
            matches: compile("matches", &schema.matches)?,
            rank_rows: compile("rank_rows", &schema.rank_rows)?,
            rank_value: compile("rank_value", &schema.rank_value)?,
            rank_label: compile("rank_label", &schema.rank_label)?,
            tracker_score: compile("tracker_score", &schema.tracker_score)?,
            top_agents: compile("top_agents", &schema.top_agents)?,
            agent_item: compile("agent_item", &schema.agent_item)?,
            agent_value: compile("agent_value", &schema.agent_value)?,
            stat_regions,
            stat_row: compile("stat_row", &schema.stat_row)?,
            stat_name: compile("stat_name", &schema.stat_name)?,
            stat_value: compile("stat_value", &schema.stat_value)?,
            avatar: compile("avatar", &schema.avatar)?,
            avatar_attr: schema.avatar_attr.clone(),
        })
    }

    /// Parse one profile page into a record.
    ///
    /// Fails with [`ScrapeError::IncompleteData`] when either rank or the avatar
    /// is missing. Every other field degrades to `None` or an empty list.
    pub fn parse(&self, html: &str, username: &str, namespace: &Uuid) -> Result<ProfileRecord> {
        let document = Html::parse_document(html);
        let incomplete = |field: MissingField| ScrapeError::IncompleteData {
            username: username.to_string(),
            field,
        };

        let (playtime, matches_played) = self.segment_stats(&document);
        if playtime.is_none() {
            warn!("No playtime found for {}", username);
        }
        if matches_played.is_none() {
            warn!("No matches played found for {}", username);
        }

        let mut ranks = self.ranks(&document).into_iter();
        let current = ranks.next().unwrap_or(RankEntry {
            name: None,
            rating: None,
        });
        let current_rank = current.name.ok_or_else(|| incomplete(MissingField::CurrentRank))?;
        let peak = ranks
            .next()
            .and_then(|r| r.name.map(|name| (name, r.rating)))
            .ok_or_else(|| incomplete(MissingField::PeakRank))?;

        let score_text: String = document
            .select(&self.tracker_score)
            .flat_map(|el| el.text())
            .collect();
        let tracker_score = parse_tracker_score(&score_text);
        if tracker_score.is_none() {
            warn!("No tracker score found for {} ({:?})", username, score_text.trim());
        }

        let top_agents = self.top_agents(&document);
        if top_agents.is_empty() {
            warn!("No top agents found for {}", username);
        }

        let stats = self.stats(&document);
        debug!("Found {} stats for {}", stats.len(), username);

        let avatar_url = document
            .select(&self.avatar)
            .next()
            .and_then(|el| el.value().attr(&self.avatar_attr))
            .and_then(|src| non_empty(src.to_string()))
            .ok_or_else(|| incomplete(MissingField::Avatar))?;

        Ok(ProfileRecord {
            uid: profile_uid(username, namespace),
            username: username.to_string(),
            avatar_url,
            matches_played,
            current_season: CurrentSeason {
                rank: current_rank,
                rating: current.rating,
                top_agents,
                playtime,
                stats,
            },
            peak_season: PeakSeason {
                rank: peak.0,
                rating: peak.1,
            },
            tracker_score,
        })
    }

    fn segment_stats(&self, document: &Html) -> (Option<String>, Option<String>) {
        let text = |selector: &Selector| -> String {
            select_within(document, &self.segment_stats, selector)
                .into_iter()
                .flat_map(|el| el.text())
                .collect()
        };
        (
            non_empty(text(&self.playtime)),
            non_empty(text(&self.matches)),
        )
    }

    fn ranks(&self, document: &Html) -> Vec<RankEntry> {
        document
            .select(&self.rank_rows)
            .map(|row| {
                let value = text_under(row, &self.rank_value);
                let label = text_under(row, &self.rank_label);
                let rank = split_rank(&value, &label);
                debug!("Rank row: name={:?} rating={:?}", rank.name, rank.rating);
                rank
            })
            .collect()
    }

    fn top_agents(&self, document: &Html) -> Vec<AgentSummary> {
        let mut agents = Vec::new();
        for item in select_within(document, &self.top_agents, &self.agent_item) {
            let values = item
                .select(&self.agent_value)
                .map(|v| v.text().collect::<String>())
                .collect();
            match AgentSummary::from_values(values) {
                Some(agent) => agents.push(agent),
                None => debug!("Skipping top agent entry without a name"),
            }
        }
        agents
    }

    fn stats(&self, document: &Html) -> Vec<StatPair> {
        let mut stats = Vec::new();
        for region_selector in &self.stat_regions {
            for row in select_within(document, region_selector, &self.stat_row) {
                let value = non_empty(text_under(row, &self.stat_value));
                match non_empty(text_under(row, &self.stat_name)) {
                    Some(name) => stats.push(StatPair { name, value }),
                    None => debug!("Skipping unnamed stat row {:?}", value),
                }
            }
        }
        stats
    }
}
