//! Text heuristics applied to extracted node text.

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{non_empty, RankEntry, TrackerScore};

/// Rank-rating suffix such as `1,234RR`.
static RATING_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:,\d+)*RR").expect("Invalid rating pattern"));

/// Split a rank row into its name and rating.
///
/// The name is the value text with every rating suffix removed, falling back to
/// the label when that leaves nothing. The rating is the value text with the
/// first occurrence of the derived name removed. A name that also appears
/// inside unrelated text truncates the rating; that is accepted.
pub fn split_rank(value_text: &str, label_text: &str) -> RankEntry {
    let stripped = RATING_SUFFIX.replace_all(value_text, "");
    let name = non_empty(stripped.into_owned()).or_else(|| non_empty(label_text.to_string()));

    let rating = match &name {
        Some(name) => non_empty(value_text.replacen(name.as_str(), "", 1)),
        None => non_empty(value_text.to_string()),
    };

    RankEntry { name, rating }
}

/// Parse `"<score> / <max>"`. Thousands separators are ignored.
pub fn parse_tracker_score(text: &str) -> Option<TrackerScore> {
    let mut halves = text.split('/');
    let score = parse_count(halves.next()?)?;
    let max = parse_count(halves.next()?)?;
    Some(TrackerScore { score, max })
}

fn parse_count(s: &str) -> Option<u32> {
    s.trim().replace(',', "").parse().ok()
}
